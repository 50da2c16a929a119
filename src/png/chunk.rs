use super::*;

/// Number of bytes a chunk occupies around its payload (length, tag, CRC).
pub const CHUNK_OVERHEAD: usize = 12;

/// Appends one complete chunk to `out`.
///
/// The layout is: payload length (`u32` BE), `tag`, `payload`, then the CRC-32
/// of `tag` and `payload` (`u32` BE).
///
/// ## Failure
/// * The payload is longer than `2^31 - 1` bytes. Nothing is written to `out`
///   in this case.
pub fn write_chunk(out: &mut Vec<u8>, tag: ChunkTag, payload: &[u8]) -> Result<(), PngError> {
  let len = u32::try_from(payload.len()).map_err(|_| PngError::ChunkTooLong)?;
  if len > PNG_MAX_U31 {
    return Err(PngError::ChunkTooLong);
  }
  out.reserve(CHUNK_OVERHEAD + payload.len());
  out.extend_from_slice(&len.to_be_bytes());
  out.extend_from_slice(tag.as_bytes());
  out.extend_from_slice(payload);
  let crc = png_crc(tag.as_bytes().iter().chain(payload.iter()).copied());
  out.extend_from_slice(&crc.to_be_bytes());
  Ok(())
}

/// Packs one chunk into its own buffer.
///
/// This is [`write_chunk`] into a new `Vec`.
#[inline]
pub fn pack_chunk(tag: ChunkTag, payload: &[u8]) -> Result<Vec<u8>, PngError> {
  let mut out = Vec::with_capacity(CHUNK_OVERHEAD + payload.len());
  write_chunk(&mut out, tag, payload)?;
  Ok(out)
}

#[test]
fn test_pack_chunk_layout() {
  let iend = pack_chunk(ChunkTag::IEND, &[]).unwrap();
  assert_eq!(iend, [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]);

  let tag = ChunkTag::try_from("teSt").unwrap();
  let chunk = pack_chunk(tag, &[1, 2, 3]).unwrap();
  assert_eq!(chunk.len(), CHUNK_OVERHEAD + 3);
  assert_eq!(&chunk[..4], &3_u32.to_be_bytes());
  assert_eq!(&chunk[4..8], b"teSt");
  assert_eq!(&chunk[8..11], &[1, 2, 3]);
  let expected_crc = png_crc(b"teSt\x01\x02\x03".iter().copied());
  assert_eq!(&chunk[11..], &expected_crc.to_be_bytes());
}

#[test]
fn test_write_chunk_appends() {
  let mut out = alloc::vec![9, 9];
  write_chunk(&mut out, ChunkTag::IDAT, b"xyz").unwrap();
  write_chunk(&mut out, ChunkTag::IEND, &[]).unwrap();
  assert_eq!(&out[..2], &[9, 9]);
  assert_eq!(out.len(), 2 + CHUNK_OVERHEAD + 3 + CHUNK_OVERHEAD);
  assert_eq!(&out[out.len() - 8..out.len() - 4], b"IEND");
}
