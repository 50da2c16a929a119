use super::*;

/// An unparsed chunk from a PNG.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawPngChunk<'b> {
  /// The tag bytes as found, not yet validated.
  pub chunk_ty: AsciiArray<4>,
  /// The payload.
  pub data: &'b [u8],
  /// The CRC stored after the payload.
  pub declared_crc: u32,
}
impl Debug for RawPngChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("RawPngChunk")
      .field("chunk_ty", &self.chunk_ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}
impl RawPngChunk<'_> {
  /// The validated tag of this chunk.
  #[inline]
  pub fn tag(&self) -> Result<ChunkTag, PngError> {
    ChunkTag::new(self.chunk_ty.0)
  }

  /// Computes the CRC that the chunk *should* have.
  #[inline]
  #[must_use]
  pub fn actual_crc(&self) -> u32 {
    png_crc(self.chunk_ty.as_bytes().iter().chain(self.data.iter()).copied())
  }

  /// Checks the declared CRC against the actual CRC.
  #[inline]
  pub fn check_crc(&self) -> Result<(), PngError> {
    if self.actual_crc() == self.declared_crc {
      Ok(())
    } else {
      Err(PngError::CrcMismatch)
    }
  }
}

/// An iterator that produces successive raw chunks from PNG bytes.
///
/// Iteration stops at the first chunk that's cut off by the end of the input.
/// Nothing about the input can make this panic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct RawPngChunkIter<'b>(&'b [u8]);
impl<'b> RawPngChunkIter<'b> {
  /// Pass the full PNG bytes, it will remove the PNG signature automatically.
  ///
  /// The signature is skipped without being checked, use
  /// [`is_png_header_correct`] for that.
  #[inline]
  pub const fn new(bytes: &'b [u8]) -> Self {
    match bytes {
      [_, _, _, _, _, _, _, _, rest @ ..] => Self(rest),
      _ => Self(&[]),
    }
  }

  /// Bytes after the last chunk produced so far.
  #[inline]
  #[must_use]
  pub const fn remaining(&self) -> &'b [u8] {
    self.0
  }
}
impl<'b> Iterator for RawPngChunkIter<'b> {
  type Item = RawPngChunk<'b>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let (len_bytes, rest) = split_array::<4>(self.0)?;
    let (chunk_ty, rest) = split_array::<4>(rest)?;
    let chunk_len = usize::try_from(u32::from_be_bytes(len_bytes)).ok()?;
    if rest.len() < chunk_len {
      return None;
    }
    let (data, rest) = rest.split_at(chunk_len);
    let (crc_bytes, rest) = split_array::<4>(rest)?;
    self.0 = rest;
    Some(RawPngChunk {
      chunk_ty: AsciiArray(chunk_ty),
      data,
      declared_crc: u32::from_be_bytes(crc_bytes),
    })
  }
}

#[inline]
fn split_array<const N: usize>(bytes: &[u8]) -> Option<([u8; N], &[u8])> {
  if bytes.len() >= N {
    let (head, tail) = bytes.split_at(N);
    Some((head.try_into().ok()?, tail))
  } else {
    None
  }
}

#[test]
fn test_raw_chunk_iter_round_trip() {
  let mut png = alloc::vec::Vec::from(PNG_SIGNATURE);
  write_chunk(&mut png, ChunkTag::IDAT, b"abc").unwrap();
  write_chunk(&mut png, ChunkTag::IEND, &[]).unwrap();

  let mut it = RawPngChunkIter::new(&png);
  let idat = it.next().unwrap();
  assert_eq!(idat.tag(), Ok(ChunkTag::IDAT));
  assert_eq!(idat.data, b"abc");
  assert_eq!(idat.check_crc(), Ok(()));
  let iend = it.next().unwrap();
  assert_eq!(iend.tag(), Ok(ChunkTag::IEND));
  assert!(iend.data.is_empty());
  assert_eq!(iend.check_crc(), Ok(()));
  assert!(it.next().is_none());
  assert!(it.remaining().is_empty());
}

#[test]
fn test_raw_chunk_iter_truncated_and_corrupt() {
  let mut png = alloc::vec::Vec::from(PNG_SIGNATURE);
  write_chunk(&mut png, ChunkTag::IDAT, b"abcdef").unwrap();

  // flip one payload bit: still iterates, but the CRC no longer matches.
  let mut corrupt = png.clone();
  corrupt[PNG_SIGNATURE.len() + 8] ^= 1;
  let chunk = RawPngChunkIter::new(&corrupt).next().unwrap();
  assert_eq!(chunk.check_crc(), Err(PngError::CrcMismatch));

  // any truncation hides the chunk entirely.
  for cut in PNG_SIGNATURE.len()..png.len() {
    assert!(RawPngChunkIter::new(&png[..cut]).next().is_none(), "cut at {cut}");
  }
}
