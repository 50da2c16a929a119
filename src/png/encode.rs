use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};

use super::*;

/// Zlib level used for `IDAT` data. Image sizes here are small, so always go
/// for the smallest output.
pub const IDAT_COMPRESSION_LEVEL: u8 = CompressionLevel::BestCompression as u8;

/// Encodes already-filtered scanlines as a complete 8-bit RGB PNG.
///
/// `filtered` must hold `height` lines of `1 + width * 3` bytes each: the
/// filter type byte followed by the line's `[r, g, b]` pixel data. The whole
/// buffer is compressed into a single `IDAT` chunk.
///
/// ## Failure
/// * `width` or `height` is 0, or larger than `2^31 - 1`.
/// * `filtered` has the wrong length for the dimensions.
/// * The compressed data doesn't fit in one chunk.
pub fn encode_rgb8(width: u32, height: u32, filtered: &[u8]) -> Result<Vec<u8>, PngError> {
  let ihdr = IHDR::rgb8(width, height)?;
  if filtered.len() != ihdr.filtered_len()? {
    return Err(PngError::ScanlineLength);
  }
  let zlib = compress_to_vec_zlib(filtered, IDAT_COMPRESSION_LEVEL);

  let mut png =
    Vec::with_capacity(PNG_SIGNATURE.len() + 3 * CHUNK_OVERHEAD + IHDR::PAYLOAD_LEN + zlib.len());
  png.extend_from_slice(&PNG_SIGNATURE);
  write_chunk(&mut png, ChunkTag::IHDR, &ihdr.to_bytes())?;
  write_chunk(&mut png, ChunkTag::IDAT, &zlib)?;
  write_chunk(&mut png, ChunkTag::IEND, &[])?;
  log::debug!(
    "encoded {width}x{height} RGB8: {} filtered bytes -> {} byte PNG",
    filtered.len(),
    png.len()
  );
  Ok(png)
}

#[test]
fn test_encode_rgb8_layout() {
  // 2x1: red, blue
  let png = encode_rgb8(2, 1, &[0, 255, 0, 0, 0, 0, 255]).unwrap();
  assert!(is_png_header_correct(&png));
  assert_eq!(&png[8..12], &13_u32.to_be_bytes());
  assert_eq!(&png[12..16], b"IHDR");
  assert_eq!(&png[16..29], &IHDR::rgb8(2, 1).unwrap().to_bytes());
  assert_eq!(&png[37..41], b"IDAT");
  assert_eq!(&png[png.len() - CHUNK_OVERHEAD..], &pack_chunk(ChunkTag::IEND, &[]).unwrap()[..]);
}

#[test]
fn test_encode_rgb8_rejects() {
  assert_eq!(encode_rgb8(0, 1, &[]), Err(PngError::WidthOrHeightZero));
  assert_eq!(encode_rgb8(1, 0, &[]), Err(PngError::WidthOrHeightZero));
  assert_eq!(encode_rgb8(1, 1, &[0, 1, 2]), Err(PngError::ScanlineLength));
  assert_eq!(encode_rgb8(1, 1, &[0, 1, 2, 3, 4]), Err(PngError::ScanlineLength));
}
