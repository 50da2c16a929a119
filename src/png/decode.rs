use miniz_oxide::inflate::decompress_to_vec_zlib;

use super::*;

/// An owned 8-bit RGB image, pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRGB8 {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// `width * height` pixels, top row first
  pub pixels: Vec<RGB888>,
}
impl ImageRGB8 {
  /// Gets the pixel at `(x, y)`, if it's in bounds.
  #[inline]
  #[must_use]
  pub fn get(&self, x: u32, y: u32) -> Option<RGB888> {
    if x < self.width && y < self.height {
      self.pixels.get((y as usize) * (self.width as usize) + (x as usize)).copied()
    } else {
      None
    }
  }

  /// Iterates the rows of the image, top to bottom.
  #[inline]
  pub fn rows(&self) -> impl Iterator<Item = &[RGB888]> {
    self.pixels.chunks_exact(self.width as usize)
  }
}

/// Decodes the output of [`encode_rgb8`] back into pixels.
///
/// This is a strict reader: every chunk CRC is checked, the first chunk must
/// be `IHDR`, the image must be 8-bit RGB and not interlaced, every scanline
/// must use filter type 0, and the stream must end with `IEND`. Anything else
/// is an error rather than a best effort.
pub fn decode_rgb8(bytes: &[u8]) -> Result<ImageRGB8, PngError> {
  if !is_png_header_correct(bytes) {
    return Err(PngError::Parse);
  }
  let mut it = RawPngChunkIter::new(bytes);

  let first = it.next().ok_or(PngError::Parse)?;
  first.check_crc()?;
  if first.tag()? != ChunkTag::IHDR {
    return Err(PngError::Parse);
  }
  let ihdr = IHDR::try_from(first.data)?;
  if ihdr.width == 0 || ihdr.height == 0 {
    return Err(PngError::WidthOrHeightZero);
  }
  if ihdr.color_type != PngColorType::RGB || ihdr.bit_depth != 8 || ihdr.is_interlaced {
    return Err(PngError::Parse);
  }

  let mut zlib: Vec<u8> = Vec::new();
  let mut saw_iend = false;
  for chunk in it.by_ref() {
    chunk.check_crc()?;
    match chunk.tag()? {
      ChunkTag::IDAT => zlib.extend_from_slice(chunk.data),
      ChunkTag::IEND => {
        saw_iend = true;
        break;
      }
      tag if tag.is_critical() => return Err(PngError::Parse),
      _ => (),
    }
  }
  if !saw_iend || !it.remaining().is_empty() {
    return Err(PngError::Parse);
  }

  let filtered = decompress_to_vec_zlib(&zlib).map_err(|_| PngError::Decompress)?;
  if filtered.len() != ihdr.filtered_len()? {
    return Err(PngError::Parse);
  }
  let pixel_count =
    (ihdr.width as usize).checked_mul(ihdr.height as usize).ok_or(PngError::CheckedMath)?;
  let mut pixels: Vec<RGB888> = Vec::new();
  pixels.try_reserve(pixel_count)?;
  for line in filtered.chunks_exact(ihdr.bytes_per_filterline()?) {
    let (filter, data) = line.split_at(1);
    if filter != [0] {
      return Err(PngError::Parse);
    }
    pixels.extend_from_slice(bytemuck::cast_slice::<u8, RGB888>(data));
  }
  Ok(ImageRGB8 { width: ihdr.width, height: ihdr.height, pixels })
}

#[test]
fn test_decode_rgb8_round_trip() {
  let filtered = [0, 1, 2, 3, 4, 5, 6, 0, 7, 8, 9, 10, 11, 12];
  let png = encode_rgb8(2, 2, &filtered).unwrap();
  let image = decode_rgb8(&png).unwrap();
  assert_eq!((image.width, image.height), (2, 2));
  assert_eq!(image.get(0, 0), Some(RGB888::new(1, 2, 3)));
  assert_eq!(image.get(1, 1), Some(RGB888::new(10, 11, 12)));
  assert_eq!(image.get(2, 0), None);
  assert_eq!(image.rows().count(), 2);
}

#[test]
fn test_decode_rgb8_rejects() {
  let png = encode_rgb8(1, 1, &[0, 1, 2, 3]).unwrap();
  assert_eq!(decode_rgb8(&png[1..]), Err(PngError::Parse));
  // dropping the IEND chunk
  assert_eq!(decode_rgb8(&png[..png.len() - CHUNK_OVERHEAD]), Err(PngError::Parse));
  // corrupting a byte of the IHDR payload
  let mut bad = png.clone();
  bad[20] ^= 0x10;
  assert_eq!(decode_rgb8(&bad), Err(PngError::CrcMismatch));
  // a non-zero filter byte
  let png = encode_rgb8(1, 1, &[1, 1, 2, 3]).unwrap();
  assert_eq!(decode_rgb8(&png), Err(PngError::Parse));
}

#[test]
fn test_decode_rgb8_huge_header() {
  // a 1x1 image whose header claims the largest legal size
  let mut png = encode_rgb8(1, 1, &[0, 1, 2, 3]).unwrap();
  png[16..24].copy_from_slice(&[0x7F, 0xFF, 0xFF, 0xFF, 0x7F, 0xFF, 0xFF, 0xFF]);
  let crc = png_crc(png[12..29].iter().copied());
  png[29..33].copy_from_slice(&crc.to_be_bytes());
  let err = decode_rgb8(&png).unwrap_err();
  assert!(matches!(err, PngError::Parse | PngError::CheckedMath), "{err:?}");
}
