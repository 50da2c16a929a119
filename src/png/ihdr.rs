use super::*;

/// The types of color that PNG supports.
///
/// The encoder only writes [`RGB`](PngColorType::RGB), the rest are here so
/// that a header can be parsed (and rejected) faithfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngColorType {
  /// Greyscale
  Y = 0,
  /// Red, Green, Blue
  RGB = 2,
  /// Index into a palette.
  Index = 3,
  /// Greyscale + Alpha
  YA = 4,
  /// Red, Green, Blue, Alpha
  RGBA = 6,
}
impl PngColorType {
  /// The number of channels in this type of color.
  #[inline]
  #[must_use]
  pub const fn channel_count(self) -> usize {
    match self {
      Self::Y => 1,
      Self::RGB => 3,
      Self::Index => 1,
      Self::YA => 2,
      Self::RGBA => 4,
    }
  }
}
impl TryFrom<u8> for PngColorType {
  type Error = PngError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => PngColorType::Y,
      2 => PngColorType::RGB,
      3 => PngColorType::Index,
      4 => PngColorType::YA,
      6 => PngColorType::RGBA,
      _ => return Err(PngError::Parse),
    })
  }
}

/// Image Header
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IHDR {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// bits per channel
  pub bit_depth: u8,
  /// pixel color type
  pub color_type: PngColorType,
  /// if the image data is stored interlaced.
  pub is_interlaced: bool,
}
impl IHDR {
  /// Length of the `IHDR` payload.
  pub const PAYLOAD_LEN: usize = 13;

  /// The header for an 8-bit RGB, non-interlaced image.
  ///
  /// ## Failure
  /// * Either dimension is 0.
  /// * Either dimension exceeds `2^31 - 1`.
  #[inline]
  pub const fn rgb8(width: u32, height: u32) -> Result<Self, PngError> {
    if width == 0 || height == 0 {
      return Err(PngError::WidthOrHeightZero);
    }
    if width > PNG_MAX_U31 || height > PNG_MAX_U31 {
      return Err(PngError::DimensionsTooLarge);
    }
    Ok(Self { width, height, bit_depth: 8, color_type: PngColorType::RGB, is_interlaced: false })
  }

  /// You can call this if you must, but it complicates the apparent API to have
  /// it visible because most people don't ever need this.
  #[doc(hidden)]
  #[inline]
  #[must_use]
  pub const fn bits_per_pixel(&self) -> usize {
    (self.bit_depth as usize) * self.color_type.channel_count()
  }

  /// Bytes in one filtered line: the filter byte plus the line's pixel data.
  ///
  /// ## Failure
  /// * The line length doesn't fit in `usize` (possible on 32-bit targets).
  #[inline]
  pub fn bytes_per_filterline(&self) -> Result<usize, PngError> {
    // When pixels are less than 8 bits it's possible to end up with a partial
    // byte on the end, so round up.
    let bits = self.bits_per_pixel().checked_mul(usize::try_from(self.width)?).ok_or(PngError::CheckedMath)?;
    bits.checked_add(7).map(|b| 1 + b / 8).ok_or(PngError::CheckedMath)
  }

  /// Total length of the filtered (not yet compressed) image data.
  #[inline]
  pub fn filtered_len(&self) -> Result<usize, PngError> {
    self.bytes_per_filterline()?.checked_mul(usize::try_from(self.height)?).ok_or(PngError::CheckedMath)
  }

  /// The 13 payload bytes of the `IHDR` chunk.
  ///
  /// Compression method and filter method are always 0, the only values the
  /// format defines.
  #[inline]
  #[must_use]
  pub const fn to_bytes(&self) -> [u8; Self::PAYLOAD_LEN] {
    let [w0, w1, w2, w3] = self.width.to_be_bytes();
    let [h0, h1, h2, h3] = self.height.to_be_bytes();
    [w0, w1, w2, w3, h0, h1, h2, h3, self.bit_depth, self.color_type as u8, 0, 0, self.is_interlaced as u8]
  }
}
impl TryFrom<&[u8]> for IHDR {
  type Error = PngError;
  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    match value {
      [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, 0, 0, interlace_method] => {
        Ok(Self {
          width: u32::from_be_bytes([*w0, *w1, *w2, *w3]),
          height: u32::from_be_bytes([*h0, *h1, *h2, *h3]),
          bit_depth: match *color_type {
            0 if [1, 2, 4, 8, 16].contains(bit_depth) => *bit_depth,
            2 if [8, 16].contains(bit_depth) => *bit_depth,
            3 if [1, 2, 4, 8].contains(bit_depth) => *bit_depth,
            4 if [8, 16].contains(bit_depth) => *bit_depth,
            6 if [8, 16].contains(bit_depth) => *bit_depth,
            _ => return Err(PngError::Parse),
          },
          color_type: PngColorType::try_from(*color_type)?,
          is_interlaced: match interlace_method {
            0 => false,
            1 => true,
            _ => return Err(PngError::Parse),
          },
        })
      }
      _ => Err(PngError::Parse),
    }
  }
}

#[test]
fn test_ihdr_rgb8() {
  let ihdr = IHDR::rgb8(600, 400).unwrap();
  assert_eq!(ihdr.bytes_per_filterline(), Ok(1 + 600 * 3));
  assert_eq!(ihdr.filtered_len(), Ok((1 + 600 * 3) * 400));
  assert_eq!(ihdr.to_bytes(), [0, 0, 2, 88, 0, 0, 1, 144, 8, 2, 0, 0, 0]);
  assert_eq!(IHDR::try_from(&ihdr.to_bytes()[..]), Ok(ihdr));
  //
  assert_eq!(IHDR::rgb8(0, 1), Err(PngError::WidthOrHeightZero));
  assert_eq!(IHDR::rgb8(1, 0), Err(PngError::WidthOrHeightZero));
  assert_eq!(IHDR::rgb8(1 << 31, 1), Err(PngError::DimensionsTooLarge));
  assert!(IHDR::rgb8(PNG_MAX_U31, 1).is_ok());
}

#[test]
fn test_ihdr_parse_rejects() {
  // wrong length
  assert_eq!(IHDR::try_from(&[0_u8; 12][..]), Err(PngError::Parse));
  // RGB can't be 4-bit
  assert_eq!(IHDR::try_from(&[0, 0, 0, 1, 0, 0, 0, 1, 4, 2, 0, 0, 0][..]), Err(PngError::Parse));
  // unknown compression method
  assert_eq!(IHDR::try_from(&[0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 1, 0, 0][..]), Err(PngError::Parse));
  // unknown interlace method
  assert_eq!(IHDR::try_from(&[0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 2][..]), Err(PngError::Parse));
}

#[test]
fn test_ihdr_sizes_never_overflow() {
  let huge = IHDR::rgb8(PNG_MAX_U31, PNG_MAX_U31).unwrap();
  if cfg!(target_pointer_width = "64") {
    assert_eq!(huge.bytes_per_filterline(), Ok(1 + 3 * PNG_MAX_U31 as usize));
    assert!(huge.filtered_len().is_ok());
  } else {
    assert_eq!(huge.bytes_per_filterline(), Err(PngError::CheckedMath));
    assert_eq!(huge.filtered_len(), Err(PngError::CheckedMath));
  }
}
