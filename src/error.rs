use alloc::collections::TryReserveError;
use core::{fmt, num::TryFromIntError};

/// An error from encoding (or checking) PNG data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngError {
  /// A chunk tag wasn't exactly four ascii letters.
  InvalidChunkTag,

  /// A chunk payload exceeds the `2^31 - 1` byte limit of the format.
  ChunkTooLong,

  /// The requested width and/or height of the image is 0.
  WidthOrHeightZero,

  /// The requested width and/or height exceeds `2^31 - 1`.
  DimensionsTooLarge,

  /// The filtered scanline buffer doesn't match the declared dimensions.
  ScanlineLength,

  /// Failed to parse the data given.
  Parse,

  /// A chunk's declared CRC doesn't match its contents.
  CrcMismatch,

  /// The `IDAT` data isn't a valid zlib stream.
  Decompress,

  /// A checked math operation failed.
  CheckedMath,

  /// The allocator couldn't give us enough space.
  Alloc,
}
impl fmt::Display for PngError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::InvalidChunkTag => "chunk tag must be exactly 4 ascii letters",
      Self::ChunkTooLong => "chunk payload is longer than 2^31-1 bytes",
      Self::WidthOrHeightZero => "image width and height must be non-zero",
      Self::DimensionsTooLarge => "image width or height is larger than 2^31-1",
      Self::ScanlineLength => "scanline buffer length doesn't match the image dimensions",
      Self::Parse => "malformed PNG data",
      Self::CrcMismatch => "chunk CRC doesn't match its contents",
      Self::Decompress => "image data failed to decompress",
      Self::CheckedMath => "image size computation overflowed",
      Self::Alloc => "not enough memory for the image",
    })
  }
}
impl core::error::Error for PngError {}

impl From<TryFromIntError> for PngError {
  #[inline]
  fn from(_: TryFromIntError) -> Self {
    Self::CheckedMath
  }
}
impl From<TryReserveError> for PngError {
  #[inline]
  fn from(_: TryReserveError) -> Self {
    Self::Alloc
  }
}
