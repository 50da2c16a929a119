use super::*;

/// The four byte type tag of a PNG chunk.
///
/// The format requires each of the four bytes to be an ascii letter (the case
/// of each letter carries meaning, eg: lowercase first letter marks an
/// ancillary chunk). This type can only be built from bytes that satisfy that,
/// so everything else in the module can take the tag as given.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkTag(AsciiArray<4>);
#[allow(nonstandard_style)]
impl ChunkTag {
  /// Image header
  pub const IHDR: Self = Self(AsciiArray(*b"IHDR"));
  /// Image data
  pub const IDAT: Self = Self(AsciiArray(*b"IDAT"));
  /// Image end
  pub const IEND: Self = Self(AsciiArray(*b"IEND"));

  /// Checks that all four bytes are ascii letters.
  #[inline]
  pub const fn new(bytes: [u8; 4]) -> Result<Self, PngError> {
    let [a, b, c, d] = bytes;
    if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() && c.is_ascii_alphabetic() && d.is_ascii_alphabetic() {
      Ok(Self(AsciiArray(bytes)))
    } else {
      Err(PngError::InvalidChunkTag)
    }
  }

  /// The tag bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    self.0.as_bytes()
  }

  /// If the chunk is critical (uppercase first letter).
  #[inline]
  #[must_use]
  pub const fn is_critical(&self) -> bool {
    self.0 .0[0].is_ascii_uppercase()
  }
}
impl Debug for ChunkTag {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Debug::fmt(&self.0, f)
  }
}
impl core::fmt::Display for ChunkTag {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Display::fmt(&self.0, f)
  }
}
impl TryFrom<[u8; 4]> for ChunkTag {
  type Error = PngError;
  #[inline]
  fn try_from(bytes: [u8; 4]) -> Result<Self, Self::Error> {
    Self::new(bytes)
  }
}
impl TryFrom<&[u8]> for ChunkTag {
  type Error = PngError;
  #[inline]
  fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
    match bytes {
      [a, b, c, d] => Self::new([*a, *b, *c, *d]),
      _ => Err(PngError::InvalidChunkTag),
    }
  }
}
impl TryFrom<&str> for ChunkTag {
  type Error = PngError;
  #[inline]
  fn try_from(s: &str) -> Result<Self, Self::Error> {
    Self::try_from(s.as_bytes())
  }
}

#[test]
fn test_chunk_tag_validation() {
  assert_eq!(ChunkTag::try_from("IHDR"), Ok(ChunkTag::IHDR));
  assert_eq!(ChunkTag::try_from(&b"IDAT"[..]), Ok(ChunkTag::IDAT));
  assert!(ChunkTag::try_from("tEXt").is_ok());
  //
  assert_eq!(ChunkTag::try_from(""), Err(PngError::InvalidChunkTag));
  assert_eq!(ChunkTag::try_from("IHD"), Err(PngError::InvalidChunkTag));
  assert_eq!(ChunkTag::try_from("IHDRX"), Err(PngError::InvalidChunkTag));
  assert_eq!(ChunkTag::try_from("ID4T"), Err(PngError::InvalidChunkTag));
  assert_eq!(ChunkTag::try_from(*b"IE D"), Err(PngError::InvalidChunkTag));
  assert_eq!(ChunkTag::try_from(&[0xC3, 0x89, b'N', b'D'][..]), Err(PngError::InvalidChunkTag));
  //
  assert!(ChunkTag::IEND.is_critical());
  assert!(!ChunkTag::try_from("gAMA").unwrap().is_critical());
  assert_eq!(alloc::format!("{:?}", ChunkTag::IHDR), "\"IHDR\"");
  assert_eq!(alloc::format!("{}", ChunkTag::IEND), "IEND");
}
