#![forbid(unsafe_code)]

//! Module for writing PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! ## What Gets Written
//!
//! Only one kind of PNG comes out of this module: 8 bits per channel RGB
//! (color type 2), not interlaced, with every scanline using filter type 0
//! ("None"). The datastream is always exactly:
//!
//! 1) The 8 byte [`PNG_SIGNATURE`].
//! 2) An `IHDR` chunk, see [`IHDR`].
//! 3) A single `IDAT` chunk holding the Zlib compressed scanlines.
//! 4) An empty `IEND` chunk.
//!
//! No ancillary chunks are ever emitted.
//!
//! ## Chunks
//!
//! Every chunk is laid out as a big-endian `u32` payload length, the four byte
//! tag, the payload, and then a big-endian CRC-32 computed over the tag and the
//! payload (but *not* the length). [`pack_chunk`] and [`write_chunk`] handle
//! that layout, and a [`ChunkTag`] can only be built from four ascii letters,
//! so a malformed tag is caught before any bytes are written.
//!
//! ## Reading It Back
//!
//! [`RawPngChunkIter`] and [`decode_rgb8`] exist so that a freshly written file
//! can be checked. They understand exactly what [`encode_rgb8`] produces and
//! nothing more: they are not a general PNG decoder.

use core::fmt::Debug;

use alloc::vec::Vec;

use crate::{AsciiArray, PngError, RGB888};

mod crc32;
pub use crc32::*;

mod chunk_tag;
pub use chunk_tag::*;

mod chunk;
pub use chunk::*;

mod ihdr;
pub use ihdr::*;

mod encode;
pub use encode::*;

mod raw_chunk;
pub use raw_chunk::*;

mod decode;
pub use decode::*;

/// The first eight bytes of a PNG datastream.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Largest value the format allows for a chunk length, width, or height.
pub const PNG_MAX_U31: u32 = (1 << 31) - 1;

/// Checks if the PNG's initial 8 bytes are correct.
///
/// * If this is the case, the rest of the bytes are very likely PNG data.
/// * If this is *not* the case, the rest of the bytes are very likely *not* PNG
///   data.
#[inline]
#[must_use]
pub const fn is_png_header_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}

#[test]
fn test_is_png_header_correct() {
  assert!(is_png_header_correct(&PNG_SIGNATURE));
  assert!(is_png_header_correct(&[137, 80, 78, 71, 13, 10, 26, 10, 0, 0]));
  assert!(!is_png_header_correct(&PNG_SIGNATURE[..7]));
  assert!(!is_png_header_correct(b"GIF89a\0\0"));
}
