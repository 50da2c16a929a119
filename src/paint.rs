//! Module for deciding what the pixels look like.
//!
//! Every image is a vertical gradient from a top color to a bottom color (a
//! solid image is just a gradient where both colors match). A [`Finish`] then
//! layers some optional effects over that, always in this order:
//!
//! 1) **Scanlines:** every 4th row, starting with row 0, is darkened by 10 in
//!    each channel.
//! 2) **Vignette:** each pixel is faded toward black based on its distance to
//!    the left and right edges. The outer quarter on each side ramps down to
//!    black, the middle half is untouched.
//! 3) **Logo:** a cross centered in the image is painted in [`LOGO_ACCENT`].
//!
//! The output of this module is filtered scanline data, ready for
//! [`encode_rgb8`](crate::png::encode_rgb8). Nothing here knows about chunks.

use alloc::vec::Vec;

use bytemuck::cast_slice;

use crate::{
  png::{encode_rgb8, IHDR},
  PngError, RGB888,
};

/// The color of the logo cross.
pub const LOGO_ACCENT: RGB888 = RGB888::new(245, 158, 11);

/// Rows where `y % SCANLINE_PERIOD == 0` get darkened.
pub const SCANLINE_PERIOD: u32 = 4;

/// How much a darkened scanline loses from each channel.
pub const SCANLINE_DARKEN: u8 = 10;

/// The optional effects applied over the base gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Finish {
  /// darken every 4th row
  pub scanlines: bool,
  /// fade toward black at the left and right edges
  pub vignette: bool,
  /// paint the centered logo cross
  pub logo: bool,
}
impl Finish {
  /// No effects at all.
  pub const PLAIN: Self = Self { scanlines: false, vignette: false, logo: false };
  /// Scanlines plus vignette, the "technical" look of the production thumbnails.
  pub const TECHNICAL: Self = Self { scanlines: true, vignette: true, logo: false };
  /// Just the logo cross over the gradient.
  pub const LOGO: Self = Self { scanlines: false, vignette: false, logo: true };
}

/// Everything needed to produce one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageDescriptor {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// color of row 0
  pub top: RGB888,
  /// color the gradient heads toward at the bottom row
  pub bottom: RGB888,
  /// extra effects
  pub finish: Finish,
}
impl ImageDescriptor {
  /// A single flat color.
  #[inline]
  #[must_use]
  pub const fn solid(width: u32, height: u32, color: RGB888) -> Self {
    Self { width, height, top: color, bottom: color, finish: Finish::PLAIN }
  }

  /// A plain top to bottom gradient.
  #[inline]
  #[must_use]
  pub const fn gradient(width: u32, height: u32, top: RGB888, bottom: RGB888) -> Self {
    Self { width, height, top, bottom, finish: Finish::PLAIN }
  }

  /// Replaces the finish.
  #[inline]
  #[must_use]
  pub const fn with_finish(self, finish: Finish) -> Self {
    Self { finish, ..self }
  }

  /// The base color of row `y`, before any per-pixel effects.
  ///
  /// Row `y` sits at `y / height` of the way from `top` to `bottom`, so the
  /// last row lands just short of `bottom`.
  #[inline]
  #[must_use]
  pub fn row_color(&self, y: u32) -> RGB888 {
    let fade = f64::from(y) / f64::from(self.height);
    let color = self.top.lerp(self.bottom, fade);
    if self.finish.scanlines && y % SCANLINE_PERIOD == 0 {
      color.darken(SCANLINE_DARKEN)
    } else {
      color
    }
  }

  /// The vignette multiplier for column `x`, in `0.0 ..= 1.0`.
  #[inline]
  #[must_use]
  pub fn edge_fade(&self, x: u32) -> f64 {
    let fx = f64::from(x) / f64::from(self.width);
    (fx * 4.0).min(1.0) * ((1.0 - fx) * 4.0).min(1.0)
  }

  /// If the pixel at `(x, y)` is part of the logo cross.
  ///
  /// Distances are measured from pixel centers to the image center. The arms
  /// reach `3/10` of the shorter side out from the center, and each bar is
  /// `1/8` of the shorter side thick (both at least 1 pixel).
  #[must_use]
  pub fn in_logo(&self, x: u32, y: u32) -> bool {
    let short = u64::from(self.width.min(self.height));
    let arm = (3 * short / 10).max(1);
    let half_bar = (short / 16).max(1);
    // work in doubled coordinates so that pixel centers are integers
    let dx = (2 * u64::from(x) + 1).abs_diff(u64::from(self.width));
    let dy = (2 * u64::from(y) + 1).abs_diff(u64::from(self.height));
    let (arm, half_bar) = (2 * arm, 2 * half_bar);
    (dx <= arm && dy <= half_bar) || (dx <= half_bar && dy <= arm)
  }

  /// The final color of the pixel at `(x, y)`.
  #[inline]
  #[must_use]
  pub fn pixel(&self, x: u32, y: u32) -> RGB888 {
    self.shade(self.row_color(y), x, y)
  }

  #[inline]
  fn shade(&self, row_color: RGB888, x: u32, y: u32) -> RGB888 {
    if self.finish.logo && self.in_logo(x, y) {
      return LOGO_ACCENT;
    }
    if self.finish.vignette {
      row_color.scale(self.edge_fade(x))
    } else {
      row_color
    }
  }

  /// Builds the filtered scanline data: per row, a `0` filter byte and then
  /// `width` RGB pixels.
  ///
  /// ## Failure
  /// * Either dimension is 0 or larger than `2^31 - 1`.
  /// * The buffer size overflows `usize`, or can't be allocated.
  pub fn scanlines(&self) -> Result<Vec<u8>, PngError> {
    let ihdr = IHDR::rgb8(self.width, self.height)?;
    let mut filtered: Vec<u8> = Vec::new();
    filtered.try_reserve(ihdr.filtered_len()?)?;
    let mut row: Vec<RGB888> = Vec::new();
    row.try_reserve(usize::try_from(self.width)?)?;
    for y in 0..self.height {
      let row_color = self.row_color(y);
      row.clear();
      row.extend((0..self.width).map(|x| self.shade(row_color, x, y)));
      filtered.push(0);
      filtered.extend_from_slice(cast_slice(row.as_slice()));
    }
    Ok(filtered)
  }

  /// Renders and encodes the image as PNG bytes.
  pub fn encode(&self) -> Result<Vec<u8>, PngError> {
    encode_rgb8(self.width, self.height, &self.scanlines()?)
  }
}

/// Encodes a `width` by `height` image of a single color.
///
/// ```
/// let png = placeholder_png::create_png(600, 400, (245, 158, 11)).unwrap();
/// let image = placeholder_png::png::decode_rgb8(&png).unwrap();
/// assert_eq!((image.width, image.height), (600, 400));
/// ```
#[inline]
pub fn create_png(width: u32, height: u32, color: impl Into<RGB888>) -> Result<Vec<u8>, PngError> {
  ImageDescriptor::solid(width, height, color.into()).encode()
}

#[cfg(test)]
mod tests {
  use super::*;

  const NAVY: RGB888 = RGB888::new(15, 23, 42);
  const INK: RGB888 = RGB888::new(2, 6, 23);

  #[test]
  fn test_scanline_layout() {
    let desc = ImageDescriptor::solid(3, 2, RGB888::new(1, 2, 3));
    assert_eq!(
      desc.scanlines().unwrap(),
      [0, 1, 2, 3, 1, 2, 3, 1, 2, 3, 0, 1, 2, 3, 1, 2, 3, 1, 2, 3]
    );
    assert_eq!(ImageDescriptor::solid(0, 2, NAVY).scanlines(), Err(PngError::WidthOrHeightZero));
  }

  #[test]
  fn test_oversized_image_is_an_error() {
    use crate::png::PNG_MAX_U31;
    // legal dimensions, but far more bytes than any address space allows
    let desc = ImageDescriptor::solid(PNG_MAX_U31, PNG_MAX_U31, RGB888::BLACK);
    let expected = if cfg!(target_pointer_width = "64") { PngError::Alloc } else { PngError::CheckedMath };
    assert_eq!(desc.scanlines(), Err(expected));
    assert_eq!(desc.encode(), Err(expected));
  }

  #[test]
  fn test_gradient_rows() {
    let desc = ImageDescriptor::gradient(4, 630, NAVY, INK);
    assert_eq!(desc.row_color(0), NAVY);
    let last = desc.row_color(629);
    for (got, want) in <[u8; 3]>::from(last).into_iter().zip(<[u8; 3]>::from(INK)) {
      assert!(got.abs_diff(want) <= 1, "{last:?} vs {INK:?}");
    }
    // checked by hand
    let desc = ImageDescriptor::gradient(1, 4, RGB888::new(200, 0, 100), RGB888::new(0, 200, 100));
    assert_eq!(desc.row_color(1), RGB888::new(150, 50, 100));
    assert_eq!(desc.row_color(2), RGB888::new(100, 100, 100));
  }

  #[test]
  fn test_scanline_effect() {
    let desc = ImageDescriptor::solid(1, 9, RGB888::new(5, 100, 200))
      .with_finish(Finish { scanlines: true, ..Finish::PLAIN });
    for y in 0..9 {
      let expected =
        if y % 4 == 0 { RGB888::new(0, 90, 190) } else { RGB888::new(5, 100, 200) };
      assert_eq!(desc.row_color(y), expected, "row {y}");
    }
  }

  #[test]
  fn test_vignette_effect() {
    let white = RGB888::new(255, 255, 255);
    let desc = ImageDescriptor::solid(8, 1, white).with_finish(Finish { vignette: true, ..Finish::PLAIN });
    // x/w: 0, 1/8, 2/8 ... the outer quarter ramps, the middle is untouched
    assert_eq!(desc.pixel(0, 0), RGB888::BLACK);
    assert_eq!(desc.pixel(1, 0), RGB888::new(127, 127, 127));
    for x in 2..=6 {
      assert_eq!(desc.pixel(x, 0), white, "column {x}");
    }
    assert_eq!(desc.pixel(7, 0), RGB888::new(127, 127, 127));
    assert_eq!(desc.edge_fade(0), 0.0);
    assert_eq!(desc.edge_fade(4), 1.0);
  }

  #[test]
  fn test_logo_cross() {
    let desc = ImageDescriptor::gradient(64, 64, NAVY, INK).with_finish(Finish::LOGO);
    // center and both arms
    assert_eq!(desc.pixel(32, 32), LOGO_ACCENT);
    assert_eq!(desc.pixel(31, 31), LOGO_ACCENT);
    assert_eq!(desc.pixel(32, 14), LOGO_ACCENT);
    assert_eq!(desc.pixel(50, 32), LOGO_ACCENT);
    // just past the arm ends, and the corners between arms
    assert_ne!(desc.pixel(32, 12), LOGO_ACCENT);
    assert_ne!(desc.pixel(52, 32), LOGO_ACCENT);
    assert_ne!(desc.pixel(40, 40), LOGO_ACCENT);
    assert_eq!(desc.pixel(0, 0), NAVY);
    // the cross is symmetric
    for y in 0..64 {
      for x in 0..64 {
        assert_eq!(desc.in_logo(x, y), desc.in_logo(63 - x, y), "({x}, {y})");
        assert_eq!(desc.in_logo(x, y), desc.in_logo(y, x), "({x}, {y})");
      }
    }
    // even a 1x1 image gets a (one pixel) cross
    let tiny = ImageDescriptor::solid(1, 1, NAVY).with_finish(Finish::LOGO);
    assert_eq!(tiny.pixel(0, 0), LOGO_ACCENT);
  }

  #[test]
  fn test_logo_wins_over_vignette() {
    let desc = ImageDescriptor::solid(64, 8, NAVY)
      .with_finish(Finish { scanlines: true, vignette: true, logo: true });
    // arm = 3*8/10 = 2, half bar = 1: center pixels are accent even on a scanline row
    assert_eq!(desc.pixel(32, 4), LOGO_ACCENT);
    assert_eq!(desc.pixel(0, 4), RGB888::BLACK);
  }

  #[test]
  fn test_create_png_is_deterministic() {
    let a = create_png(40, 30, (245, 158, 11)).unwrap();
    let b = create_png(40, 30, [245, 158, 11]).unwrap();
    assert_eq!(a, b);
  }
}
