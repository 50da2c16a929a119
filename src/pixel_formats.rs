//! Module for pixel formats.
//!
//! The encoder only ever writes 8-bit truecolor data, so there's exactly one
//! format here. Because it's `Pod`, a `&[RGB888]` row can be viewed as plain
//! bytes with [`bytemuck::cast_slice`] and copied straight into a scanline.

use bytemuck::{Pod, Zeroable};

/// Red, green, and blue, 8 bits each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Pod, Zeroable)]
#[repr(C)]
pub struct RGB888 {
  /// red
  pub r: u8,
  /// green
  pub g: u8,
  /// blue
  pub b: u8,
}
impl RGB888 {
  /// Pure black.
  pub const BLACK: Self = Self::new(0, 0, 0);

  /// Makes a color from the three channel values.
  #[inline]
  #[must_use]
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  /// Subtracts `amount` from every channel, stopping at zero.
  #[inline]
  #[must_use]
  pub const fn darken(self, amount: u8) -> Self {
    Self::new(self.r.saturating_sub(amount), self.g.saturating_sub(amount), self.b.saturating_sub(amount))
  }

  /// Multiplies every channel by `factor`, truncating toward zero.
  ///
  /// `factor` is expected to be in `0.0 ..= 1.0`; anything else saturates.
  #[inline]
  #[must_use]
  pub fn scale(self, factor: f64) -> Self {
    Self::new(
      (f64::from(self.r) * factor) as u8,
      (f64::from(self.g) * factor) as u8,
      (f64::from(self.b) * factor) as u8,
    )
  }

  /// Linear blend from `self` (at `t = 0.0`) to `other` (at `t = 1.0`),
  /// truncating toward zero.
  ///
  /// Channels that are equal in both colors come out unchanged for any `t`.
  #[inline]
  #[must_use]
  pub fn lerp(self, other: Self, t: f64) -> Self {
    #[inline]
    fn channel(a: u8, b: u8, t: f64) -> u8 {
      if a == b {
        return a;
      }
      (f64::from(a) * (1.0 - t) + f64::from(b) * t) as u8
    }
    Self::new(channel(self.r, other.r, t), channel(self.g, other.g, t), channel(self.b, other.b, t))
  }
}
impl From<[u8; 3]> for RGB888 {
  #[inline]
  fn from([r, g, b]: [u8; 3]) -> Self {
    Self { r, g, b }
  }
}
impl From<(u8, u8, u8)> for RGB888 {
  #[inline]
  fn from((r, g, b): (u8, u8, u8)) -> Self {
    Self { r, g, b }
  }
}
impl From<RGB888> for [u8; 3] {
  #[inline]
  fn from(RGB888 { r, g, b }: RGB888) -> Self {
    [r, g, b]
  }
}

#[test]
fn test_rgb888_blending() {
  let top = RGB888::new(245, 158, 11);
  let bottom = RGB888::new(120, 53, 15);
  assert_eq!(top.lerp(bottom, 0.0), top);
  assert_eq!(top.lerp(bottom, 1.0), bottom);
  assert_eq!(RGB888::new(200, 100, 0).lerp(RGB888::new(0, 0, 200), 0.5), RGB888::new(100, 50, 100));
  //
  assert_eq!(RGB888::new(5, 10, 200).darken(10), RGB888::new(0, 0, 190));
  assert_eq!(RGB888::new(100, 51, 3).scale(0.5), RGB888::new(50, 25, 1));
  assert_eq!(top.scale(1.0), top);
  assert_eq!(top.scale(0.0), RGB888::BLACK);
  // 5 * (8/9) + 5 * (1/9) isn't exactly 5 in floating point
  for i in 0..=9 {
    assert_eq!(RGB888::new(5, 5, 5).lerp(RGB888::new(5, 5, 5), f64::from(i) / 9.0), RGB888::new(5, 5, 5));
  }
}
