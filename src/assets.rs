//! The fixed list of images a web project wants, and the code that writes
//! them to disk.
//!
//! Paths are relative to a root directory (the project root when run from
//! the command line). Dimensions, colors and paths are all hardcoded: pick an
//! [`AssetSet`] and call [`generate`].

use std::{
  format, fs, io,
  path::{Path, PathBuf},
  string::{String, ToString},
  vec::Vec,
};

use crate::{png::decode_rgb8, Finish, ImageDescriptor, PngError, RGB888};

/// An error from generating assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: io::Error },

  #[error("failed to write {}: {source}", path.display())]
  Write { path: PathBuf, source: io::Error },

  #[error("failed to read {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("failed to encode {}: {source}", path.display())]
  Encode { path: PathBuf, source: PngError },

  #[error("{} failed verification: {reason}", path.display())]
  Verify { path: PathBuf, reason: String },
}

/// One output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Asset {
  /// Path relative to the output root, always `/` separated.
  pub path: &'static str,
  /// What to draw.
  pub descriptor: ImageDescriptor,
}
impl Asset {
  const fn new(path: &'static str, descriptor: ImageDescriptor) -> Self {
    Self { path, descriptor }
  }

  /// Where this asset lands under `root`.
  #[must_use]
  pub fn path_under(&self, root: &Path) -> PathBuf {
    self.path.split('/').fold(root.to_path_buf(), |acc, part| acc.join(part))
  }
}

const OG_IMAGE: &str = "public/og-image.png";
const THUMB_SAMPLE: &str = "public/assets/images/thumb-sample.png";
const THUMB_CR: &str = "public/assets/images/thumb-cr.png";
const THUMB_STARFORGE: &str = "public/assets/images/thumb-starforge.png";

const DEEP_SPACE: (RGB888, RGB888) = (RGB888::new(15, 23, 42), RGB888::new(2, 6, 23));

const fn technical(width: u32, height: u32, (top, bottom): (RGB888, RGB888)) -> ImageDescriptor {
  ImageDescriptor::gradient(width, height, top, bottom).with_finish(Finish::TECHNICAL)
}

const fn logo(width: u32, height: u32, (top, bottom): (RGB888, RGB888)) -> ImageDescriptor {
  ImageDescriptor::gradient(width, height, top, bottom).with_finish(Finish::LOGO)
}

/// Open Graph image and the three game thumbnails: dark gradients with
/// scanlines and a vignette.
pub static PRODUCTION: [Asset; 4] = [
  Asset::new(OG_IMAGE, technical(1200, 630, DEEP_SPACE)),
  Asset::new(
    THUMB_SAMPLE,
    technical(600, 400, (RGB888::new(245, 158, 11), RGB888::new(120, 53, 15))),
  ),
  Asset::new(THUMB_CR, technical(600, 400, (RGB888::new(37, 99, 235), RGB888::new(30, 58, 138)))),
  Asset::new(
    THUMB_STARFORGE,
    technical(600, 400, (RGB888::new(220, 38, 38), RGB888::new(69, 10, 10))),
  ),
];

/// The logo images: social card and favicon.
pub static BRANDING: [Asset; 2] = [
  Asset::new("public/og-logo.png", logo(1200, 630, DEEP_SPACE)),
  Asset::new("public/favicon.png", logo(64, 64, DEEP_SPACE)),
];

/// Flat colors on the production paths.
pub static CLASSIC: [Asset; 4] = [
  Asset::new(OG_IMAGE, ImageDescriptor::solid(1200, 630, RGB888::new(15, 23, 42))),
  Asset::new(THUMB_SAMPLE, ImageDescriptor::solid(600, 400, RGB888::new(245, 158, 11))),
  Asset::new(THUMB_CR, ImageDescriptor::solid(600, 400, RGB888::new(59, 130, 246))),
  Asset::new(THUMB_STARFORGE, ImageDescriptor::solid(600, 400, RGB888::new(239, 68, 68))),
];

/// Single black pixels on the production paths, for when only valid files
/// are needed.
pub static STUB: [Asset; 4] = [
  Asset::new(OG_IMAGE, ImageDescriptor::solid(1, 1, RGB888::BLACK)),
  Asset::new(THUMB_SAMPLE, ImageDescriptor::solid(1, 1, RGB888::BLACK)),
  Asset::new(THUMB_CR, ImageDescriptor::solid(1, 1, RGB888::BLACK)),
  Asset::new(THUMB_STARFORGE, ImageDescriptor::solid(1, 1, RGB888::BLACK)),
];

/// A named group of assets that get generated together.
///
/// `Production`, `Classic` and `Stub` all write the same four paths, so
/// whichever runs last wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum AssetSet {
  /// Gradient Open Graph image and thumbnails.
  Production,
  /// Logo social card and favicon.
  Branding,
  /// Flat color Open Graph image and thumbnails.
  Classic,
  /// 1x1 black files on the thumbnail paths.
  Stub,
}
impl AssetSet {
  /// What a run with no options generates.
  pub const DEFAULT_RUN: [Self; 2] = [Self::Production, Self::Branding];

  /// The assets in this set.
  #[inline]
  #[must_use]
  pub fn assets(self) -> &'static [Asset] {
    match self {
      Self::Production => &PRODUCTION,
      Self::Branding => &BRANDING,
      Self::Classic => &CLASSIC,
      Self::Stub => &STUB,
    }
  }

  /// Lowercase name, as used on the command line.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Production => "production",
      Self::Branding => "branding",
      Self::Classic => "classic",
      Self::Stub => "stub",
    }
  }
}
impl core::fmt::Display for AssetSet {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

/// A file that was written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Generated {
  /// Full path of the file.
  pub path: PathBuf,
  /// Size of the PNG in bytes.
  pub bytes: usize,
}

/// Encodes `asset` and writes it under `root`, creating directories as needed.
pub fn write_asset(root: &Path, asset: &Asset) -> Result<Generated, AssetError> {
  let path = asset.path_under(root);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)
      .map_err(|source| AssetError::CreateDir { path: parent.to_path_buf(), source })?;
  }
  let png = asset.descriptor.encode().map_err(|source| AssetError::Encode { path: path.clone(), source })?;
  fs::write(&path, &png).map_err(|source| AssetError::Write { path: path.clone(), source })?;
  log::info!(
    "wrote {} ({}x{}, {} bytes)",
    path.display(),
    asset.descriptor.width,
    asset.descriptor.height,
    png.len()
  );
  Ok(Generated { path, bytes: png.len() })
}

/// Writes every asset of `set` under `root`, stopping at the first failure.
pub fn generate(set: AssetSet, root: &Path) -> Result<Vec<Generated>, AssetError> {
  log::debug!("generating the {set} set under {}", root.display());
  set.assets().iter().map(|asset| write_asset(root, asset)).collect()
}

/// Reads back a written asset and checks it against its descriptor.
///
/// Every chunk CRC is checked, the pixel data is decoded, and each pixel must
/// match what the descriptor draws.
pub fn verify(root: &Path, asset: &Asset) -> Result<(), AssetError> {
  let path = asset.path_under(root);
  let bytes = fs::read(&path).map_err(|source| AssetError::Read { path: path.clone(), source })?;
  let image = decode_rgb8(&bytes)
    .map_err(|e| AssetError::Verify { path: path.clone(), reason: e.to_string() })?;
  let desc = &asset.descriptor;
  if (image.width, image.height) != (desc.width, desc.height) {
    return Err(AssetError::Verify {
      path,
      reason: format!(
        "expected {}x{}, found {}x{}",
        desc.width, desc.height, image.width, image.height
      ),
    });
  }
  for (y, row) in (0..).zip(image.rows()) {
    for (x, found) in (0..).zip(row.iter().copied()) {
      let expected = desc.pixel(x, y);
      if found != expected {
        return Err(AssetError::Verify {
          path,
          reason: format!("pixel ({x}, {y}) is {found:?}, expected {expected:?}"),
        });
      }
    }
  }
  log::debug!("verified {}", path.display());
  Ok(())
}
