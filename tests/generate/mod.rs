use std::{collections::BTreeMap, fs, path::PathBuf};

use placeholder_png::{
  assets::{self, AssetError, AssetSet, BRANDING, CLASSIC, PRODUCTION},
  png::RawPngChunkIter,
};
use walkdir::WalkDir;

/// Every `.png` under `root`, keyed by path, with its bytes.
fn png_files(root: &std::path::Path) -> BTreeMap<PathBuf, Vec<u8>> {
  WalkDir::new(root)
    .into_iter()
    .filter_map(|e| e.ok())
    .filter(|e| e.file_type().is_file() && e.path().extension().is_some_and(|x| x == "png"))
    .map(|e| (e.path().strip_prefix(root).unwrap().to_path_buf(), fs::read(e.path()).unwrap()))
    .collect()
}

#[test]
fn test_default_run_writes_every_file() {
  let dir = tempfile::tempdir().unwrap();
  let mut written = Vec::new();
  for set in AssetSet::DEFAULT_RUN {
    written.extend(assets::generate(set, dir.path()).unwrap());
  }
  assert_eq!(written.len(), PRODUCTION.len() + BRANDING.len());

  let files = png_files(dir.path());
  assert_eq!(files.len(), written.len());
  for asset in PRODUCTION.iter().chain(&BRANDING) {
    let bytes = &files[&asset.path_under("".as_ref())];
    let (width, height, _) = super::decode_reference(bytes);
    assert_eq!((width, height), (asset.descriptor.width, asset.descriptor.height), "{}", asset.path);
    for chunk in RawPngChunkIter::new(bytes) {
      assert_eq!(chunk.check_crc(), Ok(()), "{}", asset.path);
    }
    assets::verify(dir.path(), asset).unwrap();
  }
  for generated in &written {
    assert_eq!(fs::metadata(&generated.path).unwrap().len(), generated.bytes as u64);
  }
}

#[test]
fn test_generation_is_idempotent() {
  let a = tempfile::tempdir().unwrap();
  let b = tempfile::tempdir().unwrap();
  for root in [a.path(), b.path()] {
    assets::generate(AssetSet::Branding, root).unwrap();
    assets::generate(AssetSet::Stub, root).unwrap();
  }
  // running again over existing files doesn't change them either
  assets::generate(AssetSet::Branding, a.path()).unwrap();
  let (a_files, b_files) = (png_files(a.path()), png_files(b.path()));
  assert_eq!(a_files.len(), BRANDING.len() + 4);
  assert_eq!(a_files, b_files);
}

#[test]
fn test_classic_set_is_flat() {
  let dir = tempfile::tempdir().unwrap();
  assets::generate(AssetSet::Classic, dir.path()).unwrap();
  for asset in &CLASSIC {
    let bytes = fs::read(asset.path_under(dir.path())).unwrap();
    let (width, height, rgb) = super::decode_reference(&bytes);
    assert_eq!((width, height), (asset.descriptor.width, asset.descriptor.height));
    let color: [u8; 3] = asset.descriptor.top.into();
    assert!(rgb.chunks_exact(3).all(|p| p == color), "{}", asset.path);
  }
}

#[test]
fn test_later_set_overwrites_shared_paths() {
  let dir = tempfile::tempdir().unwrap();
  assets::generate(AssetSet::Classic, dir.path()).unwrap();
  assets::generate(AssetSet::Stub, dir.path()).unwrap();
  for asset in &CLASSIC {
    let bytes = fs::read(asset.path_under(dir.path())).unwrap();
    let (width, height, rgb) = super::decode_reference(&bytes);
    assert_eq!((width, height, rgb), (1, 1, vec![0, 0, 0]));
  }
}

#[test]
fn test_unwritable_root_is_an_error() {
  // a plain file where a directory should be
  let file = tempfile::NamedTempFile::new().unwrap();
  let err = assets::generate(AssetSet::Stub, file.path()).unwrap_err();
  assert!(matches!(err, AssetError::CreateDir { .. }), "{err:?}");
  assert!(err.to_string().starts_with("failed to create directory"));
}

#[test]
fn test_verify_catches_wrong_content() {
  let dir = tempfile::tempdir().unwrap();
  assets::generate(AssetSet::Classic, dir.path()).unwrap();
  // the flat version isn't what the production table describes
  let err = assets::verify(dir.path(), &PRODUCTION[1]).unwrap_err();
  assert!(matches!(err, AssetError::Verify { .. }), "{err:?}");

  // truncated files fail to decode
  let path = PRODUCTION[1].path_under(dir.path());
  let bytes = fs::read(&path).unwrap();
  fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();
  let err = assets::verify(dir.path(), &CLASSIC[1]).unwrap_err();
  assert!(matches!(err, AssetError::Verify { .. }), "{err:?}");

  // missing files fail to read
  let err = assets::verify(dir.path(), &BRANDING[0]).unwrap_err();
  assert!(matches!(err, AssetError::Read { .. }), "{err:?}");
}
