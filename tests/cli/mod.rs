use std::{
  ffi::OsStr,
  path::Path,
  process::{Command, Output},
};

use placeholder_png::assets::{BRANDING, PRODUCTION};

fn run(args: &[&OsStr], cwd: &Path) -> Output {
  Command::new(env!("CARGO_BIN_EXE_placeholder-png"))
    .args(args)
    .current_dir(cwd)
    .env("RUST_LOG", "off")
    .output()
    .unwrap()
}

#[test]
fn test_cli_default_run() {
  let dir = tempfile::tempdir().unwrap();
  let out = run(&[], dir.path());
  let stdout = String::from_utf8_lossy(&out.stdout);
  assert!(out.status.success(), "{out:?}");
  assert!(stdout.contains("Wrote 6 PNG files under ."), "{stdout}");
  for asset in PRODUCTION.iter().chain(&BRANDING) {
    assert!(asset.path_under(dir.path()).is_file(), "{}", asset.path);
  }
}

#[test]
fn test_cli_picks_sets_and_root() {
  let dir = tempfile::tempdir().unwrap();
  let root = dir.path().join("site");
  let out = run(&[OsStr::new("--set"), OsStr::new("stub"), OsStr::new("--root"), root.as_os_str()], dir.path());
  assert!(out.status.success(), "{out:?}");
  assert!(String::from_utf8_lossy(&out.stdout).contains("Wrote 4 PNG files under"));
  assert!(PRODUCTION[0].path_under(&root).is_file());
  assert!(!BRANDING[0].path_under(&root).exists());
}

#[test]
fn test_cli_failure_exits_nonzero() {
  let dir = tempfile::tempdir().unwrap();
  // a plain file where the output directory should be
  let file = tempfile::NamedTempFile::new_in(dir.path()).unwrap();
  let out = run(&[OsStr::new("--root"), file.path().as_os_str()], dir.path());
  assert!(!out.status.success(), "{out:?}");
  let stderr = String::from_utf8_lossy(&out.stderr);
  assert!(stderr.contains("failed to create directory"), "{stderr}");
  assert!(stderr.contains(&*file.path().to_string_lossy()), "{stderr}");
  assert!(!String::from_utf8_lossy(&out.stdout).contains("Wrote"));

  // unknown sets are rejected by argument parsing
  let out = run(&[OsStr::new("--set"), OsStr::new("nonsense")], dir.path());
  assert!(!out.status.success());
}
