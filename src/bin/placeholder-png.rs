//! Writes the placeholder PNG assets of a web project.
//!
//! Run from the project root with no arguments to (re)generate the production
//! thumbnails and the branding images under `public/`.

use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use placeholder_png::assets::{self, AssetSet};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
  /// Asset set to generate. Repeat to generate several, in order.
  /// [default: production, branding]
  #[arg(short, long = "set", value_enum)]
  sets: Vec<AssetSet>,

  /// Directory the `public/` tree is written under.
  #[arg(short, long, default_value = ".")]
  root: PathBuf,
}

fn init_logger() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
    .format(|buf, record| {
      let style = buf.default_level_style(record.level());
      writeln!(
        buf,
        "[{style}{}{style:#} {}:{}] {}",
        record.level(),
        record.file().unwrap_or("None").split('/').next_back().unwrap_or("None"),
        record.line().unwrap_or(0),
        record.args()
      )
    })
    .init();
}

fn main() -> Result<()> {
  init_logger();
  let args = Args::parse();
  let sets = if args.sets.is_empty() { AssetSet::DEFAULT_RUN.to_vec() } else { args.sets };

  let mut written = 0;
  for set in sets {
    println!("Generating {set} PNGs...");
    let generated = assets::generate(set, &args.root)
      .with_context(|| format!("generating the {set} set under {}", args.root.display()))?;
    for asset in set.assets() {
      assets::verify(&args.root, asset).context("checking a freshly written file")?;
    }
    written += generated.len();
    println!("{set} assets ready.");
  }

  println!("Wrote {written} PNG files under {}.", args.root.display());
  Ok(())
}
