use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cueball_core::io::load_raster;

use crate::summary::print_features;

#[derive(Args)]
pub struct FeaturesArgs {
    /// Image file to analyze
    pub file: PathBuf,

    /// Calibration file written by `cueball calibrate`
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &FeaturesArgs) -> Result<()> {
    let session = super::load_session(args.config.as_deref())?;
    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load image {}", args.file.display()))?;
    let classification = session.classify(&raster)?;

    print_features(&args.file, &classification);
    Ok(())
}
