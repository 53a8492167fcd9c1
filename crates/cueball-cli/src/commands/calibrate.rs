use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cueball_core::io::load_raster;
use cueball_core::session::{CalibrationConfig, ClassifySession};

#[derive(Args)]
pub struct CalibrateArgs {
    /// Reference frame containing a dark ball (the eight-ball works best)
    pub file: PathBuf,

    /// Luminance threshold separating ball from felt
    #[arg(short, long, default_value = "128")]
    pub threshold: u8,

    /// Where to write the calibration file
    #[arg(short, long, default_value = "cueball.toml")]
    pub output: PathBuf,
}

pub fn run(args: &CalibrateArgs) -> Result<()> {
    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load image {}", args.file.display()))?;

    // Bright felt thresholds to 1, the dark ball to 0.
    let luma = raster.to_luma();
    let bitmap = luma.mapv(|v| u8::from(v > args.threshold));

    let session = ClassifySession::calibrate(&bitmap, 1)
        .context("No ball found in the reference frame; try a lower threshold")?;
    let region = session.region();

    let config = CalibrationConfig { region };
    let text = toml::to_string_pretty(&config)?;
    std::fs::write(&args.output, &text)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Ball located at ({}, {}) {}x{}",
        region.x, region.y, region.width, region.height
    );
    println!("Calibration saved to {}", args.output.display());
    Ok(())
}
