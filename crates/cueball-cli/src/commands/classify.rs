use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use cueball_core::io::load_raster;
use cueball_core::session::Classification;

use crate::summary::print_classification_table;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];

#[derive(Args)]
pub struct ClassifyArgs {
    /// Image file or directory of images
    pub path: PathBuf,

    /// Calibration file written by `cueball calibrate`
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &ClassifyArgs) -> Result<()> {
    let session = super::load_session(args.config.as_deref())?;
    debug!(region = ?session.region(), "Classifying with region");

    let files = collect_image_files(&args.path)?;
    if files.is_empty() {
        bail!("No image files found at {}", args.path.display());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Classifying");

    let mut results: Vec<(PathBuf, Classification)> = Vec::with_capacity(files.len());
    for file in &files {
        let raster = load_raster(file)
            .with_context(|| format!("Failed to load image {}", file.display()))?;
        let classification = session
            .classify(&raster)
            .with_context(|| format!("Failed to classify {}", file.display()))?;
        results.push((file.clone(), classification));
        pb.inc(1);
    }
    pb.finish_and_clear();

    print_classification_table(&results);
    Ok(())
}

fn collect_image_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(path)
        .with_context(|| format!("Failed to read directory {}", path.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}
