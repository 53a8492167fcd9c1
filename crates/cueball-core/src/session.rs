use ndarray::Array2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::ball_number;
use crate::consts::{DEFAULT_BALL_REGION, PARALLEL_IMAGE_THRESHOLD};
use crate::error::Result;
use crate::features::{color_features, ColorFeatures};
use crate::locate::foreground_bounds;
use crate::raster::{Raster, Region};

/// Result of classifying one image: the ball number plus the intermediate
/// features it was derived from.
#[derive(Clone, Copy, Debug)]
pub struct Classification {
    pub ball: u8,
    pub features: ColorFeatures,
}

/// Persisted calibration state: the frame region expected to contain the
/// ball.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalibrationConfig {
    pub region: Region,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_BALL_REGION,
        }
    }
}

/// A classification session with a fixed calibration region.
///
/// The region is set once at construction and only read afterwards, so a
/// session can be shared freely across threads.
#[derive(Clone, Debug)]
pub struct ClassifySession {
    region: Region,
}

impl ClassifySession {
    pub fn new(region: Region) -> Self {
        Self { region }
    }

    pub fn with_default_region() -> Self {
        Self::new(DEFAULT_BALL_REGION)
    }

    /// Calibrate from a thresholded 0/1 bitmap of a reference frame (e.g.
    /// the all-black eight-ball against the bright felt).
    pub fn calibrate(bitmap: &Array2<u8>, background: u8) -> Result<Self> {
        let region = foreground_bounds(bitmap, background)?;
        debug!(?region, "Calibrated ball region");
        Ok(Self::new(region))
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Classify one frame: crop the calibrated region, extract the color
    /// features, map them to a ball number.
    pub fn classify(&self, raster: &Raster) -> Result<Classification> {
        let cropped = raster.crop(&self.region)?;
        let features = color_features(&cropped);
        let (r, g, b) = features.average.to_rgb();
        let ratio = features.white_ratio();
        debug!(
            total = features.total_pixels,
            white = features.white_pixels,
            ratio,
            r,
            g,
            b,
            "Extracted ball features"
        );
        Ok(Classification {
            ball: ball_number(ratio, r, g, b),
            features,
        })
    }

    /// Classify a batch of frames. Images are independent, so large batches
    /// run in parallel; output order always matches input order.
    pub fn classify_batch(&self, rasters: &[Raster]) -> Result<Vec<Classification>> {
        if rasters.len() >= PARALLEL_IMAGE_THRESHOLD {
            rasters.par_iter().map(|r| self.classify(r)).collect()
        } else {
            rasters.iter().map(|r| self.classify(r)).collect()
        }
    }
}
