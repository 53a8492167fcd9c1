use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::consts::{LUMA_WEIGHT_B, LUMA_WEIGHT_G, LUMA_WEIGHT_R};
use crate::error::{CueballError, Result};

/// A rectangle in image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Reject zero-area regions. Crop preconditions; mask sizing accepts
    /// degenerate sizes and does not go through this check.
    pub fn validated(&self) -> Result<Region> {
        if self.width == 0 || self.height == 0 {
            return Err(CueballError::InvalidRegion {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(*self)
    }
}

/// A single pixel value, tagged by channel layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pixel {
    Luma(u8),
    Rgb(u8, u8, u8),
}

impl Pixel {
    /// RGB view of the pixel; luminance expands to a gray triple.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Pixel::Luma(v) => (v, v, v),
            Pixel::Rgb(r, g, b) => (r, g, b),
        }
    }
}

/// Color image stored as separate channel planes.
/// All planes are row-major with shape (height, width).
#[derive(Clone, Debug)]
pub struct RgbPlanes {
    pub red: Array2<u8>,
    pub green: Array2<u8>,
    pub blue: Array2<u8>,
}

/// An 8-bit raster image, single-channel or three-channel.
#[derive(Clone, Debug)]
pub enum Raster {
    Luma(Array2<u8>),
    Rgb(RgbPlanes),
}

impl Raster {
    pub fn width(&self) -> usize {
        match self {
            Raster::Luma(data) => data.ncols(),
            Raster::Rgb(planes) => planes.red.ncols(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Raster::Luma(data) => data.nrows(),
            Raster::Rgb(planes) => planes.red.nrows(),
        }
    }

    pub fn channels(&self) -> usize {
        match self {
            Raster::Luma(_) => 1,
            Raster::Rgb(_) => 3,
        }
    }

    pub fn pixel(&self, row: usize, col: usize) -> Pixel {
        match self {
            Raster::Luma(data) => Pixel::Luma(data[[row, col]]),
            Raster::Rgb(planes) => Pixel::Rgb(
                planes.red[[row, col]],
                planes.green[[row, col]],
                planes.blue[[row, col]],
            ),
        }
    }

    /// Extract a sub-rectangle as a new raster.
    ///
    /// A region extending beyond the source bounds is clipped to the
    /// intersection; a zero-area region is an error.
    pub fn crop(&self, region: &Region) -> Result<Raster> {
        let region = region.validated()?;

        let x0 = (region.x as usize).min(self.width());
        let y0 = (region.y as usize).min(self.height());
        let x1 = (region.x as usize + region.width as usize).min(self.width());
        let y1 = (region.y as usize + region.height as usize).min(self.height());

        let crop_plane = |plane: &Array2<u8>| {
            let mut out = Array2::zeros((y1 - y0, x1 - x0));
            for row in y0..y1 {
                for col in x0..x1 {
                    out[[row - y0, col - x0]] = plane[[row, col]];
                }
            }
            out
        };

        Ok(match self {
            Raster::Luma(data) => Raster::Luma(crop_plane(data)),
            Raster::Rgb(planes) => Raster::Rgb(RgbPlanes {
                red: crop_plane(&planes.red),
                green: crop_plane(&planes.green),
                blue: crop_plane(&planes.blue),
            }),
        })
    }

    /// Convert to single-channel using truncating BT.601 integer weights.
    pub fn to_luma(&self) -> Array2<u8> {
        match self {
            Raster::Luma(data) => data.clone(),
            Raster::Rgb(planes) => {
                let (h, w) = planes.red.dim();
                let mut out = Array2::zeros((h, w));
                for row in 0..h {
                    for col in 0..w {
                        let r = planes.red[[row, col]] as u32;
                        let g = planes.green[[row, col]] as u32;
                        let b = planes.blue[[row, col]] as u32;
                        out[[row, col]] =
                            ((r * LUMA_WEIGHT_R + g * LUMA_WEIGHT_G + b * LUMA_WEIGHT_B) / 1000)
                                as u8;
                    }
                }
                out
            }
        }
    }

    /// Build a uniform color raster, mainly for tests and synthetic frames.
    pub fn solid_rgb(width: usize, height: usize, r: u8, g: u8, b: u8) -> Raster {
        Raster::Rgb(RgbPlanes {
            red: Array2::from_elem((height, width), r),
            green: Array2::from_elem((height, width), g),
            blue: Array2::from_elem((height, width), b),
        })
    }
}
