use thiserror::Error;

#[derive(Error, Debug)]
pub enum CueballError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid region: {width}x{height} at ({x},{y})")]
    InvalidRegion {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Dimension mismatch: raster is {raster_width}x{raster_height}, mask is {mask_width}x{mask_height}")]
    DimensionMismatch {
        raster_width: usize,
        raster_height: usize,
        mask_width: usize,
        mask_height: usize,
    },

    #[error("No foreground pixels found in calibration bitmap")]
    EmptyForeground,

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, CueballError>;
