use std::path::Path;

use image::DynamicImage;
use ndarray::Array2;

use crate::error::Result;
use crate::raster::{Raster, RgbPlanes};

/// Load an image file into a raster. 8-bit grayscale sources stay
/// single-channel; everything else decodes to RGB planes.
pub fn load_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)?;
    Ok(raster_from_dynamic(img))
}

fn raster_from_dynamic(img: DynamicImage) -> Raster {
    match img {
        DynamicImage::ImageLuma8(gray) => {
            let (w, h) = gray.dimensions();
            let mut data = Array2::zeros((h as usize, w as usize));
            for (col, row, pixel) in gray.enumerate_pixels() {
                data[[row as usize, col as usize]] = pixel.0[0];
            }
            Raster::Luma(data)
        }
        other => {
            let rgb = other.to_rgb8();
            let (w, h) = rgb.dimensions();
            let mut red = Array2::zeros((h as usize, w as usize));
            let mut green = Array2::zeros((h as usize, w as usize));
            let mut blue = Array2::zeros((h as usize, w as usize));
            for (col, row, pixel) in rgb.enumerate_pixels() {
                red[[row as usize, col as usize]] = pixel.0[0];
                green[[row as usize, col as usize]] = pixel.0[1];
                blue[[row as usize, col as usize]] = pixel.0[2];
            }
            Raster::Rgb(RgbPlanes { red, green, blue })
        }
    }
}
