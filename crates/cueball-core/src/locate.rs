use ndarray::Array2;

use crate::error::{CueballError, Result};
use crate::raster::Region;

/// Tightest rectangle containing every pixel different from `background`
/// in a thresholded 0/1 bitmap.
///
/// Used once, offline: a frame of the all-black eight-ball thresholded
/// against the bright felt gives the fixed region every later
/// classification reuses (the camera and table framing are static).
pub fn foreground_bounds(bitmap: &Array2<u8>, background: u8) -> Result<Region> {
    let (h, w) = bitmap.dim();

    let mut min_x = w;
    let mut max_x = 0usize;
    let mut min_y = h;
    let mut max_y = 0usize;
    let mut found = false;

    for row in 0..h {
        for col in 0..w {
            if bitmap[[row, col]] != background {
                found = true;
                min_x = min_x.min(col);
                max_x = max_x.max(col);
                min_y = min_y.min(row);
                max_y = max_y.max(row);
            }
        }
    }

    if !found {
        return Err(CueballError::EmptyForeground);
    }

    Ok(Region {
        x: min_x as u32,
        y: min_y as u32,
        width: (max_x - min_x + 1) as u32,
        height: (max_y - min_y + 1) as u32,
    })
}
