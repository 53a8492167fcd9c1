use ndarray::Array2;

use cueball_core::error::CueballError;
use cueball_core::locate::foreground_bounds;
use cueball_core::raster::Region;

#[test]
fn test_bounds_of_block() {
    let mut bitmap = Array2::zeros((80, 100));
    for row in 20..25 {
        for col in 30..40 {
            bitmap[[row, col]] = 1;
        }
    }
    let region = foreground_bounds(&bitmap, 0).unwrap();
    assert_eq!(region, Region::new(30, 20, 10, 5));
}

#[test]
fn test_bounds_inverted_polarity() {
    // Bright background thresholded to 1; the dark ball is the 0 region.
    let mut bitmap = Array2::from_elem((60, 60), 1u8);
    for row in 10..50 {
        for col in 15..45 {
            bitmap[[row, col]] = 0;
        }
    }
    let region = foreground_bounds(&bitmap, 1).unwrap();
    assert_eq!(region, Region::new(15, 10, 30, 40));
}

#[test]
fn test_bounds_single_pixel() {
    let mut bitmap = Array2::zeros((10, 10));
    bitmap[[7, 3]] = 1;
    let region = foreground_bounds(&bitmap, 0).unwrap();
    assert_eq!(region, Region::new(3, 7, 1, 1));
}

#[test]
fn test_bounds_scattered_pixels() {
    let mut bitmap = Array2::zeros((50, 50));
    bitmap[[5, 40]] = 1;
    bitmap[[30, 2]] = 1;
    bitmap[[12, 20]] = 1;
    let region = foreground_bounds(&bitmap, 0).unwrap();
    assert_eq!(region, Region::new(2, 5, 39, 26));
}

#[test]
fn test_bounds_empty_foreground() {
    let bitmap = Array2::zeros((20, 20));
    match foreground_bounds(&bitmap, 0) {
        Err(CueballError::EmptyForeground) => {}
        other => panic!("expected EmptyForeground, got {:?}", other.map(|_| ())),
    }
}
