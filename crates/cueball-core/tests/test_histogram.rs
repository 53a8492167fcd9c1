use ndarray::Array2;

use cueball_core::error::CueballError;
use cueball_core::histogram::masked_histogram;
use cueball_core::mask::ellipse_mask;
use cueball_core::raster::{Raster, RgbPlanes};

/// RGB raster with a deterministic per-pixel pattern.
fn patterned_rgb(width: usize, height: usize) -> Raster {
    let mut red = Array2::zeros((height, width));
    let mut green = Array2::zeros((height, width));
    let mut blue = Array2::zeros((height, width));
    for row in 0..height {
        for col in 0..width {
            red[[row, col]] = ((row * 7 + col * 13) % 256) as u8;
            green[[row, col]] = ((row * 3 + col * 5) % 256) as u8;
            blue[[row, col]] = ((row + col) % 256) as u8;
        }
    }
    Raster::Rgb(RgbPlanes { red, green, blue })
}

#[test]
fn test_all_white_ellipse_histogram_rgb() {
    let white = Raster::solid_rgb(640, 640, 255, 255, 255);
    let mask = ellipse_mask(640, 640);
    let hist = masked_histogram(&white, &mask).unwrap();

    assert_eq!(hist.channels(), 3);
    for channel in 0..3 {
        assert_eq!(hist.channel(channel)[255], 322838);
        assert_eq!(hist.channel_total(channel), 322838);
    }
}

#[test]
fn test_all_white_ellipse_histogram_luma() {
    let white = Raster::solid_rgb(640, 640, 255, 255, 255);
    let luma = Raster::Luma(white.to_luma());
    let mask = ellipse_mask(640, 640);
    let hist = masked_histogram(&luma, &mask).unwrap();

    assert_eq!(hist.channels(), 1);
    assert_eq!(hist.channel(0)[255], 322838);
}

#[test]
fn test_section_sums_equal_masked_count() {
    let raster = patterned_rgb(97, 61);
    // Checkerboard mask, nothing to do with the ellipse.
    let mut mask = Array2::zeros((61, 97));
    let mut masked = 0u64;
    for row in 0..61 {
        for col in 0..97 {
            if (row + col) % 2 == 0 {
                mask[[row, col]] = 1;
                masked += 1;
            }
        }
    }

    let hist = masked_histogram(&raster, &mask).unwrap();
    for channel in 0..3 {
        assert_eq!(hist.channel_total(channel), masked);
    }
}

#[test]
fn test_empty_mask_gives_empty_histogram() {
    let raster = patterned_rgb(16, 16);
    let mask = Array2::zeros((16, 16));
    let hist = masked_histogram(&raster, &mask).unwrap();
    for channel in 0..3 {
        assert_eq!(hist.channel_total(channel), 0);
    }
}

#[test]
fn test_dimension_mismatch_rejected() {
    let raster = patterned_rgb(16, 16);
    let mask = Array2::zeros((16, 17));
    match masked_histogram(&raster, &mask) {
        Err(CueballError::DimensionMismatch { .. }) => {}
        other => panic!("expected DimensionMismatch, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_smooth_spike_preserves_total() {
    // A spike divisible by the filter length spreads exactly.
    let mut plane = Array2::zeros((1, 4100));
    for col in 0..4100 {
        plane[[0, col]] = 128;
    }
    let raster = Raster::Luma(plane);
    let mask = Array2::from_elem((1, 4100), 1);
    let mut hist = masked_histogram(&raster, &mask).unwrap();
    assert_eq!(hist.channel(0)[128], 4100);

    hist.smooth();
    assert_eq!(hist.channel_total(0), 4100);
    // 4100 / 41 = 100 in every bin the window reaches.
    assert_eq!(hist.channel(0)[128], 100);
    assert_eq!(hist.channel(0)[108], 100);
    assert_eq!(hist.channel(0)[148], 100);
    assert_eq!(hist.channel(0)[107], 0);
    assert_eq!(hist.channel(0)[149], 0);
}

#[test]
fn test_smooth_constant_section_unchanged() {
    let plane = Array2::from_shape_fn((256, 1), |(row, _)| row as u8);
    let raster = Raster::Luma(plane);
    let mask = Array2::from_elem((256, 1), 1);
    let mut hist = masked_histogram(&raster, &mask).unwrap();
    // One pixel per bin: perfectly flat.
    assert!(hist.channel(0).iter().all(|&c| c == 1));

    hist.smooth();
    assert!(hist.channel(0).iter().all(|&c| c == 1));
    assert_eq!(hist.channel_total(0), 256);
}

#[test]
fn test_smooth_small_filter_known_values() {
    let mut plane = Array2::zeros((1, 18));
    // Bin 0 three times, bin 1 six times, bin 2 nine times.
    for col in 0..18 {
        plane[[0, col]] = match col {
            0..=2 => 0,
            3..=8 => 1,
            _ => 2,
        };
    }
    let raster = Raster::Luma(plane);
    let mask = Array2::from_elem((1, 18), 1);
    let mut hist = masked_histogram(&raster, &mask).unwrap();
    assert_eq!(&hist.channel(0)[..4], &[3, 6, 9, 0]);

    hist.smooth_with_len(3);
    // Replicate-left pad: (3,3,6)/3=4, (3,6,9)/3=6, (6,9,0)/3=5, (9,0,0)/3=3.
    assert_eq!(&hist.channel(0)[..5], &[4, 6, 5, 3, 0]);
}

#[test]
fn test_smooth_sections_are_independent() {
    // Load only the red channel's top bin; after smoothing, the green
    // section must stay all-zero (padding replicates per section).
    let red = Array2::from_elem((1, 82), 255u8);
    let green = Array2::zeros((1, 82));
    let blue = Array2::zeros((1, 82));
    let raster = Raster::Rgb(RgbPlanes { red, green, blue });
    let mask = Array2::from_elem((1, 82), 1);

    let mut hist = masked_histogram(&raster, &mask).unwrap();
    hist.smooth();

    assert!(hist.channel(0).iter().any(|&c| c != 0));
    // Green pixels all sit in bin 0; with per-section replicate padding the
    // smoothed mass stays within reach of bin 0: (21 * 82) / 41 = 42.
    assert_eq!(hist.channel(1)[0], 42);
    assert!(hist.channel(1)[21..].iter().all(|&c| c == 0));
}
