use crate::color::is_white;
use crate::histogram::{masked_histogram, Histogram};
use crate::mask::ellipse_mask;
use crate::raster::{Pixel, Raster};

/// Scalar features derived from one ball image.
///
/// `total_pixels` counts everything inside the elliptical region;
/// `white_pixels` the subset reading as background white. The color
/// statistics are computed over the refined (non-white) mask, so `average`
/// is the dominant non-white color the classifier consumes. Ephemeral,
/// recomputed per image.
#[derive(Clone, Copy, Debug)]
pub struct ColorFeatures {
    pub total_pixels: u64,
    pub white_pixels: u64,
    pub average: Pixel,
    pub modal: Pixel,
    pub min: Pixel,
    pub max: Pixel,
}

impl ColorFeatures {
    /// Fraction of masked pixels classified as white; 0.0 for an empty mask.
    pub fn white_ratio(&self) -> f64 {
        if self.total_pixels == 0 {
            0.0
        } else {
            self.white_pixels as f64 / self.total_pixels as f64
        }
    }
}

/// Per-channel mean level, integer-truncated; 0 for an empty channel.
pub fn average_levels(histogram: &Histogram) -> Vec<u8> {
    (0..histogram.channels())
        .map(|c| {
            let total = histogram.channel_total(c);
            if total == 0 {
                return 0;
            }
            let weighted: u64 = histogram
                .channel(c)
                .iter()
                .enumerate()
                .map(|(index, &count)| index as u64 * count as u64)
                .sum();
            (weighted / total) as u8
        })
        .collect()
}

/// Per-channel modal level: the first bin with the strictly greatest count;
/// 0 when every count is 0.
pub fn modal_levels(histogram: &Histogram) -> Vec<u8> {
    (0..histogram.channels())
        .map(|c| {
            let mut best_count = 0u32;
            let mut best_index = 0usize;
            for (index, &count) in histogram.channel(c).iter().enumerate() {
                if count > best_count {
                    best_count = count;
                    best_index = index;
                }
            }
            best_index as u8
        })
        .collect()
}

/// Per-channel smallest occupied level; 255 for an empty channel.
pub fn min_levels(histogram: &Histogram) -> Vec<u8> {
    (0..histogram.channels())
        .map(|c| {
            histogram
                .channel(c)
                .iter()
                .position(|&count| count != 0)
                .unwrap_or(255) as u8
        })
        .collect()
}

/// Per-channel largest occupied level; 0 for an empty channel.
pub fn max_levels(histogram: &Histogram) -> Vec<u8> {
    (0..histogram.channels())
        .map(|c| {
            histogram
                .channel(c)
                .iter()
                .rposition(|&count| count != 0)
                .unwrap_or(0) as u8
        })
        .collect()
}

fn levels_to_pixel(levels: &[u8]) -> Pixel {
    match levels {
        [v] => Pixel::Luma(*v),
        [r, g, b] => Pixel::Rgb(*r, *g, *b),
        _ => unreachable!("histograms carry 1 or 3 channels"),
    }
}

/// Extract the classification features of one ball image: white-pixel ratio
/// over the elliptical region plus color statistics of the non-white part.
pub fn color_features(raster: &Raster) -> ColorFeatures {
    let (w, h) = (raster.width(), raster.height());
    let mut mask = ellipse_mask(w, h);

    let mut total_pixels = 0u64;
    let mut white_pixels = 0u64;
    for row in 0..h {
        for col in 0..w {
            if mask[[row, col]] == 0 {
                continue;
            }
            total_pixels += 1;
            if is_white(raster.pixel(row, col)) {
                white_pixels += 1;
                // Refine in place: white pixels drop out of the color stats.
                mask[[row, col]] = 0;
            }
        }
    }

    let histogram =
        masked_histogram(raster, &mask).expect("refined mask matches raster dimensions");

    ColorFeatures {
        total_pixels,
        white_pixels,
        average: levels_to_pixel(&average_levels(&histogram)),
        modal: levels_to_pixel(&modal_levels(&histogram)),
        min: levels_to_pixel(&min_levels(&histogram)),
        max: levels_to_pixel(&max_levels(&histogram)),
    }
}
