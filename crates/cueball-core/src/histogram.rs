use ndarray::Array2;

use crate::consts::{DEFAULT_SMOOTH_LEN, HISTOGRAM_BINS};
use crate::error::{CueballError, Result};
use crate::raster::Raster;

/// Per-channel pixel-value histogram: 256 bins per channel, channel
/// sections concatenated R,G,B for color rasters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    bins: Vec<u32>,
    channels: usize,
}

impl Histogram {
    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn bins(&self) -> &[u32] {
        &self.bins
    }

    /// The 256-bin section for one channel.
    pub fn channel(&self, channel: usize) -> &[u32] {
        let start = channel * HISTOGRAM_BINS;
        &self.bins[start..start + HISTOGRAM_BINS]
    }

    /// Total pixel count in one channel section.
    pub fn channel_total(&self, channel: usize) -> u64 {
        self.channel(channel).iter().map(|&c| c as u64).sum()
    }

    /// Smooth every channel section in place with the default box filter.
    pub fn smooth(&mut self) {
        self.smooth_with_len(DEFAULT_SMOOTH_LEN);
    }

    /// Symmetric moving average of odd length `filter_len`, applied to each
    /// channel section independently.
    ///
    /// Sections are padded by replicating their own first and last bin, so
    /// the output length equals the input length and no index goes out of
    /// range. Each output bin is the integer-truncated mean of its window.
    pub fn smooth_with_len(&mut self, filter_len: usize) {
        assert!(filter_len % 2 == 1, "filter length must be odd");
        for channel in 0..self.channels {
            let start = channel * HISTOGRAM_BINS;
            smooth_section(&mut self.bins[start..start + HISTOGRAM_BINS], filter_len);
        }
    }
}

fn smooth_section(section: &mut [u32], filter_len: usize) {
    let half = filter_len / 2;
    let mut padded = Vec::with_capacity(section.len() + 2 * half);
    padded.extend(std::iter::repeat(section[0]).take(half));
    padded.extend_from_slice(section);
    padded.extend(std::iter::repeat(section[section.len() - 1]).take(half));

    for (i, out) in section.iter_mut().enumerate() {
        let window: u64 = padded[i..i + filter_len].iter().map(|&v| v as u64).sum();
        *out = (window / filter_len as u64) as u32;
    }
}

/// Histogram of the raster restricted to mask=1 pixels.
///
/// The mask is shared across channels; each channel section counts its own
/// plane independently, so every section sums exactly to the masked pixel
/// count.
pub fn masked_histogram(raster: &Raster, mask: &Array2<u8>) -> Result<Histogram> {
    let (mask_h, mask_w) = mask.dim();
    if mask_w != raster.width() || mask_h != raster.height() {
        return Err(CueballError::DimensionMismatch {
            raster_width: raster.width(),
            raster_height: raster.height(),
            mask_width: mask_w,
            mask_height: mask_h,
        });
    }

    let channels = raster.channels();
    let mut bins = vec![0u32; channels * HISTOGRAM_BINS];

    match raster {
        Raster::Luma(data) => {
            for (value, &m) in data.iter().zip(mask.iter()) {
                if m != 0 {
                    bins[*value as usize] += 1;
                }
            }
        }
        Raster::Rgb(planes) => {
            let plane_iter = planes
                .red
                .iter()
                .zip(planes.green.iter())
                .zip(planes.blue.iter());
            for (((&r, &g), &b), &m) in plane_iter.zip(mask.iter()) {
                if m != 0 {
                    bins[r as usize] += 1;
                    bins[HISTOGRAM_BINS + g as usize] += 1;
                    bins[2 * HISTOGRAM_BINS + b as usize] += 1;
                }
            }
        }
    }

    Ok(Histogram { bins, channels })
}
