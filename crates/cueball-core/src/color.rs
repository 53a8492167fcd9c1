use crate::consts::{
    NEAR_BLACK_MAX_LEVEL, NEAR_BLACK_MAX_SPREAD, WHITE_LIGHTNESS_MIN, WHITE_LUMA_MIN,
    WHITE_SATURATION_MAX,
};
use crate::raster::Pixel;

/// Convert an 8-bit RGB triple to hue/lightness/saturation, all in [0, 1].
///
/// Faithful port of Python's `colorsys.rgb_to_hls`: hue distances computed
/// from this function must match the reference thresholds exactly.
pub fn rgb_to_hls(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let l = (minc + maxc) / 2.0;
    if maxc == minc {
        return (0.0, l, 0.0);
    }

    let delta = maxc - minc;
    let s = if l <= 0.5 {
        delta / (maxc + minc)
    } else {
        delta / (2.0 - maxc - minc)
    };

    let rc = (maxc - r) / delta;
    let gc = (maxc - g) / delta;
    let bc = (maxc - b) / delta;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    let h = (h / 6.0).rem_euclid(1.0);

    (h, l, s)
}

/// Background classifier: low saturation plus high lightness reads as white
/// felt or glare regardless of hue. Pale ball colors therefore risk being
/// dropped as background; known edge case of the heuristic.
pub fn is_white(pixel: Pixel) -> bool {
    match pixel {
        Pixel::Luma(v) => v > WHITE_LUMA_MIN,
        Pixel::Rgb(r, g, b) => {
            let (_, l, s) = rgb_to_hls(r, g, b);
            s < WHITE_SATURATION_MAX && l > WHITE_LIGHTNESS_MIN
        }
    }
}

/// All channels dark and close together: the surface of the eight-ball.
pub fn is_near_black(r: u8, g: u8, b: u8) -> bool {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    max < NEAR_BLACK_MAX_LEVEL && max - min < NEAR_BLACK_MAX_SPREAD
}
