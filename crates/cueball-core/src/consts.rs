use crate::raster::Region;

/// Default calibration region for the reference camera setup: the ball sits
/// in a fixed 640x640 window at (160, 50) of every frame.
pub const DEFAULT_BALL_REGION: Region = Region {
    x: 160,
    y: 50,
    width: 640,
    height: 640,
};

/// White-ratio band for the cue ball, inclusive at both ends.
pub const WHITE_GROUP_BAND: (f64, f64) = (0.90, 1.0);

/// White-ratio band for striped balls (group offset 8), inclusive at both ends.
pub const BIG_GROUP_BAND: (f64, f64) = (0.20, 0.90);

/// White-ratio band for solid balls (group offset 0), inclusive at both ends.
pub const LITTLE_GROUP_BAND: (f64, f64) = (0.0, 0.20);

/// Reference hue for the yellow/orange/red family (balls 1, 3, 5).
pub const HUE_YELLOW_RED: f64 = 0.166667;

/// Reference hue for the blue family (balls 2, 6).
pub const HUE_BLUE: f64 = 0.500000;

/// Reference hue for the magenta/purple family (balls 4, 7).
pub const HUE_MAGENTA: f64 = 0.833333;

/// Saturation below which a bright pixel counts as background white.
pub const WHITE_SATURATION_MAX: f64 = 0.60;

/// Lightness above which a low-saturation pixel counts as background white
/// (128 on the 0-255 scale).
pub const WHITE_LIGHTNESS_MIN: f64 = 128.0 / 255.0;

/// Luminance above which a single-channel pixel counts as background white.
pub const WHITE_LUMA_MIN: u8 = 128;

/// Channel ceiling for the near-black predicate (eight-ball detection).
pub const NEAR_BLACK_MAX_LEVEL: u8 = 75;

/// Maximum channel spread for the near-black predicate.
pub const NEAR_BLACK_MAX_SPREAD: u8 = 20;

/// Default box filter length for histogram smoothing.
pub const DEFAULT_SMOOTH_LEN: usize = 41;

/// Number of bins per histogram channel section.
pub const HISTOGRAM_BINS: usize = 256;

/// ITU-R BT.601 integer luma weights (per mille), truncating division.
pub const LUMA_WEIGHT_R: u32 = 299;
pub const LUMA_WEIGHT_G: u32 = 587;
pub const LUMA_WEIGHT_B: u32 = 114;

/// Number of polygon segments used to rasterize the ellipse mask.
pub const ELLIPSE_SEGMENTS: usize = 360;

/// Minimum image count to use Rayon parallelism in batch classification.
pub const PARALLEL_IMAGE_THRESHOLD: usize = 4;
