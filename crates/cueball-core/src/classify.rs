use crate::color::{is_near_black, rgb_to_hls};
use crate::consts::{
    BIG_GROUP_BAND, HUE_BLUE, HUE_MAGENTA, HUE_YELLOW_RED, LITTLE_GROUP_BAND, WHITE_GROUP_BAND,
};

/// Coarse ball group derived from the white-pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BallGroup {
    /// Cue ball: almost entirely white.
    White,
    /// Solid (numbers 1-8): little to no white.
    Little,
    /// Stripe (numbers 9-15): a white band plus the color.
    Big,
}

impl BallGroup {
    /// Offset added to the color family number (stripes sit at solid + 8).
    pub fn offset(self) -> u8 {
        match self {
            BallGroup::White => 0,
            BallGroup::Little => 0,
            BallGroup::Big => 8,
        }
    }
}

fn in_band(value: f64, band: (f64, f64)) -> bool {
    value >= band.0 && value <= band.1
}

/// Map a white-pixel ratio to a ball group.
///
/// Bands are inclusive at both ends and tested first-match-wins in White,
/// Big, Little order, so the shared boundaries resolve as 0.90 -> White and
/// 0.20 -> Big. Out-of-range input falls back to White (reference quirk,
/// kept as-is).
pub fn ball_group(white_ratio: f64) -> BallGroup {
    if in_band(white_ratio, WHITE_GROUP_BAND) {
        BallGroup::White
    } else if in_band(white_ratio, BIG_GROUP_BAND) {
        BallGroup::Big
    } else if in_band(white_ratio, LITTLE_GROUP_BAND) {
        BallGroup::Little
    } else {
        BallGroup::White
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Band {
    Red,
    Green,
    Blue,
}

/// Channel with the strictly greatest value.
///
/// Exact ties resolve deterministically: r == b beats g -> Blue, g == b
/// beats r -> Green, everything else (including r == g and all-equal) ->
/// Red. Chosen so pure yellow stays in the red/yellow family and pure
/// magenta in the blue/magenta family.
fn dominant_band(r: u8, g: u8, b: u8) -> Band {
    if r > g && r > b {
        Band::Red
    } else if g > r && g > b {
        Band::Green
    } else if b > r && b > g {
        Band::Blue
    } else if r == b && b > g {
        Band::Blue
    } else if g == b && b > r {
        Band::Green
    } else {
        Band::Red
    }
}

fn hue_distance(hue: f64, reference: f64) -> f64 {
    (hue - reference).abs()
}

/// Classify one ball from its white-pixel ratio and dominant non-white
/// color. Returns the standard billiards number: 0 cue, 1-7 solids,
/// 8 black, 9-15 stripes.
pub fn ball_number(white_ratio: f64, r: u8, g: u8, b: u8) -> u8 {
    let group = ball_group(white_ratio);
    if group == BallGroup::White {
        return 0;
    }
    if group == BallGroup::Little && is_near_black(r, g, b) {
        return 8;
    }

    let offset = group.offset();
    match dominant_band(r, g, b) {
        Band::Green => 6 + offset,
        Band::Blue => {
            let (h, _, _) = rgb_to_hls(r, g, b);
            if hue_distance(h, HUE_BLUE) < hue_distance(h, HUE_MAGENTA) {
                2 + offset
            } else {
                4 + offset
            }
        }
        Band::Red => {
            // More green than red excess means yellow, not red.
            if (r as i32 - g as i32) < (g as i32 - b as i32) {
                return 1 + offset;
            }
            let (h, _, _) = rgb_to_hls(r, g, b);
            if hue_distance(h, HUE_YELLOW_RED) < hue_distance(h, HUE_MAGENTA) {
                // With red zeroed out, a pure red ball looks black; a
                // red/brown mix keeps residual green and blue.
                if is_near_black(0, g, b) {
                    3 + offset
                } else {
                    5 + offset
                }
            } else {
                7 + offset
            }
        }
    }
}
