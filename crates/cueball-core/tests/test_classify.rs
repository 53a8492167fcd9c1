use cueball_core::classify::{ball_group, ball_number, BallGroup};

#[test]
fn test_cue_ball_ignores_color() {
    for &(r, g, b) in &[(0, 0, 0), (255, 0, 0), (10, 200, 30), (255, 255, 255)] {
        assert_eq!(ball_number(0.95, r, g, b), 0);
    }
}

#[test]
fn test_group_band_boundaries() {
    // Inclusive ends, first match wins: the shared boundaries go to the
    // earlier band in White, Big, Little order.
    assert_eq!(ball_group(1.0), BallGroup::White);
    assert_eq!(ball_group(0.90), BallGroup::White);
    assert_eq!(ball_group(0.89), BallGroup::Big);
    assert_eq!(ball_group(0.20), BallGroup::Big);
    assert_eq!(ball_group(0.19), BallGroup::Little);
    assert_eq!(ball_group(0.0), BallGroup::Little);
    // Out-of-range falls back to White (reference quirk).
    assert_eq!(ball_group(1.5), BallGroup::White);
}

#[test]
fn test_eight_ball_near_black() {
    assert_eq!(ball_number(0.1, 10, 10, 10), 8);
    assert_eq!(ball_number(0.0, 60, 50, 45), 8);
    // Dark but spread-out channels are a color, not black.
    assert_eq!(ball_number(0.1, 70, 10, 10), 3);
    // Near-black only applies to the solid group.
    assert_ne!(ball_number(0.5, 10, 10, 10), 8);
}

#[test]
fn test_red_family_solid_and_stripe() {
    // Saturated red: hue 0, nearest the yellow/red reference; with red
    // zeroed the remainder is black, so it is the pure red ball.
    assert_eq!(ball_number(0.1, 200, 0, 0), 3);
    assert_eq!(ball_number(0.5, 200, 0, 0), 11);
}

#[test]
fn test_yellow_split_literal_comparison() {
    // (r - g) < (g - b) routes to yellow before any hue math.
    assert_eq!(ball_number(0.1, 200, 150, 0), 1);
    assert_eq!(ball_number(0.5, 200, 150, 0), 9);
    // One step the other way and it is red family again.
    assert_eq!(ball_number(0.1, 200, 99, 0), 5);
}

#[test]
fn test_green_family() {
    assert_eq!(ball_number(0.1, 0, 255, 0), 6);
    assert_eq!(ball_number(0.5, 0, 255, 0), 14);
    assert_eq!(ball_number(0.0, 30, 180, 60), 6);
}

#[test]
fn test_blue_family() {
    // Hue 0.627: closer to the blue reference than to magenta.
    assert_eq!(ball_number(0.1, 0, 60, 255), 2);
    assert_eq!(ball_number(0.5, 0, 60, 255), 10);
}

#[test]
fn test_purple_family() {
    // r == b tie resolves to the blue band; hue 0.833 lands on magenta.
    assert_eq!(ball_number(0.1, 128, 0, 128), 4);
    assert_eq!(ball_number(0.5, 128, 0, 128), 12);
    // Blue-leaning purple, no tie.
    assert_eq!(ball_number(0.1, 120, 0, 160), 4);
}

#[test]
fn test_red_band_magenta_leaning() {
    // Red dominant but hue nearest magenta: the maroon/burgundy ball.
    assert_eq!(ball_number(0.1, 200, 0, 150), 7);
    assert_eq!(ball_number(0.5, 200, 0, 150), 15);
}

#[test]
fn test_red_brown_mix() {
    // Residual green/blue after zeroing red distinguishes brown from red.
    assert_eq!(ball_number(0.1, 180, 80, 40), 5);
    assert_eq!(ball_number(0.5, 180, 80, 40), 13);
}

#[test]
fn test_tie_breaks_are_deterministic() {
    // r == g: stays in the red band, then yellow (0 < 255).
    assert_eq!(ball_number(0.1, 255, 255, 0), 1);
    // g == b > r: green band.
    assert_eq!(ball_number(0.1, 0, 200, 200), 6);
    // All equal, not near-black: red band, hue 0 path.
    let gray = ball_number(0.1, 100, 100, 100);
    assert_eq!(gray, 5);
    assert_eq!(ball_number(0.1, 100, 100, 100), gray);
}
