//! Engine-wide tests: behavior that spans modules.

use super::qformat::Q16_ONE;
use super::tables::{HALF_PI_Q16, QUARTER_PI_Q16};
use super::{arcsin, arctan, spline, sqrt, trig, Q16};

#[test]
fn test_q16_entry_points_agree_with_fixed_crate() {
    // the public working-format API speaks I16F16
    assert_eq!(arctan::atan(Q16::from_num(0)), Q16::from_num(0));
    let atan_one = arctan::atan(Q16::from_num(1));
    crate::assert_ticks_eq!(atan_one.to_bits(), QUARTER_PI_Q16, 1);
    let asin_half = arcsin::asin(Q16::from_num(0.5));
    crate::assert_ticks_eq!(asin_half.to_bits(), 34315, 2);
    assert_eq!(sqrt::sqrt(Q16::from_num(2.25)), Q16::from_num(1.5));
}

#[test]
fn test_asin_acos_complement_in_q16() {
    // Acos(x) + Asin(x) = π/2 holds exactly in the shared working format
    for x in (-65536..=65536).step_by(997) {
        let x = Q16::from_bits(x);
        let sum = arcsin::acos(x).to_bits() + arcsin::asin(x).to_bits();
        assert_eq!(sum, HALF_PI_Q16);
    }
}

#[test]
fn test_asin_of_sin_round_trips() {
    // sin then asin lands back near the original angle (first quadrant,
    // away from the flat top where amplitude quantization dominates)
    for tick in 1..=40i32 {
        let amplitude = trig::sin_signed(tick, 8).unwrap();
        let back = arcsin::asin_signed(amplitude, 8).unwrap();
        // asin ticks are doubled density: compare against 2×tick
        crate::assert_ticks_eq!(back, 2 * tick, 2);
    }
}

#[test]
fn test_atan_of_tan_round_trips() {
    for tick in 1..=20i32 {
        let ratio = trig::tan_signed(tick, 8).unwrap();
        let back = arctan::atan_signed(ratio, 8).unwrap();
        crate::assert_ticks_eq!(back, 2 * tick, 2);
    }
}

#[test]
fn test_every_tier_against_the_same_table() {
    // 45° through the nearest (8-bit), direct (12-bit) and spline
    // (20-bit) tiers must agree once rescaled — same table, same anchor
    let v8 = trig::sin_signed(32, 8).unwrap() as i64;
    let v12 = trig::sin_signed(32 << 4, 12).unwrap() as i64;
    let v20 = trig::sin_signed(32 << 12, 20).unwrap() as i64;
    let n8 = (v8 << 16) / 127;
    let n12 = (v12 << 16) / 2047;
    let n20 = (v20 << 16) / 524287;
    crate::assert_ticks_eq!(n8, n12, 600);
    crate::assert_ticks_eq!(n12, n20, 40);
    crate::assert_ticks_eq!(n20, 46341, 20);
}

#[test]
fn test_catmull_rom_feeds_every_consumer() {
    // at widths beyond the table resolution all three table consumers
    // interpolate; spot-check each against a dense-width neighbor pair
    let a = trig::sin_signed(100_000, 20).unwrap();
    let b = trig::sin_signed(100_001, 20).unwrap();
    assert!(b >= a);
    let lo = arctan::atan_signed(100_000, 20).unwrap();
    let hi = arctan::atan_signed(100_001, 20).unwrap();
    assert!(hi >= lo);
    let lo = arcsin::asin_signed(100_000, 20).unwrap();
    let hi = arcsin::asin_signed(100_001, 20).unwrap();
    assert!(hi >= lo);
}

#[test]
fn test_saturation_is_not_an_error() {
    // extreme values inside a valid configuration always produce results
    assert!(trig::tan_signed(1 << 14, 16).is_ok());
    assert!(sqrt::sqrt_signed(i32::MIN + 1, 31).is_ok());
    assert!(arcsin::asin_signed(i32::MAX, 31).is_ok());
    assert!(arctan::atan_signed(i32::MIN + 1, 31).is_ok());
}

#[test]
fn test_monotone_clamp_preserves_table_order() {
    let clamped = spline::monotone_clamp(70000, 0, Q16_ONE);
    assert_eq!(clamped, Q16_ONE);
    let clamped = spline::monotone_clamp(-3, 0, Q16_ONE);
    assert_eq!(clamped, 0);
}
