//! Property sweeps over randomized inputs: range invariants, symmetries,
//! and totality, across the full span of supported widths.

use kestrel::assert_ticks_eq;
use kestrel::math::{arcsin, arctan, explog, interp, qformat, sqrt, trig};

#[test]
fn test_trig_outputs_stay_in_range() {
    fastrand::seed(7);
    for _ in 0..2000 {
        let bits = fastrand::u32(2..=31);
        let max = (1i64 << (bits - 1)) - 1;
        let min = -(1i64 << (bits - 1));
        let tick = fastrand::i32(..);
        for v in [
            trig::sin_signed(tick, bits).unwrap() as i64,
            trig::cos_signed(tick, bits).unwrap() as i64,
            trig::tan_signed(tick, bits).unwrap() as i64,
            arcsin::asin_signed(tick, bits).unwrap() as i64,
            arcsin::acos_signed(tick, bits).unwrap() as i64,
            arctan::atan_signed(tick, bits).unwrap() as i64,
        ] {
            assert!(
                (min..=max).contains(&v),
                "bits = {}, tick = {}: {} escaped [{}, {}]",
                bits,
                tick,
                v,
                min,
                max
            );
        }
    }
}

#[test]
fn test_unsigned_outputs_stay_in_range() {
    fastrand::seed(11);
    for _ in 0..2000 {
        let bits = fastrand::u32(2..=31);
        let max = (1u64 << bits) - 1;
        let tick = fastrand::u32(..);
        for v in [
            trig::sin_unsigned(tick, bits).unwrap() as u64,
            trig::cos_unsigned(tick, bits).unwrap() as u64,
            trig::tan_unsigned(tick, bits).unwrap() as u64,
            arcsin::asin_unsigned(tick, bits).unwrap() as u64,
            arcsin::acos_unsigned(tick, bits).unwrap() as u64,
            arctan::atan_unsigned(tick, bits).unwrap() as u64,
            arctan::atan2_unsigned(tick, fastrand::u32(..), bits).unwrap() as u64,
        ] {
            assert!(v <= max, "bits = {}, tick = {}: {} > {}", bits, tick, v, max);
        }
    }
}

#[test]
fn test_sin_odd_symmetry_random_widths() {
    fastrand::seed(13);
    for _ in 0..2000 {
        let bits = fastrand::u32(2..=31);
        let half = 1i64 << (bits - 1);
        // skip the minimum tick: its negation is itself under wraparound
        let tick = fastrand::i64(-half + 1..half) as i32;
        let pos = trig::sin_signed(tick, bits).unwrap();
        let neg = trig::sin_signed(qformat::wrap_signed(-(tick as i64), bits), bits).unwrap();
        assert_eq!(neg, -pos, "bits = {}, tick = {}", bits, tick);
    }
}

#[test]
fn test_atan_odd_symmetry_random() {
    fastrand::seed(17);
    for _ in 0..2000 {
        let bits = fastrand::u32(2..=31);
        let raw = fastrand::i32(-i32::MAX..=i32::MAX);
        let pos = arctan::atan_signed(raw, bits).unwrap() as i64;
        let neg = arctan::atan_signed(-raw, bits).unwrap() as i64;
        // the positive end saturates one tick short of the negative end
        assert!((pos + neg).abs() <= 1, "bits = {}, raw = {}", bits, raw);
    }
}

#[test]
fn test_sqrt_idempotent_on_perfect_squares() {
    fastrand::seed(19);
    for _ in 0..2000 {
        let k = fastrand::u32(0..=46340);
        assert_eq!(sqrt::sqrt_unsigned(k * k, 31).unwrap(), k);
    }
    // fixed-point: integer-valued squares at several Q formats
    for frac in [4u32, 8, 16] {
        let limit = 1u32 << ((30 - frac) / 2);
        for _ in 0..500 {
            let k = fastrand::u32(0..limit);
            let raw = (k * k) << frac;
            assert_eq!(
                sqrt::sqrt_ufixed(raw, 31, frac).unwrap(),
                k << frac,
                "frac = {}, k = {}",
                frac,
                k
            );
        }
    }
}

#[test]
fn test_sqrt_exp_log_never_fail() {
    fastrand::seed(23);
    for _ in 0..3000 {
        let bits = fastrand::u32(2..=31);
        let frac = fastrand::u32(0..=31);
        let raw = fastrand::i32(..);
        assert!(sqrt::sqrt_signed(raw, bits).is_ok());
        assert!(sqrt::sqrt_fixed(raw, bits, frac).is_ok());
        assert!(explog::exp2_signed(raw, bits).is_ok());
        assert!(explog::exp2_fixed(raw, bits, frac).is_ok());
        assert!(explog::exp_fixed(raw, bits, frac).is_ok());
        assert!(explog::log2_signed(raw, bits).is_ok());
        assert!(explog::log2_fixed(raw, bits, frac).is_ok());
        let uraw = fastrand::u32(..);
        assert!(explog::exp2_ufixed(uraw, bits, frac).is_ok());
        assert!(explog::log2_ufixed(uraw, bits, frac).is_ok());
    }
}

#[test]
fn test_tan_boundary_asymptotes_every_width() {
    for bits in 2..=31u32 {
        let quarter = 1i64 << (bits - 2);
        let max = ((1i64 << (bits - 1)) - 1) as i32;
        assert_eq!(trig::tan_signed(quarter as i32, bits).unwrap(), max);
        assert_eq!(
            trig::tan_signed(qformat::wrap_signed(3 * quarter, bits), bits).unwrap(),
            -max
        );
    }
}

#[test]
fn test_atan2_quadrant_signs() {
    fastrand::seed(29);
    for _ in 0..1000 {
        let bits = fastrand::u32(3..=31);
        let y = fastrand::i32(1..=i32::MAX);
        let x = fastrand::i32(1..=i32::MAX);
        let q1 = arctan::atan2_signed(y, x, bits).unwrap();
        let q4 = arctan::atan2_signed(-y, x, bits).unwrap();
        assert!(q1 >= 0 && q4 <= 0, "bits = {}", bits);
        assert_eq!(q1, -q4);
        // mirrored across the y axis: θ and π - θ sum to a half turn,
        // within the skew of π against the odd 2π constant
        let q2 = arctan::atan2_signed(y, -x, bits).unwrap() as i64;
        let half = 1i64 << (bits - 1);
        let skew = half / 411775 + 2;
        let sum = (q1 as i64 + q2).rem_euclid(1i64 << bits);
        assert!(
            (sum - half).abs() <= skew,
            "bits = {}: {} vs {} (skew {})",
            bits,
            sum,
            half,
            skew
        );
    }
}

#[test]
fn test_asin_monotone_over_amplitudes() {
    for bits in [8u32, 12, 16, 24] {
        let unit = ((1i64 << (bits - 1)) - 1) as i32;
        let step = (unit / 200).max(1);
        let mut prev = arcsin::asin_signed(-unit, bits).unwrap();
        let mut raw = -unit + step;
        while raw <= unit {
            let v = arcsin::asin_signed(raw, bits).unwrap();
            assert!(v >= prev, "bits = {}, raw = {}", bits, raw);
            prev = v;
            raw += step;
        }
    }
}

#[test]
fn test_lerp_stays_in_hull() {
    fastrand::seed(31);
    for _ in 0..2000 {
        let a = fastrand::i32(-(1 << 20)..1 << 20);
        let b = fastrand::i32(-(1 << 20)..1 << 20);
        let t = fastrand::i32(..);
        let v = interp::lerp_fixed(a, b, t, 31, 16).unwrap();
        let (lo, hi) = (a.min(b), a.max(b));
        assert!((lo..=hi).contains(&v));
        let s = interp::smoothstep_fixed(a, b, t, 31, 16).unwrap();
        assert!((lo..=hi).contains(&s));
    }
}

#[test]
fn test_rounding_is_to_nearest_not_truncation() {
    // a tick one step past 45° must round to the nearest amplitude, which
    // truncation would miss
    let exact = trig::sin_signed(32, 8).unwrap();
    assert_eq!(exact, 90);
    assert_ticks_eq!(trig::sin_signed(33, 8).unwrap(), 92, 1);
}
