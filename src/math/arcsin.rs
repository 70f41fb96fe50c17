//! Arcsine and arccosine.
//!
//! # Purpose
//!
//! A dual-region solver: the bulk of `[-1, 1]` is answered analytically
//! through `asin(x) = atan(x / sqrt(1 - x²))` with a 64-bit square root,
//! clamped into the monotone window of the main-table cell the input maps
//! to; at and beyond `sin 75°` the identity's Q16.16 square root loses too
//! many bits, so the dense tail table spanning `[sin 75°, 1]` takes over,
//! spline-interpolated like every other table. Targets of 6 angle bits or
//! fewer skip interpolation entirely and read the nearest table entry —
//! the coarse-hardware mode.
//!
//! `acos` is always `π/2 - asin`; only `asin` touches the tables.

use super::arctan;
use super::error::{check_bits, check_range, DomainError};
use super::qformat::{self, Q16_ONE};
use super::spline::{self, Resolution};
use super::sqrt::isqrt64;
use super::tables::{self, ASIN_TAIL_THRESHOLD, HALF_PI_Q16};
use super::Q16;

/// Arcsine in the Q16.16 working format; input clamps to `[-1, 1]`,
/// output is radians in `[-π/2, π/2]`.
pub fn asin(x: Q16) -> Q16 {
    Q16::from_bits(asin_q16(x.to_bits()))
}

/// Arccosine in the Q16.16 working format; input clamps to `[-1, 1]`,
/// output is radians in `[0, π]`.
pub fn acos(x: Q16) -> Q16 {
    Q16::from_bits(acos_q16(x.to_bits()))
}

pub(crate) fn acos_q16(x: i32) -> i32 {
    HALF_PI_Q16 - asin_q16(x)
}

/// Interpolating arcsine core.
pub(crate) fn asin_q16(x: i32) -> i32 {
    let x = x.clamp(-Q16_ONE, Q16_ONE);
    // exact boundaries bypass the square root entirely
    if x == 0 {
        return 0;
    }
    if x == Q16_ONE {
        return HALF_PI_Q16;
    }
    if x == -Q16_ONE {
        return -HALF_PI_Q16;
    }
    if x.abs() >= ASIN_TAIL_THRESHOLD {
        return tail_interpolate(x);
    }
    // The main-table cell the input maps to bounds the analytic result:
    // the identity can never step outside the cell the index selection
    // chose, which keeps the output monotone across cell boundaries.
    let (idx, _) = main_position(x);
    let lo = tables::asin_entry(idx);
    let hi = tables::asin_entry(idx + 1);
    spline::monotone_clamp(identity_asin(x), lo, hi)
}

/// `asin(x) = atan(x / sqrt(1 - x²))`, computed wide.
fn identity_asin(x: i32) -> i32 {
    let xx = (x as i64) * (x as i64);
    let root = isqrt64(((1i64 << 32) - xx) as u64) as i64;
    let ratio = qformat::round_div((x as i64) << 16, root);
    arctan::atan_q16(ratio)
}

/// Nearest-neighbor arcsine for coarse targets, no interpolation.
fn asin_nearest_q16(x: i32) -> i32 {
    let x = x.clamp(-Q16_ONE, Q16_ONE);
    if x.abs() >= ASIN_TAIL_THRESHOLD && x.abs() != Q16_ONE {
        let (pos, negate) = tail_position(x);
        let v = tables::asin_tail_entry(((pos + 0x8000) >> 16) as i32);
        return if negate { -v } else { v };
    }
    let pos = ((x as i64 + Q16_ONE as i64) * (tables::ASIN_TABLE_LEN as i64 - 1)) >> 1;
    tables::asin_entry(((pos + 0x8000) >> 16) as i32)
}

/// Core dispatch on the target resolution tier.
pub(crate) fn asin_for_bits(x: i32, bits: u32) -> i32 {
    match Resolution::classify(bits) {
        Resolution::Nearest => asin_nearest_q16(x),
        Resolution::Direct | Resolution::Spline => asin_q16(x),
    }
}

/// Main-table position for an input in the bulk region: index and Q16.16
/// fraction over `[-1, 1] → [0, 4095]`.
fn main_position(x: i32) -> (i32, i32) {
    let pos = ((x as i64 + Q16_ONE as i64) * (tables::ASIN_TABLE_LEN as i64 - 1)) >> 1;
    (((pos >> 16) as i32), (pos & 0xFFFF) as i32)
}

/// Tail-table position in Q16.16 over `[sin 75°, 1] → [0, 2047]`, plus the
/// sign to restore.
fn tail_position(x: i32) -> (i64, bool) {
    let ax = x.abs();
    let num = ((ax - ASIN_TAIL_THRESHOLD) as i64) * (tables::ASIN_TAIL_LEN as i64 - 1);
    let den = (Q16_ONE - ASIN_TAIL_THRESHOLD) as i64;
    ((num << 16) / den, x < 0)
}

fn tail_interpolate(x: i32) -> i32 {
    let (pos, negate) = tail_position(x);
    let idx = (pos >> 16) as i32;
    let t = (pos & 0xFFFF) as i32;
    let v = if t == 0 {
        tables::asin_tail_entry(idx)
    } else {
        spline::sample(tables::asin_tail_entry, idx, t)
    };
    if negate {
        -v
    } else {
        v
    }
}

/// Rescale a raw amplitude to Q16.16 against the representation's unit.
fn unit_q16(raw: i64, unit: i64) -> i32 {
    qformat::amplitude_to_q16(raw, unit)
}

/// Arcsine of a signed N-bit amplitude (unit = `2^(bits-1) - 1`),
/// returning half-range-density angle ticks.
pub fn asin_signed(raw: i32, bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    Ok(asin_signed_unchecked(raw, bits))
}

pub(crate) fn asin_signed_unchecked(raw: i32, bits: u32) -> i32 {
    let x = unit_q16(raw as i64, (1i64 << (bits - 1)) - 1);
    qformat::radians_to_half_range_ticks(asin_for_bits(x, bits), bits)
}

/// Arcsine of an unsigned N-bit amplitude (unit = `2^bits - 1`), returning
/// half-range-density ticks; the reachable domain is `[0, 1]`.
pub fn asin_unsigned(raw: u32, bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    Ok(asin_unsigned_unchecked(raw, bits))
}

pub(crate) fn asin_unsigned_unchecked(raw: u32, bits: u32) -> u32 {
    let x = unit_q16(raw as i64, (1i64 << bits) - 1);
    qformat::radians_to_half_range_ticks(asin_for_bits(x, bits), bits) as u32
}

/// Arccosine of a signed N-bit amplitude, ticks through the signed wrap
/// convention (`π` maps to the negative half turn).
pub fn acos_signed(raw: i32, bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    Ok(acos_signed_unchecked(raw, bits))
}

pub(crate) fn acos_signed_unchecked(raw: i32, bits: u32) -> i32 {
    let x = unit_q16(raw as i64, (1i64 << (bits - 1)) - 1);
    let v = HALF_PI_Q16 - asin_for_bits(x, bits);
    qformat::acos_ticks(v, bits, true) as i32
}

/// Arccosine of an unsigned N-bit amplitude, ticks through the unsigned
/// density convention (`[0, π]` onto `[0, 2^(bits-1)]`).
pub fn acos_unsigned(raw: u32, bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    Ok(acos_unsigned_unchecked(raw, bits))
}

pub(crate) fn acos_unsigned_unchecked(raw: u32, bits: u32) -> u32 {
    let x = unit_q16(raw as i64, (1i64 << bits) - 1);
    let v = HALF_PI_Q16 - asin_for_bits(x, bits);
    qformat::acos_ticks(v, bits, false) as u32
}

/// Arcsine of a signed fixed-point amplitude (unit = `1 << frac_bits`,
/// which must be at least 1), half-range-density ticks in the type's width.
pub fn asin_fixed(raw: i32, bits: u32, frac_bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    check_range("frac_bits", frac_bits, 1, 31)?;
    Ok(asin_fixed_unchecked(raw, bits, frac_bits))
}

pub(crate) fn asin_fixed_unchecked(raw: i32, bits: u32, frac_bits: u32) -> i32 {
    let x = unit_q16(raw as i64, 1i64 << frac_bits);
    qformat::radians_to_half_range_ticks(asin_for_bits(x, bits), bits)
}

/// Arccosine of a signed fixed-point amplitude, signed-wrap ticks.
pub fn acos_fixed(raw: i32, bits: u32, frac_bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    check_range("frac_bits", frac_bits, 1, 31)?;
    Ok(acos_fixed_unchecked(raw, bits, frac_bits))
}

pub(crate) fn acos_fixed_unchecked(raw: i32, bits: u32, frac_bits: u32) -> i32 {
    let x = unit_q16(raw as i64, 1i64 << frac_bits);
    let v = HALF_PI_Q16 - asin_for_bits(x, bits);
    qformat::acos_ticks(v, bits, true) as i32
}

/// Arcsine of an unsigned fixed-point amplitude, half-range ticks.
pub fn asin_ufixed(raw: u32, bits: u32, frac_bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    check_range("frac_bits", frac_bits, 1, 31)?;
    Ok(asin_ufixed_unchecked(raw, bits, frac_bits))
}

pub(crate) fn asin_ufixed_unchecked(raw: u32, bits: u32, frac_bits: u32) -> u32 {
    let x = unit_q16(raw as i64, 1i64 << frac_bits);
    qformat::radians_to_half_range_ticks(asin_for_bits(x, bits), bits) as u32
}

/// Arccosine of an unsigned fixed-point amplitude, unsigned-density ticks.
pub fn acos_ufixed(raw: u32, bits: u32, frac_bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    check_range("frac_bits", frac_bits, 1, 31)?;
    Ok(acos_ufixed_unchecked(raw, bits, frac_bits))
}

pub(crate) fn acos_ufixed_unchecked(raw: u32, bits: u32, frac_bits: u32) -> u32 {
    let x = unit_q16(raw as i64, 1i64 << frac_bits);
    let v = HALF_PI_Q16 - asin_for_bits(x, bits);
    qformat::acos_ticks(v, bits, false) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asin_q16_anchors() {
        assert_eq!(asin_q16(0), 0);
        assert_eq!(asin_q16(Q16_ONE), HALF_PI_Q16);
        assert_eq!(asin_q16(-Q16_ONE), -HALF_PI_Q16);
        // asin(0.5) = π/6
        crate::assert_ticks_eq!(asin_q16(Q16_ONE / 2), 34315, 2);
        // asin(1/√2) = π/4
        crate::assert_ticks_eq!(asin_q16(46341), tables::QUARTER_PI_Q16, 2);
    }

    #[test]
    fn test_asin_clamps_out_of_range_input() {
        assert_eq!(asin_q16(Q16_ONE + 5000), HALF_PI_Q16);
        assert_eq!(asin_q16(i32::MIN), -HALF_PI_Q16);
    }

    #[test]
    fn test_asin_odd_symmetry() {
        for x in [1, 500, 30000, 60000, 63303, 64000, 65000, 65535] {
            assert_eq!(asin_q16(-x), -asin_q16(x), "x = {}", x);
        }
    }

    #[test]
    fn test_asin_monotone_across_regions() {
        // sweep across the tail threshold; output must never decrease
        let mut prev = asin_q16(60000);
        for x in 60001..=65536 {
            let v = asin_q16(x);
            assert!(v >= prev, "x = {}: {} < {}", x, v, prev);
            prev = v;
        }
    }

    #[test]
    fn test_tail_region_accuracy() {
        // asin(64880/65536) = 1.4291874 rad
        crate::assert_ticks_eq!(asin_q16(64880), 93663, 4);
        // asin at the threshold is 75° = 5π/12
        crate::assert_ticks_eq!(asin_q16(ASIN_TAIL_THRESHOLD), 85788, 4);
    }

    #[test]
    fn test_acos_is_complement() {
        for x in [-65536, -46341, -1, 0, 1, 30000, 46341, 64000, 65536] {
            assert_eq!(acos_q16(x) + asin_q16(x), HALF_PI_Q16, "x = {}", x);
        }
    }

    #[test]
    fn test_signed_eight_bit_ticks() {
        assert_eq!(asin_signed(0, 8).unwrap(), 0);
        // asin(1.0) saturates at the largest tick
        assert_eq!(asin_signed(127, 8).unwrap(), 127);
        assert_eq!(asin_signed(-127, 8).unwrap(), -128);
        // asin(0.5) = 30°, doubled density: 256·30/180 ≈ 43
        crate::assert_ticks_eq!(asin_signed(64, 8).unwrap(), 43, 1);
    }

    #[test]
    fn test_acos_tick_conventions() {
        // acos(-1) = π: half turn unsigned, wrapped negative signed
        assert_eq!(acos_signed(-127, 8).unwrap(), -128);
        assert_eq!(acos_unsigned(0, 8).unwrap(), 64);
        // acos(1) = 0 in both conventions
        assert_eq!(acos_signed(127, 8).unwrap(), 0);
        assert_eq!(acos_unsigned(255, 8).unwrap(), 0);
    }

    #[test]
    fn test_retro_nearest_tier() {
        // 6-bit targets read the nearest entry; anchors still hold
        assert_eq!(asin_signed(31, 6).unwrap(), 31);
        assert_eq!(asin_signed(-31, 6).unwrap(), -32);
        assert_eq!(asin_signed(0, 6).unwrap(), 0);
        // and the result is always within the half range
        for raw in -32..=31 {
            let t = asin_signed(raw, 6).unwrap();
            assert!((-32..=31).contains(&t), "raw = {}: tick {}", raw, t);
        }
    }

    #[test]
    fn test_fixed_point_amplitudes() {
        // 0.5 in Q8 → 30° doubled density at 16 bits: 65536·30/180 ≈ 10923
        crate::assert_ticks_eq!(asin_fixed(128, 16, 8).unwrap(), 10923, 2);
        assert_eq!(acos_fixed(256, 16, 8).unwrap(), 0);
        assert_eq!(asin_ufixed(256, 16, 8).unwrap(), 32767);
        assert_eq!(acos_ufixed(0, 16, 8).unwrap(), 16384);
    }

    #[test]
    fn test_domain_errors_name_parameters() {
        assert_eq!(asin_signed(0, 35).unwrap_err().parameter, "bits");
        assert_eq!(asin_fixed(0, 8, 0).unwrap_err().parameter, "frac_bits");
        assert_eq!(asin_fixed(0, 8, 32).unwrap_err().parameter, "frac_bits");
    }
}
