//! Sine, cosine and tangent.
//!
//! # Purpose
//!
//! The input angle's top two bits select the quadrant and the rest are the
//! phase; the phase becomes a position in the quarter-wave table, mirrored
//! for odd quadrants and negated for the lower half turn. How the position
//! is read depends on the caller's resolution tier: nearest-neighbor and
//! direct indexing when the table out-resolves the angle, Catmull-Rom
//! between entries (clamped to the cell) when the angle out-resolves the
//! table.
//!
//! Cosine is sine advanced a quarter turn. Tangent shares the reduction
//! and divides sine by cosine in Q16.16, saturating to the extreme tick at
//! the exact asymptote phases — a defined result, not an error.
//!
//! Integer variants take N-bit angle ticks (full turn = `2^bits`).
//! Fixed-point variants take radians in the caller's Q format, reduced
//! modulo 2π through the constant tables.

use super::error::{check_bits, check_frac_bits, DomainError};
use super::qformat::{self, Q16_ONE};
use super::spline::{self, Resolution};
use super::tables::{self, SIN_TABLE_BITS};
use super::Q16;

/// Sine of an unsigned angle in Q16.16, from raw ticks at `bits` width.
pub(crate) fn sin_unit_q16(raw: u32, bits: u32) -> i32 {
    let phase_bits = bits - 2;
    let quadrant = (raw >> phase_bits) & 3;
    let phase = raw & ((1u32 << phase_bits) - 1);

    // Table position in 12.16 fixed point.
    let mut pos: u64 = match Resolution::classify(phase_bits) {
        Resolution::Nearest => {
            qformat::round_div((phase as i64) << (SIN_TABLE_BITS + 16), 1i64 << phase_bits)
                as u64
        }
        Resolution::Direct => (phase as u64) << (SIN_TABLE_BITS + 16 - phase_bits),
        Resolution::Spline => ((phase as u64) << (SIN_TABLE_BITS + 16)) >> phase_bits,
    };
    if quadrant & 1 != 0 {
        pos = ((tables::SIN_TABLE_LEN as u64) << 16) - pos;
    }

    let idx = (pos >> 16) as i32;
    let t = (pos & 0xFFFF) as i32;
    let v = if t == 0 {
        tables::quarter_sin(idx)
    } else {
        spline::sample(tables::quarter_sin, idx, t)
    };
    if quadrant & 2 != 0 {
        -v
    } else {
        v
    }
}

/// Cosine phase shift: a quarter turn at the given width.
fn quarter_turn(raw: u32, bits: u32) -> u32 {
    qformat::wrap_unsigned(raw as i64 + (1i64 << (bits - 2)), bits)
}

/// Rescale a Q16.16 amplitude into the signed tick range.
fn signed_amplitude(v: i32, bits: u32) -> i32 {
    let max = (1i64 << (bits - 1)) - 1;
    qformat::round_div(v as i64 * max, Q16_ONE as i64) as i32
}

/// Rescale a Q16.16 amplitude into the biased unsigned range
/// (`-1 ↦ 0`, `+1 ↦ 2^bits - 1`).
fn biased_amplitude(v: i32, bits: u32) -> u32 {
    let max = (1i64 << bits) - 1;
    qformat::round_div((v as i64 + Q16_ONE as i64) * max, 2 * Q16_ONE as i64) as u32
}

/// Rescale a Q16.16 amplitude into a fixed-point unit, saturating into the
/// signed wrap range.
fn fixed_amplitude(v: i64, bits: u32, frac_bits: u32) -> i32 {
    let unit = 1i64 << frac_bits;
    let max = (1i64 << (bits - 1)) - 1;
    let min = -(1i64 << (bits - 1));
    qformat::round_div(v * unit, Q16_ONE as i64).clamp(min, max) as i32
}

/// Sine over signed N-bit angle ticks, amplitude `±(2^(bits-1) - 1)`.
pub fn sin_signed(tick: i32, bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    Ok(sin_signed_unchecked(tick, bits))
}

pub(crate) fn sin_signed_unchecked(tick: i32, bits: u32) -> i32 {
    let raw = qformat::wrap_unsigned(tick as i64, bits);
    signed_amplitude(sin_unit_q16(raw, bits), bits)
}

/// Sine over unsigned N-bit angle ticks, biased into `[0, 2^bits - 1]`.
pub fn sin_unsigned(tick: u32, bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    Ok(sin_unsigned_unchecked(tick, bits))
}

pub(crate) fn sin_unsigned_unchecked(tick: u32, bits: u32) -> u32 {
    let raw = qformat::wrap_unsigned(tick as i64, bits);
    biased_amplitude(sin_unit_q16(raw, bits), bits)
}

/// Cosine over signed N-bit angle ticks.
pub fn cos_signed(tick: i32, bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    Ok(cos_signed_unchecked(tick, bits))
}

pub(crate) fn cos_signed_unchecked(tick: i32, bits: u32) -> i32 {
    let raw = quarter_turn(qformat::wrap_unsigned(tick as i64, bits), bits);
    signed_amplitude(sin_unit_q16(raw, bits), bits)
}

/// Cosine over unsigned N-bit angle ticks, biased.
pub fn cos_unsigned(tick: u32, bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    Ok(cos_unsigned_unchecked(tick, bits))
}

pub(crate) fn cos_unsigned_unchecked(tick: u32, bits: u32) -> u32 {
    let raw = quarter_turn(qformat::wrap_unsigned(tick as i64, bits), bits);
    biased_amplitude(sin_unit_q16(raw, bits), bits)
}

/// Tangent ratio in Q16.16, or `None` at the exact asymptote.
fn tan_ratio_q16(raw: u32, bits: u32) -> Option<i64> {
    let s = sin_unit_q16(raw, bits) as i64;
    let c = sin_unit_q16(quarter_turn(raw, bits), bits) as i64;
    if c == 0 {
        return None;
    }
    Some((s << 16) / c)
}

/// Tangent over signed N-bit angle ticks; the exact asymptote phases
/// saturate to `±(2^(bits-1) - 1)`.
pub fn tan_signed(tick: i32, bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    Ok(tan_signed_unchecked(tick, bits))
}

pub(crate) fn tan_signed_unchecked(tick: i32, bits: u32) -> i32 {
    let raw = qformat::wrap_unsigned(tick as i64, bits);
    let max = (1i64 << (bits - 1)) - 1;
    match tan_ratio_q16(raw, bits) {
        None => {
            if sin_unit_q16(raw, bits) >= 0 {
                max as i32
            } else {
                -max as i32
            }
        }
        Some(q) => qformat::round_div(q * max, Q16_ONE as i64).clamp(-max, max) as i32,
    }
}

/// Tangent over unsigned N-bit angle ticks, biased into `[0, 2^bits - 1]`.
pub fn tan_unsigned(tick: u32, bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    Ok(tan_unsigned_unchecked(tick, bits))
}

pub(crate) fn tan_unsigned_unchecked(tick: u32, bits: u32) -> u32 {
    let raw = qformat::wrap_unsigned(tick as i64, bits);
    let max = (1i64 << bits) - 1;
    let v = match tan_ratio_q16(raw, bits) {
        None => {
            if sin_unit_q16(raw, bits) >= 0 {
                max
            } else {
                0
            }
        }
        Some(q) => {
            qformat::round_div((q + Q16_ONE as i64) * max, 2 * Q16_ONE as i64).clamp(0, max)
        }
    };
    v as u32
}

/// Reduce fixed-point radians to a 16-bit internal angle tick.
fn radians_to_tick16(raw: i64, frac_bits: u32) -> u32 {
    let q = qformat::to_q16(raw, frac_bits);
    let turn = q.rem_euclid(tables::TWO_PI_Q16 as i64);
    let tick = qformat::round_div(turn << 16, tables::TWO_PI_Q16 as i64);
    (tick as u32) & 0xFFFF
}

/// Sine of a fixed-point angle in radians, amplitude `1 << frac_bits`.
pub fn sin_fixed(raw: i32, bits: u32, frac_bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    check_frac_bits(frac_bits)?;
    Ok(sin_fixed_unchecked(raw, bits, frac_bits))
}

pub(crate) fn sin_fixed_unchecked(raw: i32, bits: u32, frac_bits: u32) -> i32 {
    let tick = radians_to_tick16(raw as i64, frac_bits);
    fixed_amplitude(sin_unit_q16(tick, 16) as i64, bits, frac_bits)
}

/// Cosine of a fixed-point angle in radians.
pub fn cos_fixed(raw: i32, bits: u32, frac_bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    check_frac_bits(frac_bits)?;
    Ok(cos_fixed_unchecked(raw, bits, frac_bits))
}

pub(crate) fn cos_fixed_unchecked(raw: i32, bits: u32, frac_bits: u32) -> i32 {
    let tick = quarter_turn(radians_to_tick16(raw as i64, frac_bits), 16);
    fixed_amplitude(sin_unit_q16(tick, 16) as i64, bits, frac_bits)
}

/// Tangent of a fixed-point angle in radians, saturating at the asymptote.
pub fn tan_fixed(raw: i32, bits: u32, frac_bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    check_frac_bits(frac_bits)?;
    Ok(tan_fixed_unchecked(raw, bits, frac_bits))
}

pub(crate) fn tan_fixed_unchecked(raw: i32, bits: u32, frac_bits: u32) -> i32 {
    let tick = radians_to_tick16(raw as i64, frac_bits);
    let max = (1i64 << (bits - 1)) - 1;
    let min = -max;
    let v = match tan_ratio_q16(tick, 16) {
        None => {
            if sin_unit_q16(tick, 16) >= 0 {
                max
            } else {
                min
            }
        }
        Some(q) => {
            let unit = 1i64 << frac_bits;
            qformat::round_div(q.clamp(i32::MIN as i64, i32::MAX as i64) * unit, Q16_ONE as i64)
                .clamp(min, max)
        }
    };
    v as i32
}

/// Sine of an unsigned fixed-point angle in radians; the negative half of
/// the wave clamps to zero in the unsigned format.
pub fn sin_ufixed(raw: u32, bits: u32, frac_bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    check_frac_bits(frac_bits)?;
    Ok(sin_ufixed_unchecked(raw, bits, frac_bits))
}

pub(crate) fn sin_ufixed_unchecked(raw: u32, bits: u32, frac_bits: u32) -> u32 {
    let tick = radians_to_tick16(raw as i64, frac_bits);
    ufixed_amplitude(sin_unit_q16(tick, 16), bits, frac_bits)
}

/// Cosine of an unsigned fixed-point angle in radians, clamped at zero.
pub fn cos_ufixed(raw: u32, bits: u32, frac_bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    check_frac_bits(frac_bits)?;
    Ok(cos_ufixed_unchecked(raw, bits, frac_bits))
}

pub(crate) fn cos_ufixed_unchecked(raw: u32, bits: u32, frac_bits: u32) -> u32 {
    let tick = quarter_turn(radians_to_tick16(raw as i64, frac_bits), 16);
    ufixed_amplitude(sin_unit_q16(tick, 16), bits, frac_bits)
}

/// Rescale a Q16.16 amplitude into an unsigned fixed-point unit, clamping
/// the negative half to zero.
fn ufixed_amplitude(v: i32, bits: u32, frac_bits: u32) -> u32 {
    let unit = 1i64 << frac_bits;
    let max = (1i64 << bits) - 1;
    qformat::round_div(v as i64 * unit, Q16_ONE as i64).clamp(0, max) as u32
}

/// Tangent of an unsigned fixed-point angle, clamped into `[0, 2^bits-1]`.
pub fn tan_ufixed(raw: u32, bits: u32, frac_bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    check_frac_bits(frac_bits)?;
    Ok(tan_ufixed_unchecked(raw, bits, frac_bits))
}

pub(crate) fn tan_ufixed_unchecked(raw: u32, bits: u32, frac_bits: u32) -> u32 {
    let tick = radians_to_tick16(raw as i64, frac_bits);
    let max = (1i64 << bits) - 1;
    let v = match tan_ratio_q16(tick, 16) {
        None => {
            if sin_unit_q16(tick, 16) >= 0 {
                max
            } else {
                0
            }
        }
        Some(q) => {
            let unit = 1i64 << frac_bits;
            qformat::round_div(q.clamp(i32::MIN as i64, i32::MAX as i64) * unit, Q16_ONE as i64)
                .clamp(0, max)
        }
    };
    v as u32
}

/// Sine in the Q16.16 working format, radians in.
pub fn sin(x: Q16) -> Q16 {
    Q16::from_bits(sin_fixed_unchecked(x.to_bits(), 32, 16))
}

/// Cosine in the Q16.16 working format, radians in.
pub fn cos(x: Q16) -> Q16 {
    let tick = quarter_turn(radians_to_tick16(x.to_bits() as i64, 16), 16);
    Q16::from_bits(fixed_amplitude(sin_unit_q16(tick, 16) as i64, 32, 16))
}
