//! Exponential and logarithm approximations.
//!
//! First-order, table-free approximations trading accuracy for speed:
//! `exp2` splits off the integer part as a shift of the unit and corrects
//! the fractional part linearly through the ln 2 constant table; `exp`
//! multiplies by log2 e in the caller's Q format and reuses `exp2`; `log2`
//! scans for the most significant bit and aligns the remainder below it to
//! the fractional-bit count. Out-of-range results saturate and `log2` of
//! a non-positive value is zero — the no-NaN policy, not an error.

use super::error::{check_bits, check_frac_bits, DomainError};
use super::tables;

/// `2^raw` for an unsigned N-bit integer, saturating at the type max.
pub fn exp2_unsigned(raw: u32, bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    Ok(exp2_unsigned_unchecked(raw, bits))
}

pub(crate) fn exp2_unsigned_unchecked(raw: u32, bits: u32) -> u32 {
    let max = (1u64 << bits) - 1;
    if raw >= bits {
        max as u32
    } else {
        1u32 << raw
    }
}

/// `2^raw` for a signed N-bit integer; negative exponents clamp to zero,
/// large ones saturate at the type max.
pub fn exp2_signed(raw: i32, bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    Ok(exp2_signed_unchecked(raw, bits))
}

pub(crate) fn exp2_signed_unchecked(raw: i32, bits: u32) -> i32 {
    let max = (1i64 << (bits - 1)) - 1;
    if raw < 0 {
        0
    } else if raw as u32 >= bits - 1 {
        max as i32
    } else {
        1i32 << raw
    }
}

/// `e^raw` for a signed N-bit integer: the `frac_bits = 0` specialization
/// of [`exp_fixed`], where log2 e rounds to one.
pub fn exp_signed(raw: i32, bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    Ok(exp_signed_unchecked(raw, bits))
}

pub(crate) fn exp_signed_unchecked(raw: i32, bits: u32) -> i32 {
    let scaled = (raw as i64) * tables::LOG2_E_TABLE[0];
    exp2_signed_unchecked(saturate_i32(scaled), bits)
}

/// `e^raw` for an unsigned N-bit integer.
pub fn exp_unsigned(raw: u32, bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    Ok(exp_unsigned_unchecked(raw, bits))
}

pub(crate) fn exp_unsigned_unchecked(raw: u32, bits: u32) -> u32 {
    let scaled = (raw as i64) * tables::LOG2_E_TABLE[0];
    exp2_unsigned_unchecked(scaled.min(u32::MAX as i64) as u32, bits)
}

/// Floor log2 of an unsigned N-bit integer; zero input returns zero.
pub fn log2_unsigned(raw: u32, bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    Ok(log2_unsigned_unchecked(raw))
}

pub(crate) fn log2_unsigned_unchecked(raw: u32) -> u32 {
    if raw == 0 {
        0
    } else {
        31 - raw.leading_zeros()
    }
}

/// Floor log2 of a signed N-bit integer; non-positive input returns zero.
pub fn log2_signed(raw: i32, bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    Ok(log2_signed_unchecked(raw))
}

pub(crate) fn log2_signed_unchecked(raw: i32) -> i32 {
    if raw <= 0 {
        0
    } else {
        log2_unsigned_unchecked(raw as u32) as i32
    }
}

fn saturate_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Shared `2^x` over a widened raw value in Q(bits-frac).frac.
fn exp2_q(raw: i64, frac_bits: u32, max: i64) -> i64 {
    let unit = 1i64 << frac_bits;
    let int_part = raw >> frac_bits;
    let frac_part = raw & (unit - 1);
    // 2^int as a shift of the unit, saturating high, vanishing low
    let base = if int_part >= 0 {
        if frac_bits as i64 + int_part >= 62 {
            return max;
        }
        let base = unit << int_part;
        if base > max {
            return max;
        }
        base
    } else if -int_part >= 64 {
        0
    } else {
        unit >> (-int_part)
    };
    // linear correction: 2^f ≈ 1 + f·ln2 over the fractional part
    let corr = (base * ((frac_part * tables::LN2_TABLE[frac_bits as usize]) >> frac_bits))
        >> frac_bits;
    (base + corr).min(max)
}

/// `2^x` for a signed fixed-point value, in the same Q format.
pub fn exp2_fixed(raw: i32, bits: u32, frac_bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    check_frac_bits(frac_bits)?;
    Ok(exp2_fixed_unchecked(raw, bits, frac_bits))
}

pub(crate) fn exp2_fixed_unchecked(raw: i32, bits: u32, frac_bits: u32) -> i32 {
    let max = (1i64 << (bits - 1)) - 1;
    exp2_q(raw as i64, frac_bits, max) as i32
}

/// `2^x` for an unsigned fixed-point value.
pub fn exp2_ufixed(raw: u32, bits: u32, frac_bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    check_frac_bits(frac_bits)?;
    Ok(exp2_ufixed_unchecked(raw, bits, frac_bits))
}

pub(crate) fn exp2_ufixed_unchecked(raw: u32, bits: u32, frac_bits: u32) -> u32 {
    let max = (1i64 << bits) - 1;
    exp2_q(raw as i64, frac_bits, max) as u32
}

/// `e^x` for a signed fixed-point value: multiply by log2 e in the same Q
/// format, then `exp2`.
pub fn exp_fixed(raw: i32, bits: u32, frac_bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    check_frac_bits(frac_bits)?;
    Ok(exp_fixed_unchecked(raw, bits, frac_bits))
}

pub(crate) fn exp_fixed_unchecked(raw: i32, bits: u32, frac_bits: u32) -> i32 {
    let max = (1i64 << (bits - 1)) - 1;
    let scaled = (raw as i128) * (tables::LOG2_E_TABLE[frac_bits as usize] as i128)
        >> frac_bits;
    let scaled = scaled.clamp(i64::MIN as i128, i64::MAX as i128) as i64;
    exp2_q(scaled, frac_bits, max) as i32
}

/// `e^x` for an unsigned fixed-point value.
pub fn exp_ufixed(raw: u32, bits: u32, frac_bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    check_frac_bits(frac_bits)?;
    Ok(exp_ufixed_unchecked(raw, bits, frac_bits))
}

pub(crate) fn exp_ufixed_unchecked(raw: u32, bits: u32, frac_bits: u32) -> u32 {
    let max = (1i64 << bits) - 1;
    let scaled = (raw as i128) * (tables::LOG2_E_TABLE[frac_bits as usize] as i128)
        >> frac_bits;
    let scaled = scaled.clamp(i64::MIN as i128, i64::MAX as i128) as i64;
    exp2_q(scaled, frac_bits, max) as u32
}

/// Shared `log2` over a positive raw value: MSB scan plus the remainder
/// aligned to the fractional-bit count.
fn log2_q(raw: u32, frac_bits: u32) -> i64 {
    let msb = 31 - raw.leading_zeros();
    let aligned = ((raw as i64) << frac_bits) >> msb;
    let frac = aligned - (1i64 << frac_bits);
    (((msb as i64) - frac_bits as i64) << frac_bits) + frac
}

/// `log2(x)` for a signed fixed-point value, in the same Q format;
/// non-positive input returns zero.
pub fn log2_fixed(raw: i32, bits: u32, frac_bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    check_frac_bits(frac_bits)?;
    Ok(log2_fixed_unchecked(raw, bits, frac_bits))
}

pub(crate) fn log2_fixed_unchecked(raw: i32, bits: u32, frac_bits: u32) -> i32 {
    if raw <= 0 {
        return 0;
    }
    let max = (1i64 << (bits - 1)) - 1;
    let min = -(1i64 << (bits - 1));
    log2_q(raw as u32, frac_bits).clamp(min, max) as i32
}

/// `log2(x)` for an unsigned fixed-point value; inputs below one clamp the
/// negative result to zero.
pub fn log2_ufixed(raw: u32, bits: u32, frac_bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    check_frac_bits(frac_bits)?;
    Ok(log2_ufixed_unchecked(raw, bits, frac_bits))
}

pub(crate) fn log2_ufixed_unchecked(raw: u32, bits: u32, frac_bits: u32) -> u32 {
    if raw == 0 {
        return 0;
    }
    let max = (1i64 << bits) - 1;
    log2_q(raw, frac_bits).clamp(0, max) as u32
}
