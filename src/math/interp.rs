//! Linear interpolation and smoothstep.
//!
//! The blend factor is clamped into `[0, 1]` of its Q format before use —
//! out-of-range factors are a defined saturation, not an error — and the
//! widened multiply keeps the full product before shifting back. Integer
//! representations cannot carry a unit fraction, so their variants take
//! the factor in the Q16.16 working format.

use super::error::{check_bits, check_frac_bits, DomainError};
use super::qformat::Q16_ONE;

fn lerp_i64(a: i64, b: i64, t: i64, frac_bits: u32) -> i64 {
    a + (((b - a) * t) >> frac_bits)
}

/// Hermite weight `t²(3 - 2t)` in the given Q format; `t` already clamped.
fn smooth_weight(t: i64, frac_bits: u32) -> i64 {
    let unit = 1i64 << frac_bits;
    let t2 = (t * t) >> frac_bits;
    (t2 * (3 * unit - 2 * t)) >> frac_bits
}

/// Linear interpolation between signed fixed-point values; `t` in the same
/// Q format, clamped to `[0, 1]`.
pub fn lerp_fixed(a: i32, b: i32, t: i32, bits: u32, frac_bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    check_frac_bits(frac_bits)?;
    Ok(lerp_fixed_unchecked(a, b, t, frac_bits))
}

pub(crate) fn lerp_fixed_unchecked(a: i32, b: i32, t: i32, frac_bits: u32) -> i32 {
    let t = (t as i64).clamp(0, 1i64 << frac_bits);
    lerp_i64(a as i64, b as i64, t, frac_bits) as i32
}

/// Smoothstep between signed fixed-point values.
pub fn smoothstep_fixed(
    a: i32,
    b: i32,
    t: i32,
    bits: u32,
    frac_bits: u32,
) -> Result<i32, DomainError> {
    check_bits(bits)?;
    check_frac_bits(frac_bits)?;
    Ok(smoothstep_fixed_unchecked(a, b, t, frac_bits))
}

pub(crate) fn smoothstep_fixed_unchecked(a: i32, b: i32, t: i32, frac_bits: u32) -> i32 {
    let t = (t as i64).clamp(0, 1i64 << frac_bits);
    lerp_i64(a as i64, b as i64, smooth_weight(t, frac_bits), frac_bits) as i32
}

/// Linear interpolation between unsigned fixed-point values.
pub fn lerp_ufixed(a: u32, b: u32, t: u32, bits: u32, frac_bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    check_frac_bits(frac_bits)?;
    Ok(lerp_ufixed_unchecked(a, b, t, frac_bits))
}

pub(crate) fn lerp_ufixed_unchecked(a: u32, b: u32, t: u32, frac_bits: u32) -> u32 {
    let t = (t as i64).min(1i64 << frac_bits);
    lerp_i64(a as i64, b as i64, t, frac_bits) as u32
}

/// Smoothstep between unsigned fixed-point values.
pub fn smoothstep_ufixed(
    a: u32,
    b: u32,
    t: u32,
    bits: u32,
    frac_bits: u32,
) -> Result<u32, DomainError> {
    check_bits(bits)?;
    check_frac_bits(frac_bits)?;
    Ok(smoothstep_ufixed_unchecked(a, b, t, frac_bits))
}

pub(crate) fn smoothstep_ufixed_unchecked(a: u32, b: u32, t: u32, frac_bits: u32) -> u32 {
    let t = (t as i64).min(1i64 << frac_bits);
    lerp_i64(a as i64, b as i64, smooth_weight(t, frac_bits), frac_bits) as u32
}

/// Linear interpolation between signed N-bit integers; `t` is Q16.16.
pub fn lerp_signed(a: i32, b: i32, t: i32, bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    Ok(lerp_signed_unchecked(a, b, t))
}

pub(crate) fn lerp_signed_unchecked(a: i32, b: i32, t: i32) -> i32 {
    let t = (t as i64).clamp(0, Q16_ONE as i64);
    lerp_i64(a as i64, b as i64, t, 16) as i32
}

/// Smoothstep between signed N-bit integers; `t` is Q16.16.
pub fn smoothstep_signed(a: i32, b: i32, t: i32, bits: u32) -> Result<i32, DomainError> {
    check_bits(bits)?;
    Ok(smoothstep_signed_unchecked(a, b, t))
}

pub(crate) fn smoothstep_signed_unchecked(a: i32, b: i32, t: i32) -> i32 {
    let t = (t as i64).clamp(0, Q16_ONE as i64);
    lerp_i64(a as i64, b as i64, smooth_weight(t, 16), 16) as i32
}

/// Linear interpolation between unsigned N-bit integers; `t` is Q16.16.
pub fn lerp_unsigned(a: u32, b: u32, t: i32, bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    Ok(lerp_unsigned_unchecked(a, b, t))
}

pub(crate) fn lerp_unsigned_unchecked(a: u32, b: u32, t: i32) -> u32 {
    let t = (t as i64).clamp(0, Q16_ONE as i64);
    lerp_i64(a as i64, b as i64, t, 16) as u32
}

/// Smoothstep between unsigned N-bit integers; `t` is Q16.16.
pub fn smoothstep_unsigned(a: u32, b: u32, t: i32, bits: u32) -> Result<u32, DomainError> {
    check_bits(bits)?;
    Ok(smoothstep_unsigned_unchecked(a, b, t))
}

pub(crate) fn smoothstep_unsigned_unchecked(a: u32, b: u32, t: i32) -> u32 {
    let t = (t as i64).clamp(0, Q16_ONE as i64);
    lerp_i64(a as i64, b as i64, smooth_weight(t, 16), 16) as u32
}
