//! Domain-contract errors.

use thiserror::Error;
use tracing::warn;

/// An unsupported bit-width or fractional-bit configuration.
///
/// This is a programming-contract violation, not a data error: the same
/// parameters fail the same way on every platform and retrying cannot
/// succeed. Extreme *values* within a valid configuration never produce
/// this; those saturate or clamp per the function's documented policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{parameter} = {value} is outside the supported range {min}..={max}")]
pub struct DomainError {
    /// Name of the offending parameter.
    pub parameter: &'static str,
    /// The rejected value.
    pub value: u32,
    /// Inclusive lower bound.
    pub min: u32,
    /// Inclusive upper bound.
    pub max: u32,
}

/// Validate a width/fractional-bit parameter against its inclusive range.
pub(crate) fn check_range(
    parameter: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<(), DomainError> {
    if value < min || value > max {
        warn!("{}: {} out of range {}..={}", parameter, value, min, max);
        return Err(DomainError {
            parameter,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Validate an angle/integer bit width.
pub(crate) fn check_bits(bits: u32) -> Result<(), DomainError> {
    check_range("bits", bits, 2, 31)
}

/// Validate a fractional-bit count.
pub(crate) fn check_frac_bits(frac_bits: u32) -> Result<(), DomainError> {
    check_range("frac_bits", frac_bits, 0, 31)
}
