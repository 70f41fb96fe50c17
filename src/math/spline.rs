//! Table sampling: the Catmull-Rom primitive and resolution tiers.
//!
//! # Purpose
//!
//! Every LUT consumer in the engine (sine, arctangent, the arcsine tail)
//! estimates between table entries the same way: a four-point Catmull-Rom
//! cubic through the two central samples, with the result clamped back into
//! the range those two samples span so spline overshoot can never break
//! local monotonicity.
//!
//! # Resolution tiers
//!
//! Callers whose angular resolution is at or below the table's own are
//! served without interpolation at all: nearest-neighbor below 7 bits (the
//! coarse-hardware mode), direct indexing up to the table's 12 bits, the
//! spline above that. The classification is an explicit tagged branch so
//! every tier stays a pure function over the same table and can be tested
//! against the same fixture.

use super::qformat::Q16_ONE;
use super::Q16;

/// Table addressing strategy for a given resolution in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// At most 6 bits: nearest-neighbor lookup, no interpolation.
    Nearest,
    /// 7 to 12 bits: exact index lookup.
    Direct,
    /// Above 12 bits: spline interpolation between entries.
    Spline,
}

impl Resolution {
    /// Classify a resolution in bits against the 4096-entry table assets.
    pub fn classify(bits: u32) -> Self {
        if bits <= 6 {
            Resolution::Nearest
        } else if bits <= 12 {
            Resolution::Direct
        } else {
            Resolution::Spline
        }
    }
}

/// Four-point Catmull-Rom cubic through `y1..y2` at `t` in `[0, 1]`.
///
/// All operands are Q16.16. Callers clamp `t` to `[0, 65536]` beforehand;
/// within that contract the evaluation is pure and total.
pub fn catmull_rom(y0: Q16, y1: Q16, y2: Q16, y3: Q16, t: Q16) -> Q16 {
    Q16::from_bits(catmull_rom_raw(
        y0.to_bits(),
        y1.to_bits(),
        y2.to_bits(),
        y3.to_bits(),
        t.to_bits(),
    ))
}

pub(crate) fn catmull_rom_raw(y0: i32, y1: i32, y2: i32, y3: i32, t: i32) -> i32 {
    debug_assert!((0..=Q16_ONE).contains(&t));
    let (y0, y1, y2, y3) = (y0 as i64, y1 as i64, y2 as i64, y3 as i64);
    let t = t as i64;

    // Closed-form coefficients; tangents estimated from the neighbors.
    let a = (-y0 + 3 * y1 - 3 * y2 + y3) / 2;
    let b = (2 * y0 - 5 * y1 + 4 * y2 - y3) / 2;
    let c = (y2 - y0) / 2;
    let d = y1;

    // Widened intermediates keep t^3 products inside i64 before the shift.
    let t2 = (t * t) >> 16;
    let t3 = (t2 * t) >> 16;
    (((a * t3 + b * t2 + c * t) >> 16) + d) as i32
}

/// Clamp an interpolated value into the span of its two central samples.
pub(crate) fn monotone_clamp(v: i32, p1: i32, p2: i32) -> i32 {
    v.clamp(p1.min(p2), p1.max(p2))
}

/// Spline-sample a table through its `entry` accessor at `idx + t/65536`.
///
/// `t == 0` is an exact hit and reads the entry directly; otherwise the
/// four neighbors feed the Catmull-Rom cubic and the result is clamped to
/// the central cell.
pub(crate) fn sample<F: Fn(i32) -> i32>(entry: F, idx: i32, t: i32) -> i32 {
    if t == 0 {
        return entry(idx);
    }
    let y0 = entry(idx - 1);
    let y1 = entry(idx);
    let y2 = entry(idx + 1);
    let y3 = entry(idx + 2);
    monotone_clamp(catmull_rom_raw(y0, y1, y2, y3, t), y1, y2)
}
