//! Deterministic fixed-point math engine.
//!
//! # Purpose
//!
//! Table-driven transcendental functions over arbitrary-width integer and
//! fixed-point scales, producing bit-identical results on every platform.
//! No floating point executes at runtime; every intermediate is an
//! integer, every division rounds explicitly, and every out-of-range
//! result saturates to a defined value instead of overflowing.
//!
//! # Architecture
//!
//! [`qformat`] and [`spline`] are shared leaves: scale conversions with
//! explicit rounding, and the Catmull-Rom sampler with its anti-overshoot
//! clamp and resolution tiers. [`tables`] holds the compile-time-generated
//! sample and constant assets. On top sit the engines — [`trig`],
//! [`arcsin`], [`arctan`], [`sqrt`], [`explog`], [`interp`] — each
//! exposing runtime-parameterized functions that validate their width
//! arguments, plus unchecked kernels for the const-generic value types in
//! [`value`], where validation happened at compile time.
//!
//! Everything is pure and reentrant; the tables are immutable statics,
//! complete before any call.

pub mod arcsin;
pub mod arctan;
pub mod error;
pub mod explog;
pub mod interp;
pub mod qformat;
pub mod spline;
pub mod sqrt;
pub mod tables;
pub mod trig;
pub mod value;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use value::{Fix, Int, UFix, UInt};

/// The engine's universal working format: 16 integer bits, 16 fractional.
///
/// Every lookup table is authored at this resolution regardless of the
/// caller's width, so all internal angle and ratio math normalizes here
/// before table work and rescales on the way out.
pub type Q16 = fixed::types::I16F16;
