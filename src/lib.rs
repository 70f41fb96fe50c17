//! Deterministic fixed-point transcendental math for lockstep simulation.
//!
//! Sine through smoothstep over compile-time-sized integer and fixed-point
//! scales, evaluated from fixed Q16.16 lookup tables with no floating
//! point at runtime — the same inputs produce the same raw outputs on
//! every platform, which is what lockstep networking and deterministic
//! replay need.

pub mod math;

// ============================================================================
// Test Support Macros
// ============================================================================

/// Assert two raw tick/amplitude values agree within a tolerance.
///
/// Table-driven results are specified to land within a tick or two of the
/// ideal value; this keeps that tolerance explicit at every assertion
/// site. With the tolerance omitted it degenerates to exact equality.
///
/// # Example
/// ```
/// kestrel::assert_ticks_eq!(127, 126, 1);
/// ```
#[macro_export]
macro_rules! assert_ticks_eq {
    ($a:expr, $b:expr, $tol:expr) => {{
        let (a, b) = (($a) as i64, ($b) as i64);
        let tol = ($tol) as i64;
        assert!(
            (a - b).abs() <= tol,
            "expected {} within {} of {}, difference is {}",
            a,
            tol,
            b,
            (a - b).abs()
        );
    }};
    ($a:expr, $b:expr) => {
        $crate::assert_ticks_eq!($a, $b, 0)
    };
}
