//! crates/finmate_core/src/progress.rs
//!
//! Goal progress as a raw percentage.

/// Returns `current / target * 100`.
///
/// The result is not clamped: an over-funded goal reports more than 100 and a
/// negative balance reports less than 0. A zero target follows IEEE-754 and
/// yields an infinity or NaN; `Goal::new` keeps such targets out of the views.
pub fn compute_progress(current: f64, target: f64) -> f64 {
    current / target * 100.0
}
