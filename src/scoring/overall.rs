//! Overall score reduction.

use super::LiteracyScores;

/// Equal-weighted mean of the five axes, rounded half up to an integer.
///
/// Total: any input maps into `0..=100`.
#[must_use]
pub fn overall_score(scores: &LiteracyScores) -> u8 {
    let axes = scores.axes();
    #[allow(clippy::cast_precision_loss)]
    let mean = axes.iter().sum::<f64>() / axes.len() as f64;
    round_score(mean)
}

/// Round half up and clamp to `0..=100`.
///
/// Non-finite input maps to 0.
#[must_use]
pub fn round_score(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    // clamped before the cast, so it cannot truncate
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = (value + 0.5).floor().clamp(0.0, 100.0) as u8;
    rounded
}
