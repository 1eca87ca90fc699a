//! Interview score aggregation for the pipeline board.
//!
//! Scores are nullable in storage: `None` means the interview has not been
//! scored yet and is excluded from the aggregate, while `Some(0)` is a real
//! score and counts toward it.

/// Number of decimal places kept on aggregated scores.
pub const SCORE_DECIMAL_PLACES: i32 = 2;

/// Round to [`SCORE_DECIMAL_PLACES`], half away from zero.
pub fn round_score(value: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMAL_PLACES);
    (value * factor).round() / factor
}

/// Arithmetic mean of the scored interviews, rounded to two decimals.
///
/// Returns `None` when no interview carries a score.
pub fn average_score<I>(scores: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<i32>>,
{
    let (sum, count) = scores
        .into_iter()
        .flatten()
        .fold((0i64, 0u32), |(sum, count), score| {
            (sum + i64::from(score), count + 1)
        });

    if count == 0 {
        return None;
    }

    Some(round_score(sum as f64 / f64::from(count)))
}
