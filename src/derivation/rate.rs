//! Per-day allowance derivation

/// Per-day allowance that exhausts `balance` exactly at the end date
///
/// Returns 0 when no days remain (or the count is negative).
///
/// ```
/// use mealplan_cli::derivation::daily_rate;
/// assert_eq!(daily_rate(40.0, 20), 2.0);
/// assert_eq!(daily_rate(40.0, 0), 0.0);
/// ```
pub fn daily_rate(balance: f64, days_remaining: i64) -> f64 {
    if days_remaining > 0 {
        balance / days_remaining as f64
    } else {
        0.0
    }
}
