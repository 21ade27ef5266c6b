//! Balance and budget derivations
//!
//! Pure functions that turn stored semester and category records into the
//! figures every display surface shows: days left, per-day allowances,
//! consumption percentages with their tier, and budget totals.
//!
//! Nothing here touches storage or fails; zero and negative denominators
//! yield zero instead of dividing.

pub mod aggregate;
pub mod progress;
pub mod rate;
pub mod temporal;

pub use aggregate::BudgetTotals;
pub use progress::{
    clamp_for_display, consumption, is_over_budget, percentage, ProgressStatus, Tier,
};
pub use rate::daily_rate;
pub use temporal::{days_between, SemesterTimeline};
