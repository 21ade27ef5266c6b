//! Reports
//!
//! Read-only snapshots assembled from the data store and the derivation
//! functions. They are rebuilt from storage every time they are shown, so a
//! write is always reflected in the next report.

pub mod calendar;
pub mod dashboard;
pub mod trends;

pub use calendar::{CalendarDay, CalendarMonth};
pub use dashboard::{CategoryProgress, Dashboard, ResourceSummary};
pub use trends::{SpendingTrends, WeeklyUsage};
