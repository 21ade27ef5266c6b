//! Terminal formatting for reports and lists
//!
//! Every formatter takes the currency symbol from settings and returns a
//! `String`; printing is left to the CLI.

pub mod calendar;
pub mod category;
pub mod dashboard;
pub mod meal;
pub mod report;
pub mod semester;
pub mod transaction;
pub mod trends;

pub use calendar::format_calendar;
pub use category::{format_category_table, format_preset_list};
pub use dashboard::format_dashboard;
pub use meal::format_meal_log_list;
pub use semester::{format_semester_details, format_semester_list};
pub use transaction::format_transaction_register;
pub use trends::format_trends_table;
