//! CLI command handlers
//!
//! This module bridges clap argument parsing with the service layer. Every
//! handler borrows the open [`Storage`](crate::storage::Storage) and reads
//! display preferences from [`Settings`](crate::config::settings::Settings).

pub mod category;
pub mod export;
pub mod init;
pub mod meal;
pub mod report;
pub mod semester;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use init::handle_init_command;
pub use meal::{handle_meal_command, MealCommands};
pub use report::{handle_calendar_command, handle_dashboard_command, handle_trends_command};
pub use semester::{handle_semester_command, SemesterCommands};
pub use transaction::{
    handle_expense_command, handle_transaction_command, ExpenseCommands, TransactionCommands,
};

use chrono::NaiveDate;

use crate::error::{MealPlanError, MealPlanResult};
use crate::models::Money;

/// Parse a `YYYY-MM-DD` date
pub(crate) fn parse_date(date_str: &str) -> MealPlanResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        MealPlanError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            date_str
        ))
    })
}

/// Parse a date string or return today's date
pub(crate) fn parse_date_or_today(date_str: Option<&str>) -> MealPlanResult<NaiveDate> {
    match date_str {
        Some(date_str) => parse_date(date_str),
        None => Ok(today()),
    }
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse an amount such as "12.50" or "$12.50"
pub(crate) fn parse_amount(amount: &str) -> MealPlanResult<Money> {
    Money::parse(amount)
        .map_err(|e| MealPlanError::Validation(format!("Invalid amount '{}': {}", amount, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-09-01").unwrap(), NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert!(parse_date("09/01/2025").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$12.50").unwrap(), Money::from_cents(1250));
        assert!(parse_amount("twelve").unwrap_err().is_validation());
    }
}
