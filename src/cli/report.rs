//! Dashboard, calendar and trends CLI commands

use chrono::Datelike;

use crate::config::settings::Settings;
use crate::display::{format_calendar, format_dashboard, format_trends_table};
use crate::error::{MealPlanError, MealPlanResult};
use crate::reports::{CalendarMonth, Dashboard, SpendingTrends};
use crate::services::{MealLogService, SemesterService, TransactionService};
use crate::storage::Storage;

use super::parse_date_or_today;

/// Show the active semester's dashboard
///
/// `as_of` replaces today's date for the day counts and daily rates.
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    as_of: Option<String>,
    json: bool,
) -> MealPlanResult<()> {
    let today = parse_date_or_today(as_of.as_deref())?;
    let dashboard = Dashboard::build(storage, today, settings.recent_transactions_limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!("{}", format_dashboard(&dashboard, &settings.currency_symbol));
    }

    Ok(())
}

/// Show a month of spending and meals for the active semester
///
/// `month` is `YYYY-MM`; it defaults to the month containing `as_of`.
pub fn handle_calendar_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
    as_of: Option<String>,
) -> MealPlanResult<()> {
    let today = parse_date_or_today(as_of.as_deref())?;
    let (year, month) = match month {
        Some(month) => parse_month(&month)?,
        None => (today.year(), today.month()),
    };

    let semester = SemesterService::new(storage).require_active()?;
    let transactions = TransactionService::new(storage).list(semester.id)?;
    let meal_logs = MealLogService::new(storage).list(semester.id)?;

    let calendar = CalendarMonth::build(year, month, &transactions, &meal_logs)?;
    print!(
        "{}",
        format_calendar(&calendar, Some(today), &settings.currency_symbol)
    );

    Ok(())
}

/// Show the active semester's usage week by week
pub fn handle_trends_command(
    storage: &Storage,
    settings: &Settings,
    as_of: Option<String>,
    json: bool,
) -> MealPlanResult<()> {
    let today = parse_date_or_today(as_of.as_deref())?;
    let semester = SemesterService::new(storage).require_active()?;
    let meal_logs = MealLogService::new(storage).list(semester.id)?;

    let trends = SpendingTrends::build(&semester, &meal_logs, today);
    if json {
        println!("{}", serde_json::to_string_pretty(&trends)?);
    } else {
        print!("{}", format_trends_table(&trends, &settings.currency_symbol));
    }

    Ok(())
}

fn parse_month(value: &str) -> MealPlanResult<(i32, u32)> {
    let invalid = || {
        MealPlanError::Validation(format!("Invalid month: '{}'. Use YYYY-MM", value))
    };

    let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
    let year = year.parse().map_err(|_| invalid())?;
    let month = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok((year, month))
}
