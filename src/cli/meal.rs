//! Meal logging CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_meal_log_list;
use crate::display::report::format_quantity;
use crate::error::{MealPlanError, MealPlanResult};
use crate::models::{MealType, PaymentMethod};
use crate::services::{MealLogService, NewMealLog, SemesterService};
use crate::storage::Storage;

use super::{parse_amount, parse_date_or_today};

/// Meal subcommands
#[derive(Subcommand)]
pub enum MealCommands {
    /// Log a meal and deduct it from the matching balance
    Log {
        /// breakfast, lunch, dinner or snack
        meal_type: String,
        /// meal-swipe, meal-exchange, dining-dollars or debit-card
        #[arg(short, long, default_value = "meal-swipe")]
        payment: String,
        /// Amount spent; required for dining dollars and debit card
        #[arg(short, long)]
        amount: Option<String>,
        /// Meal date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List logged meals, newest first
    List,
}

/// Handle a meal command
pub fn handle_meal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: MealCommands,
) -> MealPlanResult<()> {
    let service = MealLogService::new(storage);

    match cmd {
        MealCommands::Log {
            meal_type,
            payment,
            amount,
            date,
        } => {
            let meal_type: MealType = meal_type.parse().map_err(MealPlanError::Validation)?;
            let payment_method: PaymentMethod =
                payment.parse().map_err(MealPlanError::Validation)?;
            let amount = amount.as_deref().map(parse_amount).transpose()?;

            let log = service.log(NewMealLog {
                date: parse_date_or_today(date.as_deref())?,
                meal_type,
                payment_method,
                amount,
            })?;

            let semester = SemesterService::new(storage).require_active()?;
            let resource = payment_method.resource();
            println!(
                "Logged {} on {}",
                log.describe(),
                log.date.format(&settings.date_format)
            );
            println!(
                "  {} left: {}",
                resource,
                format_quantity(
                    resource,
                    semester.current.get(resource),
                    &settings.currency_symbol
                )
            );
        }

        MealCommands::List => {
            let semester = SemesterService::new(storage).require_active()?;
            print!(
                "{}",
                format_meal_log_list(&service.list(semester.id)?, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
