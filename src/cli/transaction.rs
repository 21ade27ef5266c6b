//! Expense and transaction CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_transaction_register;
use crate::error::{MealPlanError, MealPlanResult};
use crate::services::{CategoryService, NewExpense, SemesterService, TransactionService};
use crate::storage::Storage;

use super::{parse_amount, parse_date_or_today};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense against a budget category
    Add {
        /// Category name or ID
        category: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// Description, defaults to the category name
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// List the active semester's transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> MealPlanResult<()> {
    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            description,
            date,
        } => {
            let semester = SemesterService::new(storage).require_active()?;
            let found = CategoryService::new(storage)
                .find(semester.id, &category)?
                .ok_or_else(|| MealPlanError::category_not_found(&category))?;

            let txn = TransactionService::new(storage).record_expense(NewExpense {
                category_id: found.id,
                amount: parse_amount(&amount)?,
                description: description.unwrap_or_default(),
                date: parse_date_or_today(date.as_deref())?,
            })?;

            println!(
                "Recorded {} in {}: {}",
                txn.amount.format_with_symbol(&settings.currency_symbol),
                found.name,
                txn.description
            );
            println!("  ID: {}", txn.id);
        }
    }

    Ok(())
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> MealPlanResult<()> {
    match cmd {
        TransactionCommands::List { limit } => {
            let semester = SemesterService::new(storage).require_active()?;
            let service = TransactionService::new(storage);
            let transactions = match limit {
                Some(limit) => service.recent(semester.id, limit)?,
                None => service.list(semester.id)?,
            };
            print!(
                "{}",
                format_transaction_register(&transactions, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
