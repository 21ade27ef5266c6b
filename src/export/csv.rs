//! CSV export of transactions and meal logs

use std::collections::HashMap;
use std::io::Write;

use serde::Serialize;

use crate::error::{MealPlanError, MealPlanResult};
use crate::models::{BudgetCategory, MealLog, Transaction};

#[derive(Serialize)]
struct TransactionRecord<'a> {
    id: String,
    date: String,
    kind: &'static str,
    category: &'a str,
    description: &'a str,
    amount: String,
}

#[derive(Serialize)]
struct MealLogRecord {
    id: String,
    date: String,
    meal_type: String,
    payment_method: &'static str,
    amount: String,
}

fn export_err(e: csv::Error) -> MealPlanError {
    MealPlanError::Export(e.to_string())
}

/// Write transactions as CSV with category names resolved
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    categories: &[BudgetCategory],
    writer: W,
) -> MealPlanResult<()> {
    let names: HashMap<_, _> = categories.iter().map(|c| (c.id, c.name.as_str())).collect();
    let mut csv_writer = csv::Writer::from_writer(writer);

    for txn in transactions {
        let category = txn
            .category_id
            .and_then(|id| names.get(&id).copied())
            .unwrap_or("");

        csv_writer
            .serialize(TransactionRecord {
                id: txn.id.as_uuid().to_string(),
                date: txn.date.format("%Y-%m-%d").to_string(),
                kind: if txn.is_expense() { "expense" } else { "meal" },
                category,
                description: &txn.description,
                amount: format!("{:.2}", txn.amount.as_f64()),
            })
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| MealPlanError::Export(e.to_string()))
}

/// Write meal logs as CSV; count-based meals leave the amount empty
pub fn export_meal_logs_csv<W: Write>(logs: &[MealLog], writer: W) -> MealPlanResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for log in logs {
        csv_writer
            .serialize(MealLogRecord {
                id: log.id.as_uuid().to_string(),
                date: log.date.format("%Y-%m-%d").to_string(),
                meal_type: log.meal_type.to_string().to_lowercase(),
                payment_method: log.payment_method.as_str(),
                amount: log
                    .amount
                    .map(|a| format!("{:.2}", a.as_f64()))
                    .unwrap_or_default(),
            })
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| MealPlanError::Export(e.to_string()))
}
