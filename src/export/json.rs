//! JSON export of a semester with schema versioning

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{MealPlanError, MealPlanResult};
use crate::models::{BudgetCategory, MealLog, Semester, SemesterId, Transaction};
use crate::storage::DataStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything recorded for one semester
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Version of the tool that wrote the export
    pub app_version: String,

    pub semester: Semester,

    pub categories: Vec<BudgetCategory>,

    pub transactions: Vec<Transaction>,

    pub meal_logs: Vec<MealLog>,

    pub metadata: ExportMetadata,
}

/// Counts and date range for quick inspection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub category_count: usize,

    pub transaction_count: usize,

    pub meal_log_count: usize,

    pub earliest_transaction: Option<String>,

    pub latest_transaction: Option<String>,
}

impl SemesterExport {
    /// Collect a semester and everything that belongs to it
    pub fn from_store(store: &dyn DataStore, semester_id: SemesterId) -> MealPlanResult<Self> {
        let semester = store
            .semester(semester_id)?
            .ok_or_else(|| MealPlanError::semester_not_found(semester_id.to_string()))?;
        let categories = store.budget_categories(semester_id)?;
        let transactions = store.transactions(semester_id)?;
        let meal_logs = store.meal_logs(semester_id)?;

        let metadata = ExportMetadata {
            category_count: categories.len(),
            transaction_count: transactions.len(),
            meal_log_count: meal_logs.len(),
            earliest_transaction: transactions.iter().map(|t| t.date).min().map(|d| d.to_string()),
            latest_transaction: transactions.iter().map(|t| t.date).max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            semester,
            categories,
            transactions,
            meal_logs,
            metadata,
        })
    }
}

/// Write a semester export as JSON
pub fn export_full_json<W: Write>(
    store: &dyn DataStore,
    semester_id: SemesterId,
    writer: &mut W,
    pretty: bool,
) -> MealPlanResult<()> {
    let export = SemesterExport::from_store(store, semester_id)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| MealPlanError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealType, PaymentMethod};
    use crate::services::test_support::{active_semester, create_test_storage, date};
    use crate::services::{MealLogService, NewMealLog};

    #[test]
    fn test_export_contains_semester_data() {
        let (_temp_dir, storage) = create_test_storage();
        let semester = active_semester(&storage);
        MealLogService::new(&storage)
            .log(NewMealLog {
                date: date(2025, 9, 1),
                meal_type: MealType::Breakfast,
                payment_method: PaymentMethod::MealSwipe,
                amount: None,
            })
            .unwrap();

        let mut buffer = Vec::new();
        export_full_json(&storage, semester.id, &mut buffer, true).unwrap();

        let parsed: SemesterExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.semester.id, semester.id);
        assert_eq!(parsed.metadata.meal_log_count, 1);
        assert_eq!(parsed.metadata.transaction_count, 1);
        assert_eq!(parsed.metadata.earliest_transaction.as_deref(), Some("2025-09-01"));
    }

    #[test]
    fn test_unknown_semester() {
        let (_temp_dir, storage) = create_test_storage();
        let mut buffer = Vec::new();
        let err = export_full_json(&storage, SemesterId::new(), &mut buffer, false).unwrap_err();
        assert!(err.is_not_found());
    }
}
