//! Transaction service
//!
//! Records budget expenses. Meal transactions are written by the meal log
//! service alongside the meal itself.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::audit::{AuditEntry, EntityType};
use crate::error::{MealPlanError, MealPlanResult};
use crate::models::{BudgetCategoryId, Money, SemesterId, Transaction};
use crate::storage::DataStore;

/// Input for recording an expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub category_id: BudgetCategoryId,
    pub amount: Money,
    /// Defaults to the category name when blank
    pub description: String,
    pub date: NaiveDate,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a dyn DataStore,
}

impl<'a> TransactionService<'a> {
    pub fn new(store: &'a dyn DataStore) -> Self {
        Self { store }
    }

    /// Record an expense against a category of the active semester
    ///
    /// The category's spent amount grows by the expense; going over the
    /// allocation is allowed and shows up as over budget.
    pub fn record_expense(&self, input: NewExpense) -> MealPlanResult<Transaction> {
        if !input.amount.is_positive() {
            warn!("rejected expense with non-positive amount {}", input.amount);
            return Err(MealPlanError::Validation(
                "Expense amount must be greater than zero".into(),
            ));
        }
        if input.amount > Money::MAX {
            warn!("rejected expense of {}", input.amount);
            return Err(MealPlanError::Validation(format!(
                "Expense amount cannot exceed {}",
                Money::MAX
            )));
        }

        let semester = self
            .store
            .active_semester()?
            .ok_or(MealPlanError::NoActiveSemester)?;

        let category = self
            .store
            .budget_category(input.category_id)?
            .filter(|c| c.semester_id == semester.id)
            .ok_or_else(|| MealPlanError::category_not_found(input.category_id.to_string()))?;

        let description = match input.description.trim() {
            "" => category.name.clone(),
            text => text.to_string(),
        };

        let transaction = Transaction::expense(
            semester.id,
            category.id,
            input.amount,
            description,
            input.date,
        );

        let before = category.clone();
        let mut category = category;
        if let Err(e) = category.record_spending(input.amount) {
            warn!("rejected expense in `{}`: {}", category.name, e);
            return Err(MealPlanError::Validation(e.to_string()));
        }

        // The spent total only moves once the transaction is stored
        self.store.insert_transaction(transaction.clone())?;
        self.store.update_budget_category(category.clone())?;

        self.store.record(&AuditEntry::update(
            EntityType::BudgetCategory,
            category.id.to_string(),
            Some(category.name.clone()),
            &before,
            &category,
        ))?;
        self.store.record(&AuditEntry::create(
            EntityType::Transaction,
            transaction.id.to_string(),
            Some(transaction.description.clone()),
            &transaction,
        ))?;

        info!(
            "recorded {} expense in `{}` ({} of {} spent)",
            transaction.amount, category.name, category.spent_amount, category.allocated_amount
        );
        Ok(transaction)
    }

    /// A semester's transactions, newest first
    pub fn list(&self, semester_id: SemesterId) -> MealPlanResult<Vec<Transaction>> {
        self.store.transactions(semester_id)
    }

    /// The `limit` newest transactions of a semester
    pub fn recent(&self, semester_id: SemesterId, limit: usize) -> MealPlanResult<Vec<Transaction>> {
        self.store.recent_transactions(semester_id, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use crate::services::category::{CategoryService, NewBudgetCategory};
    use crate::services::test_support::{
        active_semester, create_test_storage, date, FailOn, FailingStore,
    };
    use crate::storage::Storage;

    fn groceries(storage: &Storage, semester_id: SemesterId) -> BudgetCategoryId {
        CategoryService::new(storage)
            .create(NewBudgetCategory {
                semester_id,
                name: "Groceries".into(),
                allocated_amount: Money::from_cents(10000),
                icon: None,
                color: None,
            })
            .unwrap()
            .id
    }

    fn expense(category_id: BudgetCategoryId, cents: i64, day: u32) -> NewExpense {
        NewExpense {
            category_id,
            amount: Money::from_cents(cents),
            description: String::new(),
            date: date(2025, 9, day),
        }
    }

    #[test]
    fn test_expense_increments_category() {
        let (_temp_dir, storage) = create_test_storage();
        let semester = active_semester(&storage);
        let category_id = groceries(&storage, semester.id);
        let service = TransactionService::new(&storage);

        let txn = service.record_expense(expense(category_id, 4550, 3)).unwrap();

        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.description, "Groceries");
        let category = storage.budget_category(category_id).unwrap().unwrap();
        assert_eq!(category.spent_amount, Money::from_cents(4550));
        assert_eq!(service.list(semester.id).unwrap().len(), 1);
    }

    #[test]
    fn test_over_budget_allowed() {
        let (_temp_dir, storage) = create_test_storage();
        let semester = active_semester(&storage);
        let category_id = groceries(&storage, semester.id);
        let service = TransactionService::new(&storage);

        service.record_expense(expense(category_id, 8000, 3)).unwrap();
        service.record_expense(expense(category_id, 4000, 4)).unwrap();

        let category = storage.budget_category(category_id).unwrap().unwrap();
        assert_eq!(category.remaining(), Money::from_cents(-2000));
    }

    #[test]
    fn test_rejections_leave_state_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let semester = active_semester(&storage);
        let category_id = groceries(&storage, semester.id);
        let service = TransactionService::new(&storage);

        assert!(service.record_expense(expense(category_id, 0, 3)).unwrap_err().is_validation());
        assert!(service
            .record_expense(expense(BudgetCategoryId::new(), 100, 3))
            .unwrap_err()
            .is_not_found());

        assert!(service.list(semester.id).unwrap().is_empty());
        let category = storage.budget_category(category_id).unwrap().unwrap();
        assert!(category.spent_amount.is_zero());
    }

    #[test]
    fn test_spent_total_cannot_overflow() {
        let (_temp_dir, storage) = create_test_storage();
        let semester = active_semester(&storage);
        let category_id = groceries(&storage, semester.id);
        let service = TransactionService::new(&storage);

        let too_big = NewExpense {
            amount: Money::from_cents(i64::MAX / 2 + 1),
            ..expense(category_id, 0, 3)
        };
        assert!(service.record_expense(too_big).unwrap_err().is_validation());

        service.record_expense(expense(category_id, Money::MAX.cents(), 3)).unwrap();
        let err = service.record_expense(expense(category_id, Money::MAX.cents(), 4)).unwrap_err();
        assert!(err.is_validation());

        let category = storage.budget_category(category_id).unwrap().unwrap();
        assert_eq!(category.spent_amount, Money::MAX);
        assert!(category.validate().is_ok());
        assert_eq!(service.list(semester.id).unwrap().len(), 1);
    }

    #[test]
    fn test_failed_insert_keeps_spent_total() {
        let (_temp_dir, storage) = create_test_storage();
        let semester = active_semester(&storage);
        let category_id = groceries(&storage, semester.id);
        let store = FailingStore::new(&storage, FailOn::InsertTransaction);

        let err = TransactionService::new(&store)
            .record_expense(expense(category_id, 2500, 3))
            .unwrap_err();
        assert!(matches!(err, MealPlanError::Storage(_)));

        let category = storage.budget_category(category_id).unwrap().unwrap();
        assert!(category.spent_amount.is_zero());
        assert!(storage.transactions(semester.id).unwrap().is_empty());
    }

    #[test]
    fn test_requires_active_semester() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let err = service
            .record_expense(expense(BudgetCategoryId::new(), 100, 3))
            .unwrap_err();
        assert!(matches!(err, MealPlanError::NoActiveSemester));
    }

    #[test]
    fn test_recent_limit() {
        let (_temp_dir, storage) = create_test_storage();
        let semester = active_semester(&storage);
        let category_id = groceries(&storage, semester.id);
        let service = TransactionService::new(&storage);

        for day in 1..=7 {
            service.record_expense(expense(category_id, 100, day)).unwrap();
        }

        let recent = service.recent(semester.id, 5).unwrap();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].date, date(2025, 9, 7));
        assert_eq!(recent[4].date, date(2025, 9, 3));
    }
}
