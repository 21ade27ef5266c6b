//! Storage layer
//!
//! Services talk to persistence through the [`DataStore`] trait. The
//! [`Storage`] implementation keeps one JSON file per entity under the data
//! directory, holds the tables in memory behind `RwLock`s and rewrites a
//! file atomically after every insert or update.

pub mod categories;
pub mod file_io;
pub mod meal_logs;
pub mod semesters;
pub mod transactions;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use meal_logs::MealLogRepository;
pub use semesters::SemesterRepository;
pub use transactions::TransactionRepository;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::MealPlanPaths;
use crate::error::{MealPlanError, MealPlanResult};
use crate::models::{
    BudgetCategory, BudgetCategoryId, MealLog, Semester, SemesterId, Transaction,
};

pub(crate) fn poisoned<E: std::fmt::Display>(e: E) -> MealPlanError {
    MealPlanError::Storage(format!("Lock poisoned: {}", e))
}

/// Data access used by services and reports
///
/// Reads return owned snapshots; writes are visible to every later read.
pub trait DataStore {
    fn active_semester(&self) -> MealPlanResult<Option<Semester>>;

    fn semester(&self, id: SemesterId) -> MealPlanResult<Option<Semester>>;

    /// Every semester, newest first
    fn semesters(&self) -> MealPlanResult<Vec<Semester>>;

    /// Store a new semester; it becomes the only active one if flagged active
    fn insert_semester(&self, semester: Semester) -> MealPlanResult<()>;

    fn update_semester(&self, semester: Semester) -> MealPlanResult<()>;

    fn budget_categories(&self, semester_id: SemesterId) -> MealPlanResult<Vec<BudgetCategory>>;

    fn budget_category(&self, id: BudgetCategoryId) -> MealPlanResult<Option<BudgetCategory>>;

    fn budget_category_by_name(
        &self,
        semester_id: SemesterId,
        name: &str,
    ) -> MealPlanResult<Option<BudgetCategory>>;

    fn insert_budget_category(&self, category: BudgetCategory) -> MealPlanResult<()>;

    fn update_budget_category(&self, category: BudgetCategory) -> MealPlanResult<()>;

    /// Remove a category; its transactions are kept
    fn delete_budget_category(&self, id: BudgetCategoryId) -> MealPlanResult<()>;

    /// A semester's transactions, newest date first
    fn transactions(&self, semester_id: SemesterId) -> MealPlanResult<Vec<Transaction>>;

    fn recent_transactions(
        &self,
        semester_id: SemesterId,
        limit: usize,
    ) -> MealPlanResult<Vec<Transaction>> {
        let mut transactions = self.transactions(semester_id)?;
        transactions.truncate(limit);
        Ok(transactions)
    }

    fn insert_transaction(&self, transaction: Transaction) -> MealPlanResult<()>;

    /// A semester's meal logs, newest date first
    fn meal_logs(&self, semester_id: SemesterId) -> MealPlanResult<Vec<MealLog>>;

    fn insert_meal_log(&self, log: MealLog) -> MealPlanResult<()>;

    /// Append an audit entry; stores without an audit trail ignore it
    fn record(&self, _entry: &AuditEntry) -> MealPlanResult<()> {
        Ok(())
    }
}

/// JSON-file backed store
pub struct Storage {
    paths: MealPlanPaths,
    pub semesters: SemesterRepository,
    pub categories: CategoryRepository,
    pub transactions: TransactionRepository,
    pub meal_logs: MealLogRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a store over the given paths without loading anything
    pub fn new(paths: MealPlanPaths) -> Result<Self, MealPlanError> {
        paths.ensure_directories()?;

        Ok(Self {
            semesters: SemesterRepository::new(paths.semesters_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            meal_logs: MealLogRepository::new(paths.meal_logs_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Create a store and load every table from disk
    pub fn open(paths: MealPlanPaths) -> Result<Self, MealPlanError> {
        let storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    pub fn paths(&self) -> &MealPlanPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), MealPlanError> {
        self.semesters.load()?;
        self.categories.load()?;
        self.transactions.load()?;
        self.meal_logs.load()?;
        Ok(())
    }
}

impl DataStore for Storage {
    fn active_semester(&self) -> MealPlanResult<Option<Semester>> {
        self.semesters.get_active()
    }

    fn semester(&self, id: SemesterId) -> MealPlanResult<Option<Semester>> {
        self.semesters.get(id)
    }

    fn semesters(&self) -> MealPlanResult<Vec<Semester>> {
        self.semesters.get_all()
    }

    fn insert_semester(&self, semester: Semester) -> MealPlanResult<()> {
        self.semesters.insert(semester)?;
        self.semesters.save()
    }

    fn update_semester(&self, semester: Semester) -> MealPlanResult<()> {
        self.semesters.update(semester)?;
        self.semesters.save()
    }

    fn budget_categories(&self, semester_id: SemesterId) -> MealPlanResult<Vec<BudgetCategory>> {
        self.categories.get_by_semester(semester_id)
    }

    fn budget_category(&self, id: BudgetCategoryId) -> MealPlanResult<Option<BudgetCategory>> {
        self.categories.get(id)
    }

    fn budget_category_by_name(
        &self,
        semester_id: SemesterId,
        name: &str,
    ) -> MealPlanResult<Option<BudgetCategory>> {
        self.categories.get_by_name(semester_id, name)
    }

    fn insert_budget_category(&self, category: BudgetCategory) -> MealPlanResult<()> {
        self.categories.insert(category)?;
        self.categories.save()
    }

    fn update_budget_category(&self, category: BudgetCategory) -> MealPlanResult<()> {
        self.categories.update(category)?;
        self.categories.save()
    }

    fn delete_budget_category(&self, id: BudgetCategoryId) -> MealPlanResult<()> {
        if !self.categories.delete(id)? {
            return Err(MealPlanError::category_not_found(id.to_string()));
        }
        self.categories.save()
    }

    fn transactions(&self, semester_id: SemesterId) -> MealPlanResult<Vec<Transaction>> {
        self.transactions.get_by_semester(semester_id)
    }

    fn recent_transactions(
        &self,
        semester_id: SemesterId,
        limit: usize,
    ) -> MealPlanResult<Vec<Transaction>> {
        self.transactions.get_recent(semester_id, limit)
    }

    fn insert_transaction(&self, transaction: Transaction) -> MealPlanResult<()> {
        self.transactions.insert(transaction)?;
        self.transactions.save()
    }

    fn meal_logs(&self, semester_id: SemesterId) -> MealPlanResult<Vec<MealLog>> {
        self.meal_logs.get_by_semester(semester_id)
    }

    fn insert_meal_log(&self, log: MealLog) -> MealPlanResult<()> {
        self.meal_logs.insert(log)?;
        self.meal_logs.save()
    }

    fn record(&self, entry: &AuditEntry) -> MealPlanResult<()> {
        self.audit.log(entry)
    }
}
