//! Transaction repository backed by transactions.json

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::MealPlanError;
use crate::models::{SemesterId, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};
use super::poisoned;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Newest date first, ties broken by newest creation time
fn newest_first(a: &Transaction, b: &Transaction) -> Ordering {
    b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at))
}

/// Repository for transaction persistence, indexed by semester
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
    by_semester: RwLock<HashMap<SemesterId, Vec<TransactionId>>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_semester: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk and rebuild the semester index
    pub fn load(&self) -> Result<(), MealPlanError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(poisoned)?;
        let mut by_semester = self.by_semester.write().map_err(poisoned)?;

        data.clear();
        by_semester.clear();

        for txn in file_data.transactions {
            by_semester.entry(txn.semester_id).or_default().push(txn.id);
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk, newest first
    pub fn save(&self) -> Result<(), MealPlanError> {
        let data = self.data.read().map_err(poisoned)?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(newest_first);

        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, MealPlanError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.get(&id).cloned())
    }

    /// A semester's transactions, newest first
    pub fn get_by_semester(&self, semester_id: SemesterId) -> Result<Vec<Transaction>, MealPlanError> {
        let data = self.data.read().map_err(poisoned)?;
        let by_semester = self.by_semester.read().map_err(poisoned)?;

        let ids = by_semester.get(&semester_id).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut transactions: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        transactions.sort_by(newest_first);
        Ok(transactions)
    }

    /// The `limit` newest transactions of a semester
    pub fn get_recent(
        &self,
        semester_id: SemesterId,
        limit: usize,
    ) -> Result<Vec<Transaction>, MealPlanError> {
        let mut transactions = self.get_by_semester(semester_id)?;
        transactions.truncate(limit);
        Ok(transactions)
    }

    pub fn insert(&self, txn: Transaction) -> Result<(), MealPlanError> {
        let mut data = self.data.write().map_err(poisoned)?;
        let mut by_semester = self.by_semester.write().map_err(poisoned)?;

        if !data.contains_key(&txn.id) {
            by_semester.entry(txn.semester_id).or_default().push(txn.id);
        }
        data.insert(txn.id, txn);
        Ok(())
    }

    pub fn count(&self) -> Result<usize, MealPlanError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.len())
    }
}
