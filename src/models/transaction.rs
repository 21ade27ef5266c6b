//! Transaction model
//!
//! Transactions are append-only records of money leaving a semester's
//! balances: budget expenses against a category, and meals paid from the
//! meal plan.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetCategoryId, SemesterId, TransactionId};
use super::money::Money;

/// Kind of transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Spending recorded against a budget category
    Expense,
    /// A logged meal
    Meal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "expense"),
            Self::Meal => write!(f, "meal"),
        }
    }
}

/// A recorded transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    pub semester_id: SemesterId,

    /// Budget category; meal transactions have none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<BudgetCategoryId>,

    pub kind: TransactionKind,

    pub amount: Money,

    #[serde(default)]
    pub description: String,

    pub date: NaiveDate,

    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create an expense against a budget category
    pub fn expense(
        semester_id: SemesterId,
        category_id: BudgetCategoryId,
        amount: Money,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            semester_id,
            category_id: Some(category_id),
            kind: TransactionKind::Expense,
            amount,
            description: description.into(),
            date,
            created_at: Utc::now(),
        }
    }

    /// Create a meal transaction
    pub fn meal(
        semester_id: SemesterId,
        amount: Money,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            semester_id,
            category_id: None,
            kind: TransactionKind::Meal,
            amount,
            description: description.into(),
            date,
            created_at: Utc::now(),
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}
