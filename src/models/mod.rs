//! Core data models
//!
//! Semesters with their resource balances, budget categories, transactions
//! and meal logs, plus the money and id types they share.

pub mod budget_category;
pub mod ids;
pub mod meal_log;
pub mod money;
pub mod semester;
pub mod transaction;

pub use budget_category::{BudgetCategory, CategoryPreset};
pub use ids::{BudgetCategoryId, MealLogId, SemesterId, TransactionId};
pub use meal_log::{MealLog, MealType, PaymentMethod};
pub use money::Money;
pub use semester::{Resource, ResourceBalances, Semester};
pub use transaction::{Transaction, TransactionKind};
