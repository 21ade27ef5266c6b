//! Service layer
//!
//! Services validate input, apply side effects across entities and write
//! audit entries. They borrow a [`DataStore`](crate::storage::DataStore)
//! rather than owning one, so tests can hand them any store.

pub mod category;
pub mod meal_log;
pub mod semester;
pub mod transaction;

pub use category::{CategoryService, NewBudgetCategory};
pub use meal_log::{MealLogService, NewMealLog};
pub use semester::SemesterService;
pub use transaction::{NewExpense, TransactionService};
