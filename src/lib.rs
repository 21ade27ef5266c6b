//! mealplan-cli - semester meal plan and student budget tracking
//!
//! A student enters a semester's dates and meal-plan balances once, then
//! logs meals and expenses as they happen. Everything the dashboard shows
//! (days remaining, daily allowances, category progress) is derived from
//! the stored balances at the time it is displayed.
//!
//! # Architecture
//!
//! - `config`: data directory resolution and user settings
//! - `error`: crate error type
//! - `models`: semesters, budget categories, transactions, meal logs
//! - `derivation`: date math, daily rates, percentages and tiers
//! - `setup`: first-run wizard and its interactive prompts
//! - `storage`: the `DataStore` trait and its JSON file implementation
//! - `audit`: append-only log of every create and update
//! - `services`: validated create operations with their side effects
//! - `reports`: dashboard and calendar snapshots
//! - `display`: terminal formatting
//! - `export`: JSON, YAML and CSV export
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use mealplan_cli::config::paths::MealPlanPaths;
//! use mealplan_cli::reports::Dashboard;
//! use mealplan_cli::storage::Storage;
//!
//! let storage = Storage::open(MealPlanPaths::new()?)?;
//! let today = chrono::Local::now().date_naive();
//! let dashboard = Dashboard::build(&storage, today, 5)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod derivation;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod setup;
pub mod storage;
pub mod utils;

pub use error::{MealPlanError, MealPlanResult};
