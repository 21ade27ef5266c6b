//! Export
//!
//! - JSON: machine-readable export of a whole semester
//! - YAML: the same export in a human-readable form
//! - CSV: transactions or meal logs for spreadsheets

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_meal_logs_csv, export_transactions_csv};
pub use json::{export_full_json, SemesterExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
