//! Audit logging
//!
//! Every create and update goes through the data store's `record` hook and
//! lands in an append-only JSONL file. Updates carry before/after states and
//! a flattened summary of the fields that changed.

mod diff;
mod entry;
mod logger;

pub use diff::diff_summary;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
