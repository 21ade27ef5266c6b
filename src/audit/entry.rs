//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::diff_summary;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityType {
    Semester,
    BudgetCategory,
    Transaction,
    MealLog,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Semester => write!(f, "Semester"),
            EntityType::BudgetCategory => write!(f, "BudgetCategory"),
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::MealLog => write!(f, "MealLog"),
        }
    }
}

/// A single audit log entry
///
/// Creates carry the new state in `after`, deletes the last state in
/// `before`; updates carry both states and a field-level summary of what
/// changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Display form of the entity's ID (e.g. `sem-1a2b3c4d`)
    pub entity_id: String,

    /// Human-readable label such as a semester or category name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Entry for a newly created entity
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: serde_json::to_value(entity).ok(),
            diff_summary: None,
        }
    }

    /// Entry for an update, with the change summary computed from both states
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let before = serde_json::to_value(before).ok();
        let after = serde_json::to_value(after).ok();
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => diff_summary(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before,
            after,
            diff_summary,
        }
    }

    /// Entry for a removed entity, keeping its last state
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: serde_json::to_value(entity).ok(),
            after: None,
            diff_summary: None,
        }
    }

    /// One-line human-readable form
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(
            EntityType::Semester,
            "sem-12345678",
            Some("Fall 2025".to_string()),
            &json!({"name": "Fall 2025"}),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
        assert!(entry.diff_summary.is_none());
    }

    #[test]
    fn test_update_entry_has_summary() {
        let entry = AuditEntry::update(
            EntityType::BudgetCategory,
            "bud-12345678",
            Some("Groceries".to_string()),
            &json!({"spent_amount": 0}),
            &json!({"spent_amount": 2500}),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.diff_summary.as_deref(), Some("spent_amount: 0 -> 2500"));
    }

    #[test]
    fn test_delete_entry_keeps_last_state() {
        let entry = AuditEntry::delete(
            EntityType::BudgetCategory,
            "bud-12345678",
            Some("Entertainment".to_string()),
            &json!({"name": "Entertainment"}),
        );

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
        assert!(entry
            .format_human_readable()
            .contains("DELETE BudgetCategory bud-12345678 (Entertainment)"));
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(EntityType::MealLog, "meal-1", None, &json!({}));
        let text = serde_json::to_string(&entry).unwrap();
        assert!(text.contains("\"entity_type\":\"meal-log\""));

        let parsed: AuditEntry = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.entity_type, EntityType::MealLog);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::update(
            EntityType::Semester,
            "sem-12345678",
            Some("Fall".to_string()),
            &json!({"current": {"meal_swipes": 10}}),
            &json!({"current": {"meal_swipes": 9}}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Semester sem-12345678 (Fall)"));
        assert!(formatted.contains("Changes: current.meal_swipes: 10 -> 9"));
    }
}
