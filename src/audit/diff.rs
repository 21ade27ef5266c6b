//! Field-level change summaries for update entries

use serde_json::{Map, Value};

/// Bookkeeping fields left out of summaries
const IGNORED_FIELDS: &[&str] = &["updated_at"];

/// Summarise what changed between two serialized entity states
///
/// Nested objects are flattened into dotted paths, so a semester balance
/// change reads `current.meal_swipes: 100 -> 99`. Returns `None` when
/// nothing relevant changed.
pub fn diff_summary(before: &Value, after: &Value) -> Option<String> {
    let mut changes = Vec::new();
    collect_changes("", before, after, &mut changes);

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn collect_changes(path: &str, before: &Value, after: &Value, out: &mut Vec<String>) {
    match (before, after) {
        (Value::Object(b), Value::Object(a)) => collect_object(path, b, a, out),
        _ if before != after => {
            out.push(format!("{}: {} -> {}", path, render(before), render(after)));
        }
        _ => {}
    }
}

fn collect_object(path: &str, before: &Map<String, Value>, after: &Map<String, Value>, out: &mut Vec<String>) {
    let join = |key: &str| {
        if path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", path, key)
        }
    };

    for (key, b) in before {
        if IGNORED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        match after.get(key) {
            Some(a) => collect_changes(&join(key), b, a, out),
            None => out.push(format!("{}: {} -> (none)", join(key), render(b))),
        }
    }

    for (key, a) in after {
        if !before.contains_key(key) && !IGNORED_FIELDS.contains(&key.as_str()) {
            out.push(format!("{}: (none) -> {}", join(key), render(a)));
        }
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_balance_change() {
        let before = json!({"name": "Fall", "current": {"meal_swipes": 100, "dining_dollars": 50000}});
        let after = json!({"name": "Fall", "current": {"meal_swipes": 99, "dining_dollars": 50000}});

        assert_eq!(
            diff_summary(&before, &after).unwrap(),
            "current.meal_swipes: 100 -> 99"
        );
    }

    #[test]
    fn test_no_change() {
        let value = json!({"spent_amount": 1200});
        assert!(diff_summary(&value, &value).is_none());
    }

    #[test]
    fn test_ignores_updated_at() {
        let before = json!({"spent_amount": 0, "updated_at": "a"});
        let after = json!({"spent_amount": 1500, "updated_at": "b"});
        assert_eq!(diff_summary(&before, &after).unwrap(), "spent_amount: 0 -> 1500");
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"category_id": "x"});
        let after = json!({"description": "Lunch"});
        let summary = diff_summary(&before, &after).unwrap();

        assert!(summary.contains("category_id: \"x\" -> (none)"));
        assert!(summary.contains("description: (none) -> \"Lunch\""));
    }
}
