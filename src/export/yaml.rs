//! YAML export for a human-readable backup

use std::io::Write;

use crate::error::{MealPlanError, MealPlanResult};
use crate::models::SemesterId;
use crate::storage::DataStore;

use super::json::SemesterExport;

/// Write a semester export as YAML with a short comment header
pub fn export_full_yaml<W: Write>(
    store: &dyn DataStore,
    semester_id: SemesterId,
    writer: &mut W,
) -> MealPlanResult<()> {
    let export = SemesterExport::from_store(store, semester_id)?;
    let to_export_err = |e: std::io::Error| MealPlanError::Export(e.to_string());

    writeln!(writer, "# Meal plan export: {}", export.semester.name).map_err(to_export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_export_err)?;
    writeln!(writer).map_err(to_export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| MealPlanError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{active_semester, create_test_storage};

    #[test]
    fn test_yaml_export() {
        let (_temp_dir, storage) = create_test_storage();
        let semester = active_semester(&storage);

        let mut buffer = Vec::new();
        export_full_yaml(&storage, semester.id, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Meal plan export: Fall 2025"));
        assert!(text.contains("schema_version:"));
        assert!(text.contains("meal_swipes: 100"));

        let parsed: SemesterExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.semester.id, semester.id);
    }
}
