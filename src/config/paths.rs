//! Path management for the meal plan tracker
//!
//! ## Path Resolution Order
//!
//! 1. `MEALPLAN_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/mealplan` on Linux, `%APPDATA%\mealplan\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::MealPlanError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "MEALPLAN_DATA_DIR";

/// Manages all paths used by the application
#[derive(Debug, Clone)]
pub struct MealPlanPaths {
    base_dir: PathBuf,
}

impl MealPlanPaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, MealPlanError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "mealplan")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    MealPlanError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the entity files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn semesters_file(&self) -> PathBuf {
        self.data_dir().join("semesters.json")
    }

    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    pub fn meal_logs_file(&self) -> PathBuf {
        self.data_dir().join("meal_logs.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), MealPlanError> {
        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MealPlanError::Io(format!("Failed to create data directory: {}", e)))?;
        Ok(())
    }

    /// Check if setup has written a settings file yet
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
