//! User settings
//!
//! Display preferences and defaults used by the setup wizard and the
//! dashboard.

use serde::{Deserialize, Serialize};

use super::paths::MealPlanPaths;
use crate::error::MealPlanError;

/// User settings persisted to `config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many transactions the dashboard lists as "recent"
    #[serde(default = "default_recent_limit")]
    pub recent_transactions_limit: usize,

    /// Meals per day pre-filled in the setup wizard
    #[serde(default = "default_meals_per_day")]
    pub default_meals_per_day: u8,

    /// Whether initial setup has been completed
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_limit() -> usize {
    5
}

fn default_meals_per_day() -> u8 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_transactions_limit: default_recent_limit(),
            default_meals_per_day: default_meals_per_day(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &MealPlanPaths) -> Result<Self, MealPlanError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| MealPlanError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| MealPlanError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MealPlanPaths) -> Result<(), MealPlanError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| MealPlanError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| MealPlanError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
