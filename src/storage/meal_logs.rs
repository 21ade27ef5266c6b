//! Meal log repository backed by meal_logs.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::MealPlanError;
use crate::models::{MealLog, MealLogId, SemesterId};

use super::file_io::{read_json, write_json_atomic};
use super::poisoned;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct MealLogData {
    meal_logs: Vec<MealLog>,
}

/// Repository for meal log persistence
pub struct MealLogRepository {
    path: PathBuf,
    data: RwLock<HashMap<MealLogId, MealLog>>,
}

impl MealLogRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), MealPlanError> {
        let file_data: MealLogData = read_json(&self.path)?;
        let mut data = self.data.write().map_err(poisoned)?;

        data.clear();
        for log in file_data.meal_logs {
            data.insert(log.id, log);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), MealPlanError> {
        let data = self.data.read().map_err(poisoned)?;

        let mut meal_logs: Vec<_> = data.values().cloned().collect();
        meal_logs.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        write_json_atomic(&self.path, &MealLogData { meal_logs })
    }

    /// A semester's meal logs, newest first
    pub fn get_by_semester(&self, semester_id: SemesterId) -> Result<Vec<MealLog>, MealPlanError> {
        let data = self.data.read().map_err(poisoned)?;

        let mut logs: Vec<_> = data
            .values()
            .filter(|l| l.semester_id == semester_id)
            .cloned()
            .collect();
        logs.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(logs)
    }

    pub fn insert(&self, log: MealLog) -> Result<(), MealPlanError> {
        let mut data = self.data.write().map_err(poisoned)?;
        data.insert(log.id, log);
        Ok(())
    }
}
