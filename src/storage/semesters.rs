//! Semester repository backed by semesters.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::MealPlanError;
use crate::models::{Semester, SemesterId};

use super::file_io::{read_json, write_json_atomic};
use super::poisoned;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SemesterData {
    semesters: Vec<Semester>,
}

/// Repository for semester persistence
pub struct SemesterRepository {
    path: PathBuf,
    data: RwLock<HashMap<SemesterId, Semester>>,
}

impl SemesterRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load semesters from disk
    pub fn load(&self) -> Result<(), MealPlanError> {
        let file_data: SemesterData = read_json(&self.path)?;
        let mut data = self.data.write().map_err(poisoned)?;

        data.clear();
        for semester in file_data.semesters {
            data.insert(semester.id, semester);
        }

        Ok(())
    }

    /// Save semesters to disk, oldest first
    pub fn save(&self) -> Result<(), MealPlanError> {
        let data = self.data.read().map_err(poisoned)?;

        let mut semesters: Vec<_> = data.values().cloned().collect();
        semesters.sort_by_key(|s| s.created_at);

        write_json_atomic(&self.path, &SemesterData { semesters })
    }

    pub fn get(&self, id: SemesterId) -> Result<Option<Semester>, MealPlanError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.get(&id).cloned())
    }

    /// All semesters, newest first
    pub fn get_all(&self) -> Result<Vec<Semester>, MealPlanError> {
        let data = self.data.read().map_err(poisoned)?;

        let mut semesters: Vec<_> = data.values().cloned().collect();
        semesters.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(semesters)
    }

    /// The active semester, if any
    pub fn get_active(&self) -> Result<Option<Semester>, MealPlanError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data
            .values()
            .filter(|s| s.is_active)
            .max_by_key(|s| s.created_at)
            .cloned())
    }

    /// Insert a semester; an active insert deactivates every other semester
    pub fn insert(&self, semester: Semester) -> Result<(), MealPlanError> {
        let mut data = self.data.write().map_err(poisoned)?;

        if semester.is_active {
            for other in data.values_mut() {
                other.is_active = false;
            }
        }

        data.insert(semester.id, semester);
        Ok(())
    }

    /// Replace an existing semester
    pub fn update(&self, semester: Semester) -> Result<(), MealPlanError> {
        let mut data = self.data.write().map_err(poisoned)?;

        match data.get_mut(&semester.id) {
            Some(existing) => {
                *existing = semester;
                Ok(())
            }
            None => Err(MealPlanError::semester_not_found(semester.id.to_string())),
        }
    }

    pub fn count(&self) -> Result<usize, MealPlanError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.len())
    }
}
