//! Budget category repository backed by categories.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::MealPlanError;
use crate::models::{BudgetCategory, BudgetCategoryId, SemesterId};

use super::file_io::{read_json, write_json_atomic};
use super::poisoned;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CategoryData {
    categories: Vec<BudgetCategory>,
}

/// Repository for budget category persistence
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<HashMap<BudgetCategoryId, BudgetCategory>>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), MealPlanError> {
        let file_data: CategoryData = read_json(&self.path)?;
        let mut data = self.data.write().map_err(poisoned)?;

        data.clear();
        for category in file_data.categories {
            data.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), MealPlanError> {
        let data = self.data.read().map_err(poisoned)?;

        let mut categories: Vec<_> = data.values().cloned().collect();
        categories.sort_by_key(|c| c.created_at);

        write_json_atomic(&self.path, &CategoryData { categories })
    }

    pub fn get(&self, id: BudgetCategoryId) -> Result<Option<BudgetCategory>, MealPlanError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.get(&id).cloned())
    }

    /// Categories of one semester in creation order
    pub fn get_by_semester(&self, semester_id: SemesterId) -> Result<Vec<BudgetCategory>, MealPlanError> {
        let data = self.data.read().map_err(poisoned)?;

        let mut categories: Vec<_> = data
            .values()
            .filter(|c| c.semester_id == semester_id)
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.name.cmp(&b.name)));
        Ok(categories)
    }

    /// Find a semester's category by case-insensitive name
    pub fn get_by_name(
        &self,
        semester_id: SemesterId,
        name: &str,
    ) -> Result<Option<BudgetCategory>, MealPlanError> {
        let data = self.data.read().map_err(poisoned)?;
        let name = name.trim();

        Ok(data
            .values()
            .find(|c| c.semester_id == semester_id && c.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    pub fn insert(&self, category: BudgetCategory) -> Result<(), MealPlanError> {
        let mut data = self.data.write().map_err(poisoned)?;
        data.insert(category.id, category);
        Ok(())
    }

    /// Replace an existing category
    pub fn update(&self, category: BudgetCategory) -> Result<(), MealPlanError> {
        let mut data = self.data.write().map_err(poisoned)?;

        match data.get_mut(&category.id) {
            Some(existing) => {
                *existing = category;
                Ok(())
            }
            None => Err(MealPlanError::category_not_found(category.id.to_string())),
        }
    }

    /// Remove a category, returning whether it existed
    pub fn delete(&self, id: BudgetCategoryId) -> Result<bool, MealPlanError> {
        let mut data = self.data.write().map_err(poisoned)?;
        Ok(data.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_scoped_by_semester() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp_dir.path().join("categories.json"));

        let fall = SemesterId::new();
        let spring = SemesterId::new();
        repo.insert(BudgetCategory::new(fall, "Groceries", Money::from_cents(20000)))
            .unwrap();
        repo.insert(BudgetCategory::new(spring, "Housing", Money::from_cents(80000)))
            .unwrap();

        let fall_categories = repo.get_by_semester(fall).unwrap();
        assert_eq!(fall_categories.len(), 1);
        assert_eq!(fall_categories[0].name, "Groceries");

        assert!(repo.get_by_name(fall, "groceries").unwrap().is_some());
        assert!(repo.get_by_name(spring, "groceries").unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp_dir.path().join("categories.json"));

        let category = BudgetCategory::new(SemesterId::new(), "Housing", Money::from_cents(80000));
        repo.insert(category.clone()).unwrap();

        assert!(repo.delete(category.id).unwrap());
        assert!(repo.get(category.id).unwrap().is_none());
        assert!(!repo.delete(category.id).unwrap());
    }

    #[test]
    fn test_update_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        let repo = CategoryRepository::new(path.clone());

        let mut category = BudgetCategory::new(SemesterId::new(), "Books", Money::from_cents(30000));
        repo.insert(category.clone()).unwrap();
        category.record_spending(Money::from_cents(4599)).unwrap();
        repo.update(category.clone()).unwrap();
        repo.save().unwrap();

        let reloaded = CategoryRepository::new(path);
        reloaded.load().unwrap();
        let loaded = reloaded.get(category.id).unwrap().unwrap();
        assert_eq!(loaded.spent_amount, Money::from_cents(4599));
    }
}
