//! Budget category service

use tracing::{info, warn};

use crate::audit::{AuditEntry, EntityType};
use crate::error::{MealPlanError, MealPlanResult};
use crate::models::{BudgetCategory, BudgetCategoryId, CategoryPreset, Money, SemesterId};
use crate::storage::DataStore;

/// Input for creating a category
#[derive(Debug, Clone)]
pub struct NewBudgetCategory {
    pub semester_id: SemesterId,
    pub name: String,
    pub allocated_amount: Money,
    /// Overrides the preset (or default) icon
    pub icon: Option<String>,
    /// Overrides the preset (or default) color
    pub color: Option<String>,
}

/// Service for budget category management
pub struct CategoryService<'a> {
    store: &'a dyn DataStore,
}

impl<'a> CategoryService<'a> {
    pub fn new(store: &'a dyn DataStore) -> Self {
        Self { store }
    }

    /// Create a category with nothing spent
    ///
    /// A name matching a preset picks up the preset's icon and color.
    pub fn create(&self, input: NewBudgetCategory) -> MealPlanResult<BudgetCategory> {
        let name = input.name.trim();

        if self.store.semester(input.semester_id)?.is_none() {
            return Err(MealPlanError::semester_not_found(input.semester_id.to_string()));
        }

        if self
            .store
            .budget_category_by_name(input.semester_id, name)?
            .is_some()
        {
            warn!("rejected duplicate category `{}`", name);
            return Err(MealPlanError::Duplicate {
                entity_type: "Budget category",
                identifier: name.to_string(),
            });
        }

        let mut category = BudgetCategory::new(input.semester_id, name, input.allocated_amount);
        if let Some(preset) = CategoryPreset::find(name) {
            category = category.with_preset(preset);
        }
        if let Some(icon) = input.icon {
            category.icon = icon;
        }
        if let Some(color) = input.color {
            category.color = color;
        }

        if let Err(e) = category.validate() {
            warn!("rejected category `{}`: {}", name, e);
            return Err(MealPlanError::Validation(e.to_string()));
        }

        self.store.insert_budget_category(category.clone())?;
        self.store.record(&AuditEntry::create(
            EntityType::BudgetCategory,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        ))?;

        info!(
            "created category `{}` with {} allocated",
            category.name, category.allocated_amount
        );
        Ok(category)
    }

    /// Categories of a semester in creation order
    pub fn list(&self, semester_id: SemesterId) -> MealPlanResult<Vec<BudgetCategory>> {
        self.store.budget_categories(semester_id)
    }

    /// Find a semester's category by name, falling back to an ID string
    pub fn find(&self, semester_id: SemesterId, identifier: &str) -> MealPlanResult<Option<BudgetCategory>> {
        if let Some(category) = self.store.budget_category_by_name(semester_id, identifier)? {
            return Ok(Some(category));
        }

        if let Ok(id) = identifier.parse::<BudgetCategoryId>() {
            return Ok(self
                .store
                .budget_category(id)?
                .filter(|c| c.semester_id == semester_id));
        }

        Ok(None)
    }

    /// Delete a semester's category by name or ID
    ///
    /// Expenses already charged to it stay in the transaction history.
    pub fn remove(&self, semester_id: SemesterId, identifier: &str) -> MealPlanResult<BudgetCategory> {
        let category = self
            .find(semester_id, identifier)?
            .ok_or_else(|| MealPlanError::category_not_found(identifier))?;

        self.store.delete_budget_category(category.id)?;
        self.store.record(&AuditEntry::delete(
            EntityType::BudgetCategory,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        ))?;

        info!("removed category `{}`", category.name);
        Ok(category)
    }
}
