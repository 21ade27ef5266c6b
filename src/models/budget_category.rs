//! Budget category model
//!
//! Categories split a semester's spending money into named buckets
//! (housing, groceries, books...). Spending past the allocation is allowed
//! and reported as over budget rather than rejected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetCategoryId, SemesterId};
use super::money::Money;

/// Default icon for categories created without a preset
pub const DEFAULT_ICON: &str = "Wallet";

/// Default color for categories created without a preset
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// A spending category owned by one semester
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: BudgetCategoryId,

    /// Owning semester
    pub semester_id: SemesterId,

    pub name: String,

    pub allocated_amount: Money,

    pub spent_amount: Money,

    pub icon: String,

    /// Hex color, `#rrggbb`
    pub color: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl BudgetCategory {
    /// Create a new category with nothing spent yet
    pub fn new(semester_id: SemesterId, name: impl Into<String>, allocated_amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetCategoryId::new(),
            semester_id,
            name: name.into(),
            allocated_amount,
            spent_amount: Money::zero(),
            icon: DEFAULT_ICON.to_string(),
            color: DEFAULT_COLOR.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a preset's icon and color
    pub fn with_preset(mut self, preset: &CategoryPreset) -> Self {
        self.icon = preset.icon.to_string();
        self.color = preset.color.to_string();
        self
    }

    /// Allocation left after spending; negative when over budget
    pub fn remaining(&self) -> Money {
        self.allocated_amount - self.spent_amount
    }

    /// Add an expense to the spent total
    ///
    /// Leaves the category untouched if the total would pass [`Money::MAX`].
    pub fn record_spending(&mut self, amount: Money) -> Result<(), CategoryValidationError> {
        self.spent_amount = self
            .spent_amount
            .checked_add(amount)
            .ok_or(CategoryValidationError::SpendingOverflow)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if self.allocated_amount.is_negative() {
            return Err(CategoryValidationError::NegativeAllocation);
        }

        if self.spent_amount.is_negative() {
            return Err(CategoryValidationError::NegativeSpending);
        }

        if self.allocated_amount > Money::MAX {
            return Err(CategoryValidationError::AllocationTooLarge);
        }

        if !is_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor(self.color.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// A quick-start category with a suggested icon and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPreset {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

impl CategoryPreset {
    /// All presets offered when adding a category
    pub fn all() -> &'static [CategoryPreset] {
        &PRESETS
    }

    /// Find a preset by case-insensitive name
    pub fn find(name: &str) -> Option<&'static CategoryPreset> {
        PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }
}

const PRESETS: [CategoryPreset; 6] = [
    CategoryPreset { name: "Housing", icon: "Home", color: "#3b82f6" },
    CategoryPreset { name: "Groceries", icon: "ShoppingCart", color: "#10b981" },
    CategoryPreset { name: "Transportation", icon: "Car", color: "#f59e0b" },
    CategoryPreset { name: "Entertainment", icon: "Heart", color: "#ec4899" },
    CategoryPreset { name: "Books & Supplies", icon: "BookOpen", color: "#8b5cf6" },
    CategoryPreset { name: "Personal Care", icon: "Wallet", color: "#06b6d4" },
];

/// Validation errors for budget categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeAllocation,
    NegativeSpending,
    AllocationTooLarge,
    SpendingOverflow,
    InvalidColor(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::NegativeAllocation => write!(f, "Allocated amount cannot be negative"),
            Self::NegativeSpending => write!(f, "Spent amount cannot be negative"),
            Self::AllocationTooLarge => {
                write!(f, "Allocated amount cannot exceed {}", Money::MAX)
            }
            Self::SpendingOverflow => {
                write!(f, "Spent amount would exceed {}", Money::MAX)
            }
            Self::InvalidColor(c) => write!(f, "Invalid color '{}', expected #rrggbb", c),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let semester_id = SemesterId::new();
        let category = BudgetCategory::new(semester_id, "Groceries", Money::from_cents(20000));

        assert_eq!(category.semester_id, semester_id);
        assert!(category.spent_amount.is_zero());
        assert_eq!(category.remaining(), Money::from_cents(20000));
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_over_budget_is_valid() {
        let mut category = BudgetCategory::new(SemesterId::new(), "Fun", Money::from_cents(1000));
        category.record_spending(Money::from_cents(1500)).unwrap();

        assert_eq!(category.remaining(), Money::from_cents(-500));
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_spending_cannot_pass_max() {
        let mut category = BudgetCategory::new(SemesterId::new(), "Fun", Money::from_cents(100));
        category.record_spending(Money::MAX).unwrap();

        assert_eq!(
            category.record_spending(Money::from_cents(1)),
            Err(CategoryValidationError::SpendingOverflow)
        );
        assert_eq!(category.spent_amount, Money::MAX);
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut category = BudgetCategory::new(SemesterId::new(), "", Money::zero());
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "Books".into();
        category.allocated_amount = Money::from_cents(-1);
        assert_eq!(
            category.validate(),
            Err(CategoryValidationError::NegativeAllocation)
        );

        category.allocated_amount = Money::zero();
        category.color = "blue".into();
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_presets() {
        assert_eq!(CategoryPreset::all().len(), 6);
        let preset = CategoryPreset::find("books & supplies").unwrap();
        assert_eq!(preset.icon, "BookOpen");

        let category = BudgetCategory::new(SemesterId::new(), preset.name, Money::zero())
            .with_preset(preset);
        assert_eq!(category.color, "#8b5cf6");
        assert!(CategoryPreset::find("Tuition").is_none());
    }
}
