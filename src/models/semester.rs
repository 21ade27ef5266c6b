//! Semester model
//!
//! A semester is the budgeting period: fixed start and end dates plus the
//! four resource pools a meal plan provides. Each pool has an initial
//! allotment and a current balance that only ever decreases as meals and
//! expenses are logged.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SemesterId;
use super::money::Money;

/// Allowed range for the meals-per-day preference
pub const MEALS_PER_DAY_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// One of the independent resource pools tracked per semester
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resource {
    DiningDollars,
    MealSwipes,
    MealExchanges,
    DebitCard,
}

impl Resource {
    /// All resources in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::MealSwipes,
            Self::DiningDollars,
            Self::MealExchanges,
            Self::DebitCard,
        ]
    }

    /// Whether the pool is a currency balance rather than a count
    pub fn is_currency(&self) -> bool {
        matches!(self, Self::DiningDollars | Self::DebitCard)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiningDollars => write!(f, "Dining Dollars"),
            Self::MealSwipes => write!(f, "Meal Swipes"),
            Self::MealExchanges => write!(f, "Meal Exchanges"),
            Self::DebitCard => write!(f, "Debit Card"),
        }
    }
}

/// Balances for every resource pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceBalances {
    pub dining_dollars: Money,
    pub meal_swipes: u32,
    pub meal_exchanges: u32,
    pub debit_card: Money,
}

impl ResourceBalances {
    /// The balance of one pool as a number (currency units or count)
    pub fn get(&self, resource: Resource) -> f64 {
        match resource {
            Resource::DiningDollars => self.dining_dollars.as_f64(),
            Resource::MealSwipes => f64::from(self.meal_swipes),
            Resource::MealExchanges => f64::from(self.meal_exchanges),
            Resource::DebitCard => self.debit_card.as_f64(),
        }
    }

    /// Human-readable balance of one pool
    pub fn format(&self, resource: Resource) -> String {
        match resource {
            Resource::DiningDollars => self.dining_dollars.to_string(),
            Resource::MealSwipes => self.meal_swipes.to_string(),
            Resource::MealExchanges => self.meal_exchanges.to_string(),
            Resource::DebitCard => self.debit_card.to_string(),
        }
    }
}

/// A semester meal plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Semester {
    pub id: SemesterId,

    pub name: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    /// Allotments at the start of the semester
    pub initial: ResourceBalances,

    /// What is left now
    pub current: ResourceBalances,

    pub meals_per_day: u8,

    #[serde(default)]
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
}

impl Semester {
    /// Create a new active semester whose current balances equal the initial ones
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        initial: ResourceBalances,
        meals_per_day: u8,
    ) -> Self {
        Self {
            id: SemesterId::new(),
            name: name.into(),
            start_date,
            end_date,
            initial,
            current: initial,
            meals_per_day,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Check whether a date falls within the semester (inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Validate the semester
    pub fn validate(&self) -> Result<(), SemesterValidationError> {
        if self.name.trim().is_empty() {
            return Err(SemesterValidationError::EmptyName);
        }

        if self.start_date >= self.end_date {
            return Err(SemesterValidationError::EndNotAfterStart);
        }

        if !MEALS_PER_DAY_RANGE.contains(&self.meals_per_day) {
            return Err(SemesterValidationError::MealsPerDayOutOfRange(
                self.meals_per_day,
            ));
        }

        for balances in [&self.initial, &self.current] {
            if balances.dining_dollars.is_negative() || balances.debit_card.is_negative() {
                return Err(SemesterValidationError::NegativeBalance);
            }
        }

        for &resource in Resource::all() {
            if self.current.get(resource) > self.initial.get(resource) {
                return Err(SemesterValidationError::CurrentExceedsInitial(resource));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for semesters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemesterValidationError {
    EmptyName,
    EndNotAfterStart,
    MealsPerDayOutOfRange(u8),
    NegativeBalance,
    CurrentExceedsInitial(Resource),
}

impl fmt::Display for SemesterValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Semester name cannot be empty"),
            Self::EndNotAfterStart => write!(f, "Semester end date must be after the start date"),
            Self::MealsPerDayOutOfRange(n) => {
                write!(f, "Meals per day must be between 1 and 5 (got {})", n)
            }
            Self::NegativeBalance => write!(f, "Balances cannot be negative"),
            Self::CurrentExceedsInitial(resource) => {
                write!(f, "Current {} cannot exceed the initial amount", resource)
            }
        }
    }
}

impl std::error::Error for SemesterValidationError {}
