//! Dashboard report
//!
//! One screen summarising the active semester: how far along it is, what is
//! left in every resource pool and how fast it can be spent, where the
//! budget stands and what happened most recently.

use chrono::NaiveDate;
use serde::Serialize;

use crate::derivation::{
    consumption, daily_rate, percentage, BudgetTotals, ProgressStatus, SemesterTimeline, Tier,
};
use crate::error::{MealPlanError, MealPlanResult};
use crate::models::{BudgetCategory, Resource, Semester, Transaction};
use crate::storage::DataStore;

/// Derived figures for one resource pool
#[derive(Debug, Clone, Serialize)]
pub struct ResourceSummary {
    pub resource: Resource,
    pub current: f64,
    pub initial: f64,
    /// Allowance per remaining day to finish the pool by the end date
    pub daily_rate: f64,
    pub percent_remaining: f64,
    /// Share of the initial amount already used
    pub percent_used: f64,
    /// Tier of `percent_used`
    pub tier: Tier,
}

impl ResourceSummary {
    pub fn build(semester: &Semester, resource: Resource, days_remaining: i64) -> Self {
        let current = semester.current.get(resource);
        let initial = semester.initial.get(resource);
        let percent_used = consumption(initial, current);

        Self {
            resource,
            current,
            initial,
            daily_rate: daily_rate(current, days_remaining),
            percent_remaining: percentage(current, initial),
            percent_used,
            tier: Tier::from_percentage(percent_used),
        }
    }
}

/// A category with its spending classification
#[derive(Debug, Clone, Serialize)]
pub struct CategoryProgress {
    pub category: BudgetCategory,
    /// Spent as a share of allocated, unclamped
    pub percentage: f64,
    pub status: ProgressStatus,
}

impl CategoryProgress {
    pub fn build(category: BudgetCategory) -> Self {
        Self {
            percentage: percentage(
                category.spent_amount.as_f64(),
                category.allocated_amount.as_f64(),
            ),
            status: ProgressStatus::classify(category.spent_amount, category.allocated_amount),
            category,
        }
    }
}

/// Snapshot of the active semester
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub semester: Semester,
    pub timeline: SemesterTimeline,
    pub resources: Vec<ResourceSummary>,
    pub budget: BudgetTotals,
    pub categories: Vec<CategoryProgress>,
    pub recent_transactions: Vec<Transaction>,
}

impl Dashboard {
    /// Build the dashboard for the active semester as of `today`
    pub fn build(store: &dyn DataStore, today: NaiveDate, recent_limit: usize) -> MealPlanResult<Self> {
        let semester = store
            .active_semester()?
            .ok_or(MealPlanError::NoActiveSemester)?;

        let timeline = SemesterTimeline::new(semester.start_date, semester.end_date, today);

        let resources = Resource::all()
            .iter()
            .map(|&r| ResourceSummary::build(&semester, r, timeline.days_remaining))
            .collect();

        let categories = store.budget_categories(semester.id)?;
        let budget = BudgetTotals::aggregate(&categories);
        let categories = categories.into_iter().map(CategoryProgress::build).collect();

        let recent_transactions = store.recent_transactions(semester.id, recent_limit)?;

        Ok(Self {
            semester,
            timeline,
            resources,
            budget,
            categories,
            recent_transactions,
        })
    }

    pub fn resource(&self, resource: Resource) -> Option<&ResourceSummary> {
        self.resources.iter().find(|r| r.resource == resource)
    }

    /// Categories that have gone past their allocation
    pub fn over_budget(&self) -> impl Iterator<Item = &CategoryProgress> {
        self.categories.iter().filter(|c| c.status.is_over_budget())
    }
}
