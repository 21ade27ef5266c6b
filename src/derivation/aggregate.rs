//! Budget totals across a semester's categories

use serde::Serialize;

use super::progress::percentage;
use crate::models::{BudgetCategory, Money};

/// Summed allocation and spending for a set of categories
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetTotals {
    pub total_allocated: Money,
    pub total_spent: Money,
    /// Allocated minus spent; negative when over budget overall
    pub total_remaining: Money,
    pub overall_percentage: f64,
}

impl BudgetTotals {
    /// Sum a collection of categories; an empty slice yields all zeros
    pub fn aggregate(categories: &[BudgetCategory]) -> Self {
        let total_allocated: Money = categories.iter().map(|c| c.allocated_amount).sum();
        let total_spent: Money = categories.iter().map(|c| c.spent_amount).sum();

        Self {
            total_allocated,
            total_spent,
            total_remaining: total_allocated - total_spent,
            overall_percentage: percentage(total_spent.as_f64(), total_allocated.as_f64()),
        }
    }

    /// Percentage of the allocation still unspent
    pub fn percent_remaining(&self) -> f64 {
        if self.total_allocated.is_positive() {
            100.0 - self.overall_percentage
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SemesterId;

    fn category(allocated: i64, spent: i64) -> BudgetCategory {
        let mut c = BudgetCategory::new(SemesterId::new(), "Test", Money::from_cents(allocated));
        c.spent_amount = Money::from_cents(spent);
        c
    }

    #[test]
    fn test_empty_is_zero() {
        let totals = BudgetTotals::aggregate(&[]);
        assert_eq!(totals.total_allocated, Money::zero());
        assert_eq!(totals.total_spent, Money::zero());
        assert_eq!(totals.total_remaining, Money::zero());
        assert_eq!(totals.overall_percentage, 0.0);
        assert_eq!(totals.percent_remaining(), 0.0);
    }

    #[test]
    fn test_sums_categories() {
        let categories = vec![category(80000, 80000), category(20000, 14550)];
        let totals = BudgetTotals::aggregate(&categories);

        assert_eq!(totals.total_allocated, Money::from_cents(100000));
        assert_eq!(totals.total_spent, Money::from_cents(94550));
        assert_eq!(totals.total_remaining, Money::from_cents(5450));
        assert_eq!(totals.overall_percentage, 94.55);
    }

    #[test]
    fn test_order_independent() {
        let a = vec![category(100, 50), category(300, 400), category(0, 25)];
        let mut b = a.clone();
        b.reverse();
        assert_eq!(BudgetTotals::aggregate(&a), BudgetTotals::aggregate(&b));
    }

    #[test]
    fn test_remaining_can_go_negative() {
        let totals = BudgetTotals::aggregate(&[category(1000, 1500)]);
        assert_eq!(totals.total_remaining, Money::from_cents(-500));
        assert_eq!(totals.overall_percentage, 150.0);
    }
}
