//! Monthly calendar of spending and meals

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{MealPlanError, MealPlanResult};
use crate::models::{MealLog, Money, Transaction};

/// Activity on one day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Sum of every transaction dated that day
    pub spending: Money,
    pub meals: usize,
}

/// One calendar month of daily activity
#[derive(Debug, Clone, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Bucket transactions and meal logs into the days of a month
    ///
    /// Records outside the month are ignored.
    pub fn build(
        year: i32,
        month: u32,
        transactions: &[Transaction],
        meal_logs: &[MealLog],
    ) -> MealPlanResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| MealPlanError::Validation(format!("Invalid month: {}-{}", year, month)))?;

        let days = first
            .iter_days()
            .take_while(|d| d.month() == month)
            .map(|date| CalendarDay {
                date,
                spending: transactions
                    .iter()
                    .filter(|t| t.date == date)
                    .map(|t| t.amount)
                    .sum(),
                meals: meal_logs.iter().filter(|m| m.date == date).count(),
            })
            .collect();

        Ok(Self { year, month, days })
    }

    pub fn first_day(&self) -> NaiveDate {
        self.days[0].date
    }

    /// Blank cells before day 1 in a Sunday-first grid
    pub fn leading_blanks(&self) -> usize {
        self.first_day().weekday().num_days_from_sunday() as usize
    }

    pub fn day(&self, day: u32) -> Option<&CalendarDay> {
        self.days.get(day.checked_sub(1)? as usize)
    }

    pub fn total_spending(&self) -> Money {
        self.days.iter().map(|d| d.spending).sum()
    }

    pub fn total_meals(&self) -> usize {
        self.days.iter().map(|d| d.meals).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetCategoryId, MealType, PaymentMethod, SemesterId};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    #[test]
    fn test_buckets_by_day() {
        let semester = SemesterId::new();
        let category = BudgetCategoryId::new();
        let transactions = vec![
            Transaction::expense(semester, category, Money::from_cents(1200), "Books", date(9, 3)),
            Transaction::meal(semester, Money::from_cents(850), "Lunch", date(9, 3)),
            Transaction::meal(semester, Money::from_cents(500), "Snack", date(10, 1)),
        ];
        let meals = vec![
            MealLog::new(semester, date(9, 3), MealType::Lunch, PaymentMethod::DiningDollars, Some(Money::from_cents(850))),
            MealLog::new(semester, date(9, 4), MealType::Breakfast, PaymentMethod::MealSwipe, None),
        ];

        let calendar = CalendarMonth::build(2025, 9, &transactions, &meals).unwrap();

        assert_eq!(calendar.days.len(), 30);
        assert_eq!(calendar.day(3).unwrap().spending, Money::from_cents(2050));
        assert_eq!(calendar.day(3).unwrap().meals, 1);
        assert_eq!(calendar.day(4).unwrap().meals, 1);
        assert!(calendar.day(4).unwrap().spending.is_zero());
        assert_eq!(calendar.total_spending(), Money::from_cents(2050));
        assert_eq!(calendar.total_meals(), 2);
        assert!(calendar.day(31).is_none());
        assert!(calendar.day(0).is_none());
    }

    #[test]
    fn test_grid_offset() {
        // 2025-09-01 is a Monday
        let calendar = CalendarMonth::build(2025, 9, &[], &[]).unwrap();
        assert_eq!(calendar.leading_blanks(), 1);

        let february = CalendarMonth::build(2024, 2, &[], &[]).unwrap();
        assert_eq!(february.days.len(), 29);
    }

    #[test]
    fn test_invalid_month() {
        assert!(CalendarMonth::build(2025, 13, &[], &[]).unwrap_err().is_validation());
    }
}
