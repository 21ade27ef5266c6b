//! Week-by-week resource usage across a semester

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::derivation::days_between;
use crate::models::{MealLog, Money, PaymentMethod, Semester};

/// What the semester's meals drew from each pool during one week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyUsage {
    /// 1-based week number counted from the semester start
    pub week: u32,
    pub start: NaiveDate,
    /// Last day of the week, or the semester end for a short final week
    pub end: NaiveDate,
    pub dining_dollars: Money,
    pub meal_swipes: u32,
    pub meal_exchanges: u32,
    pub debit_card: Money,
}

impl WeeklyUsage {
    fn new(week: u32, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            week,
            start,
            end,
            dining_dollars: Money::zero(),
            meal_swipes: 0,
            meal_exchanges: 0,
            debit_card: Money::zero(),
        }
    }

    fn add(&mut self, log: &MealLog) {
        let amount = log.amount.unwrap_or_default();
        match log.payment_method {
            PaymentMethod::MealSwipe => self.meal_swipes += 1,
            PaymentMethod::MealExchange => self.meal_exchanges += 1,
            PaymentMethod::DiningDollars => self.dining_dollars += amount,
            PaymentMethod::DebitCard => self.debit_card += amount,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.meal_swipes == 0
            && self.meal_exchanges == 0
            && self.dining_dollars.is_zero()
            && self.debit_card.is_zero()
    }
}

/// Seven-day buckets from the semester start up to today
#[derive(Debug, Clone, Serialize)]
pub struct SpendingTrends {
    pub semester_name: String,
    pub weeks: Vec<WeeklyUsage>,
}

impl SpendingTrends {
    /// Bucket meal logs into the weeks elapsed so far
    ///
    /// Weeks stop at the semester end once it has passed. Before the
    /// semester starts there are no weeks. Logs dated outside the covered
    /// weeks are ignored.
    pub fn build(semester: &Semester, meal_logs: &[MealLog], today: NaiveDate) -> Self {
        let last = today.min(semester.end_date);
        let days = days_between(semester.start_date, last);

        let mut weeks: Vec<WeeklyUsage> = if days < 0 {
            Vec::new()
        } else {
            (0..=days / 7)
                .map(|i| {
                    let start = semester.start_date + Duration::days(i * 7);
                    let end = (start + Duration::days(6)).min(semester.end_date);
                    WeeklyUsage::new(i as u32 + 1, start, end)
                })
                .collect()
        };

        for log in meal_logs.iter().filter(|m| m.semester_id == semester.id) {
            let offset = days_between(semester.start_date, log.date);
            if offset < 0 || log.date > last {
                continue;
            }
            if let Some(week) = weeks.get_mut((offset / 7) as usize) {
                week.add(log);
            }
        }

        Self {
            semester_name: semester.name.clone(),
            weeks,
        }
    }

    /// Usage summed over every week
    pub fn totals(&self) -> (Money, u32, u32, Money) {
        self.weeks.iter().fold(
            (Money::zero(), 0, 0, Money::zero()),
            |(dining, swipes, exchanges, debit), w| {
                (
                    dining + w.dining_dollars,
                    swipes + w.meal_swipes,
                    exchanges + w.meal_exchanges,
                    debit + w.debit_card,
                )
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealType, ResourceBalances};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn semester() -> Semester {
        let balances = ResourceBalances {
            dining_dollars: Money::from_cents(50000),
            meal_swipes: 100,
            meal_exchanges: 4,
            debit_card: Money::from_cents(3000),
        };
        Semester::new("Fall 2025", date(9, 1), date(9, 24), balances, 3)
    }

    fn meal(semester: &Semester, day: NaiveDate, method: PaymentMethod, cents: Option<i64>) -> MealLog {
        MealLog::new(semester.id, day, MealType::Lunch, method, cents.map(Money::from_cents))
    }

    #[test]
    fn test_buckets_by_week() {
        let semester = semester();
        let logs = vec![
            meal(&semester, date(9, 1), PaymentMethod::MealSwipe, None),
            meal(&semester, date(9, 7), PaymentMethod::DiningDollars, Some(850)),
            meal(&semester, date(9, 8), PaymentMethod::MealSwipe, None),
            meal(&semester, date(9, 9), PaymentMethod::MealExchange, None),
            meal(&semester, date(9, 10), PaymentMethod::DebitCard, Some(400)),
        ];

        let trends = SpendingTrends::build(&semester, &logs, date(9, 10));

        assert_eq!(trends.weeks.len(), 2);
        let first = &trends.weeks[0];
        assert_eq!((first.start, first.end), (date(9, 1), date(9, 7)));
        assert_eq!(first.meal_swipes, 1);
        assert_eq!(first.dining_dollars, Money::from_cents(850));

        let second = &trends.weeks[1];
        assert_eq!(second.week, 2);
        assert_eq!(second.meal_swipes, 1);
        assert_eq!(second.meal_exchanges, 1);
        assert_eq!(second.debit_card, Money::from_cents(400));
        assert!(second.dining_dollars.is_zero());

        assert_eq!(
            trends.totals(),
            (Money::from_cents(850), 2, 1, Money::from_cents(400))
        );
    }

    #[test]
    fn test_final_week_is_clipped_to_semester_end() {
        let semester = semester();

        let trends = SpendingTrends::build(&semester, &[], date(11, 1));

        assert_eq!(trends.weeks.len(), 4);
        let last = trends.weeks.last().unwrap();
        assert_eq!((last.start, last.end), (date(9, 22), date(9, 24)));
        assert!(trends.weeks.iter().all(WeeklyUsage::is_empty));
    }

    #[test]
    fn test_no_weeks_before_start() {
        let semester = semester();
        let logs = vec![meal(&semester, date(9, 2), PaymentMethod::MealSwipe, None)];

        let trends = SpendingTrends::build(&semester, &logs, date(8, 20));
        assert!(trends.weeks.is_empty());
    }

    #[test]
    fn test_ignores_logs_after_today() {
        let semester = semester();
        let logs = vec![meal(&semester, date(9, 12), PaymentMethod::MealSwipe, None)];

        let trends = SpendingTrends::build(&semester, &logs, date(9, 3));

        assert_eq!(trends.weeks.len(), 1);
        assert!(trends.weeks[0].is_empty());
    }
}
