//! Month calendar grid

use chrono::{Datelike, NaiveDate};

use crate::reports::CalendarMonth;

const CELL: usize = 10;

/// Render a Sunday-first month grid with spending and meal counts per day
pub fn format_calendar(calendar: &CalendarMonth, today: Option<NaiveDate>, currency: &str) -> String {
    let mut output = format!("{}\n", calendar.first_day().format("%B %Y"));

    for name in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
        output.push_str(&format!("{:<width$}", name, width = CELL));
    }
    output.push('\n');

    let mut cells: Vec<[String; 3]> = vec![Default::default(); calendar.leading_blanks()];
    for day in &calendar.days {
        let marker = if Some(day.date) == today { "*" } else { "" };
        let spending = if day.spending.is_zero() {
            String::new()
        } else {
            day.spending.format_with_symbol(currency)
        };
        let meals = match day.meals {
            0 => String::new(),
            1 => "1 meal".to_string(),
            n => format!("{} meals", n),
        };
        cells.push([format!("{}{}", day.date.day(), marker), spending, meals]);
    }

    for week in cells.chunks(7) {
        for line in 0..3 {
            let row: String = week
                .iter()
                .map(|cell| format!("{:<width$}", cell[line], width = CELL))
                .collect();
            output.push_str(row.trim_end());
            output.push('\n');
        }
    }

    output.push_str(&format!(
        "\nTotal: {} spent, {} meals\n",
        calendar.total_spending().format_with_symbol(currency),
        calendar.total_meals()
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealLog, MealType, Money, PaymentMethod, SemesterId, Transaction};

    #[test]
    fn test_grid() {
        let semester = SemesterId::new();
        let day = NaiveDate::from_ymd_opt(2025, 9, 3).unwrap();
        let transactions = vec![Transaction::meal(semester, Money::from_cents(850), "Lunch", day)];
        let meals = vec![
            MealLog::new(semester, day, MealType::Lunch, PaymentMethod::DiningDollars, Some(Money::from_cents(850))),
            MealLog::new(semester, day, MealType::Dinner, PaymentMethod::MealSwipe, None),
        ];
        let calendar = CalendarMonth::build(2025, 9, &transactions, &meals).unwrap();

        let output = format_calendar(&calendar, Some(day), "$");
        assert!(output.starts_with("September 2025\n"));
        assert!(output.contains("3*"));
        assert!(output.contains("$8.50"));
        assert!(output.contains("2 meals"));
        assert!(output.contains("Total: $8.50 spent, 2 meals"));
    }
}
