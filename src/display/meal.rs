//! Meal log formatting

use crate::models::MealLog;

/// Format meal logs, newest first as given
pub fn format_meal_log_list(logs: &[MealLog], currency: &str) -> String {
    if logs.is_empty() {
        return "No meals logged yet.\n".to_string();
    }

    let mut output = format!("{:10} {:10} {:15} {:>10}\n", "Date", "Meal", "Paid with", "Amount");
    output.push_str(&"-".repeat(48));
    output.push('\n');

    for log in logs {
        let amount = match log.amount {
            Some(amount) => amount.format_with_symbol(currency),
            None => "-".to_string(),
        };
        output.push_str(&format!(
            "{} {:10} {:15} {:>10}\n",
            log.date.format("%Y-%m-%d"),
            log.meal_type.to_string(),
            log.payment_method.to_string(),
            amount
        ));
    }

    output
}
