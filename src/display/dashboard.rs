//! Dashboard rendering

use crate::reports::Dashboard;

use super::report::{format_bar, format_percentage, format_quantity, format_rate, separator, tier_label};
use super::transaction::format_transaction_feed;

const WIDTH: usize = 60;

/// Render the dashboard as plain text
pub fn format_dashboard(dashboard: &Dashboard, currency: &str) -> String {
    let semester = &dashboard.semester;
    let timeline = &dashboard.timeline;
    let mut output = String::new();

    output.push_str(&format!(
        "{} ({} to {})\n",
        semester.name, semester.start_date, semester.end_date
    ));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if timeline.is_over() {
        output.push_str("Semester has ended\n");
    } else {
        output.push_str(&format!(
            "Day {} of {}  {}  {} days left\n",
            timeline.days_elapsed.max(0),
            timeline.total_days,
            format_bar(timeline.percent_elapsed, 20),
            timeline.days_remaining
        ));
    }
    output.push('\n');

    output.push_str("Balances\n");
    for summary in &dashboard.resources {
        output.push_str(&format!(
            "  {:15} {:>10} of {:<10} {:>12}  {} used [{}]\n",
            summary.resource.to_string(),
            format_quantity(summary.resource, summary.current, currency),
            format_quantity(summary.resource, summary.initial, currency),
            format_rate(summary.resource, summary.daily_rate, currency),
            format_percentage(summary.percent_used),
            tier_label(summary.tier)
        ));
    }
    output.push('\n');

    let budget = &dashboard.budget;
    output.push_str(&format!(
        "Budget: {} of {} spent ({}), {} remaining\n",
        budget.total_spent.format_with_symbol(currency),
        budget.total_allocated.format_with_symbol(currency),
        format_percentage(budget.overall_percentage),
        budget.total_remaining.format_with_symbol(currency)
    ));
    for progress in dashboard.over_budget() {
        output.push_str(&format!(
            "  ! {} is over budget by {}\n",
            progress.category.name,
            (-progress.category.remaining()).format_with_symbol(currency)
        ));
    }
    output.push('\n');

    output.push_str("Recent activity\n");
    output.push_str(&format_transaction_feed(&dashboard.recent_transactions, currency));

    output
}
