//! Weekly usage table

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::reports::SpendingTrends;

#[derive(Tabled)]
struct WeekRow {
    #[tabled(rename = "Week")]
    week: String,
    #[tabled(rename = "Dates")]
    dates: String,
    #[tabled(rename = "Dining $")]
    dining_dollars: String,
    #[tabled(rename = "Swipes")]
    swipes: u32,
    #[tabled(rename = "Exchanges")]
    exchanges: u32,
    #[tabled(rename = "Debit")]
    debit: String,
}

/// Render one row per week plus a total row
pub fn format_trends_table(trends: &SpendingTrends, currency: &str) -> String {
    if trends.weeks.is_empty() {
        return format!("{} hasn't started yet.\n", trends.semester_name);
    }

    let mut rows: Vec<WeekRow> = trends
        .weeks
        .iter()
        .map(|w| WeekRow {
            week: format!("Week {}", w.week),
            dates: format!("{} - {}", w.start.format("%b %d"), w.end.format("%b %d")),
            dining_dollars: w.dining_dollars.format_with_symbol(currency),
            swipes: w.meal_swipes,
            exchanges: w.meal_exchanges,
            debit: w.debit_card.format_with_symbol(currency),
        })
        .collect();

    let (dining, swipes, exchanges, debit) = trends.totals();
    rows.push(WeekRow {
        week: "Total".to_string(),
        dates: String::new(),
        dining_dollars: dining.format_with_symbol(currency),
        swipes,
        exchanges,
        debit: debit.format_with_symbol(currency),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("Weekly usage: {}\n{}\n", trends.semester_name, table)
}
