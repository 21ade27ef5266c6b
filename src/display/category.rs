//! Budget category table

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::CategoryPreset;
use crate::reports::CategoryProgress;

use super::report::{format_bar, format_percentage, status_label};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Render categories with their spending progress as a table
pub fn format_category_table(categories: &[CategoryProgress], currency: &str) -> String {
    if categories.is_empty() {
        return "No budget categories yet.\n\nRun 'mealplan category add <name> <amount>' to create one.\n"
            .to_string();
    }

    let rows = categories.iter().map(|p| CategoryRow {
        name: p.category.name.clone(),
        allocated: p.category.allocated_amount.format_with_symbol(currency),
        spent: p.category.spent_amount.format_with_symbol(currency),
        remaining: p.category.remaining().format_with_symbol(currency),
        progress: format!("{} {}", format_bar(p.percentage, 10), format_percentage(p.percentage)),
        status: status_label(p.status).to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// List the quick-start presets
pub fn format_preset_list() -> String {
    let mut output = String::from("Category presets:\n");
    for preset in CategoryPreset::all() {
        output.push_str(&format!(
            "  {:18} icon: {:13} color: {}\n",
            preset.name, preset.icon, preset.color
        ));
    }
    output
}
