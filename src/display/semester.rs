//! Semester details and listing

use crate::models::{Resource, Semester};

use super::report::format_quantity;

/// Semester dates, preferences and every balance as "current of initial"
pub fn format_semester_details(semester: &Semester, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", semester.name));
    output.push_str(&format!(
        "  Dates:          {} to {}\n",
        semester.start_date, semester.end_date
    ));
    output.push_str(&format!("  Meals per day:  {}\n", semester.meals_per_day));
    output.push_str(&format!("  ID:             {}\n\n", semester.id));

    for &resource in Resource::all() {
        output.push_str(&format!(
            "  {:<15} {} of {}\n",
            format!("{}:", resource),
            format_quantity(resource, semester.current.get(resource), currency),
            format_quantity(resource, semester.initial.get(resource), currency),
        ));
    }

    output
}

/// One line per semester; the active one is starred
pub fn format_semester_list(semesters: &[Semester]) -> String {
    if semesters.is_empty() {
        return "No semesters yet. Run 'mealplan init' to create one.\n".to_string();
    }

    semesters
        .iter()
        .map(|s| {
            let marker = if s.is_active { "*" } else { " " };
            format!(
                "{} {:<20} {} to {}  {}\n",
                marker, s.name, s.start_date, s.end_date, s.id
            )
        })
        .collect()
}
