//! Interactive first-run setup

use std::io;

use crate::config::paths::MealPlanPaths;
use crate::config::settings::Settings;
use crate::error::MealPlanResult;
use crate::services::SemesterService;
use crate::setup::{run_interactive, Prompt, SetupWizard};
use crate::storage::Storage;

/// Run the setup wizard on stdin/stdout and create the active semester
pub fn handle_init_command(
    storage: &Storage,
    settings: &mut Settings,
    paths: &MealPlanPaths,
    name: Option<String>,
) -> MealPlanResult<()> {
    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());
    let mut wizard = SetupWizard::with_meals_per_day(settings.default_meals_per_day);

    let config = run_interactive(&mut prompt, &mut wizard)?;
    let semester = SemesterService::new(storage).create(config, name.as_deref().unwrap_or(""))?;

    settings.setup_completed = true;
    settings.save(paths)?;

    println!();
    println!("Created semester: {}", semester.name);
    println!("  {} to {}", semester.start_date, semester.end_date);
    println!("  ID: {}", semester.id);
    println!();
    println!("Run 'mealplan dashboard' to see your daily budget.");

    Ok(())
}
