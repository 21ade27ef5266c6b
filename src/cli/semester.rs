//! Semester CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{MealPlanError, MealPlanResult};
use crate::display::{format_semester_details, format_semester_list};
use crate::services::SemesterService;
use crate::setup::{OnboardingConfig, SetupWizard, WizardStep};
use crate::storage::Storage;

use super::{parse_amount, parse_date};

/// Semester subcommands
#[derive(Subcommand)]
pub enum SemesterCommands {
    /// Create a semester without prompts (it becomes the active one)
    Create {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: String,
        /// Dining dollars balance (e.g., "500" or "500.00")
        #[arg(long, default_value = "0")]
        dining_dollars: String,
        /// Number of meal swipes
        #[arg(long, default_value_t = 0)]
        swipes: u32,
        /// Number of meal exchanges
        #[arg(long, default_value_t = 0)]
        exchanges: u32,
        /// Debit card balance
        #[arg(long, default_value = "0")]
        debit: String,
        /// Planned meals per day (1-5)
        #[arg(long)]
        meals_per_day: Option<u8>,
        /// Semester name, defaults to the season and year
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Show the active semester
    Show,

    /// List all semesters
    List,
}

/// Handle a semester command
pub fn handle_semester_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SemesterCommands,
) -> MealPlanResult<()> {
    let service = SemesterService::new(storage);

    match cmd {
        SemesterCommands::Create {
            start,
            end,
            dining_dollars,
            swipes,
            exchanges,
            debit,
            meals_per_day,
            name,
        } => {
            let mut wizard = SetupWizard::with_meals_per_day(
                meals_per_day.unwrap_or(settings.default_meals_per_day),
            );

            let draft = wizard.draft_mut();
            draft.semester_start = Some(parse_date(&start)?);
            draft.semester_end = Some(parse_date(&end)?);
            draft.dining_dollars = Some(parse_amount(&dining_dollars)?);
            draft.meal_swipes = Some(swipes);
            draft.meal_exchanges = Some(exchanges);
            draft.debit_balance = Some(parse_amount(&debit)?);

            let config = complete_wizard(&mut wizard)?;
            let semester = service.create(config, name.as_deref().unwrap_or(""))?;

            println!("Created semester: {}", semester.name);
            println!("  {} to {}", semester.start_date, semester.end_date);
            println!("  ID: {}", semester.id);
        }

        SemesterCommands::Show => {
            let semester = service.require_active()?;
            print!(
                "{}",
                format_semester_details(&semester, &settings.currency_symbol)
            );
        }

        SemesterCommands::List => {
            print!("{}", format_semester_list(&service.list()?));
        }
    }

    Ok(())
}

/// Walk a pre-filled wizard to completion, naming the first step that is incomplete
fn complete_wizard(wizard: &mut SetupWizard) -> MealPlanResult<OnboardingConfig> {
    while wizard.step() != WizardStep::Preferences {
        if !wizard.next() {
            return Err(MealPlanError::Validation(format!(
                "{} are incomplete",
                wizard.step().title()
            )));
        }
    }

    wizard.complete().ok_or_else(|| {
        MealPlanError::Validation(format!("{} are incomplete", WizardStep::Preferences.title()))
    })
}
