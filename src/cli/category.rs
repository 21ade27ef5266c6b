//! Budget category CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_category_table, format_preset_list};
use crate::error::MealPlanResult;
use crate::reports::CategoryProgress;
use crate::services::{CategoryService, NewBudgetCategory, SemesterService};
use crate::storage::Storage;

use super::parse_amount;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a budget category to the active semester
    Add {
        /// Category name (a preset name picks up its icon and color)
        name: String,
        /// Allocated amount (e.g., "200" or "200.00")
        amount: String,
        /// Icon name
        #[arg(long)]
        icon: Option<String>,
        /// Color as #rrggbb
        #[arg(long)]
        color: Option<String>,
    },

    /// List categories with spending progress
    List,

    /// Remove a category (its expenses stay in the history)
    #[command(alias = "rm")]
    Remove {
        /// Category name or ID
        category: String,
    },

    /// Show the category presets
    Presets,
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> MealPlanResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::Add {
            name,
            amount,
            icon,
            color,
        } => {
            let semester = SemesterService::new(storage).require_active()?;
            let category = service.create(NewBudgetCategory {
                semester_id: semester.id,
                name,
                allocated_amount: parse_amount(&amount)?,
                icon,
                color,
            })?;

            println!("Created category: {}", category.name);
            println!(
                "  Allocated: {}",
                category
                    .allocated_amount
                    .format_with_symbol(&settings.currency_symbol)
            );
            println!("  ID: {}", category.id);
        }

        CategoryCommands::List => {
            let semester = SemesterService::new(storage).require_active()?;
            let progress: Vec<_> = service
                .list(semester.id)?
                .into_iter()
                .map(CategoryProgress::build)
                .collect();
            print!("{}", format_category_table(&progress, &settings.currency_symbol));
        }

        CategoryCommands::Remove { category } => {
            let semester = SemesterService::new(storage).require_active()?;
            let removed = service.remove(semester.id, &category)?;
            println!("Removed category: {}", removed.name);
        }

        CategoryCommands::Presets => {
            print!("{}", format_preset_list());
        }
    }

    Ok(())
}
