//! CLI commands for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::error::{MealPlanError, MealPlanResult};
use crate::export::{export_full_json, export_full_yaml, export_meal_logs_csv, export_transactions_csv};
use crate::services::{CategoryService, MealLogService, SemesterService, TransactionService};
use crate::storage::Storage;

/// Full export format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON (machine-readable)
    Json,
    /// YAML (human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the active semester with all of its records
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export transactions to CSV
    Transactions {
        /// Output file path
        output: PathBuf,
    },

    /// Export meal logs to CSV
    Meals {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> MealPlanResult<()> {
    let semester = SemesterService::new(storage).require_active()?;

    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let mut writer = create_output(&output)?;
            match format {
                ExportFormat::Json => export_full_json(storage, semester.id, &mut writer, pretty)?,
                ExportFormat::Yaml => export_full_yaml(storage, semester.id, &mut writer)?,
            }
            writer.flush()?;
            println!("Exported {} to: {}", semester.name, output.display());
        }

        ExportCommands::Transactions { output } => {
            let transactions = TransactionService::new(storage).list(semester.id)?;
            let categories = CategoryService::new(storage).list(semester.id)?;
            export_transactions_csv(&transactions, &categories, create_output(&output)?)?;
            println!(
                "Exported {} transactions to: {}",
                transactions.len(),
                output.display()
            );
        }

        ExportCommands::Meals { output } => {
            let logs = MealLogService::new(storage).list(semester.id)?;
            export_meal_logs_csv(&logs, create_output(&output)?)?;
            println!("Exported {} meal logs to: {}", logs.len(), output.display());
        }
    }

    Ok(())
}

fn create_output(path: &Path) -> MealPlanResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        MealPlanError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
