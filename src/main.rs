use anyhow::Result;
use clap::{Parser, Subcommand};

use mealplan_cli::cli::{
    handle_calendar_command, handle_category_command, handle_dashboard_command,
    handle_expense_command, handle_export_command, handle_init_command, handle_meal_command,
    handle_semester_command, handle_transaction_command, handle_trends_command,
};
use mealplan_cli::config::{paths::MealPlanPaths, settings::Settings};
use mealplan_cli::storage::Storage;
use mealplan_cli::utils::init_tracing;

#[derive(Parser)]
#[command(
    name = "mealplan",
    version,
    about = "Track a semester meal plan and student budget from the terminal",
    long_about = "mealplan keeps track of meal swipes, dining dollars, meal exchanges \
                  and a debit balance across a semester, and turns what is left into \
                  a daily allowance for the days remaining."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Set up a semester interactively
    Init {
        /// Semester name, defaults to the season and year
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Semester management commands
    #[command(subcommand)]
    Semester(mealplan_cli::cli::SemesterCommands),

    /// Budget category commands
    #[command(subcommand)]
    Category(mealplan_cli::cli::CategoryCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(mealplan_cli::cli::ExpenseCommands),

    /// Meal logging commands
    #[command(subcommand)]
    Meal(mealplan_cli::cli::MealCommands),

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(mealplan_cli::cli::TransactionCommands),

    /// Show balances, daily allowances and budget progress
    #[command(alias = "status")]
    Dashboard {
        /// Compute as of this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        as_of: Option<String>,
        /// Print the dashboard as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a month of spending and meals
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Show week-by-week usage of each meal plan pool
    Trends {
        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        as_of: Option<String>,
        /// Print the weeks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export data to JSON, YAML or CSV
    #[command(subcommand)]
    Export(mealplan_cli::cli::ExportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = MealPlanPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::open(paths.clone())?;

    match cli.command {
        Some(Commands::Init { name }) => {
            println!("Setting up mealplan at: {}", paths.data_dir().display());
            handle_init_command(&storage, &mut settings, &paths, name)?;
        }
        Some(Commands::Semester(cmd)) => handle_semester_command(&storage, &settings, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&storage, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Meal(cmd)) => handle_meal_command(&storage, &settings, cmd)?,
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&storage, &settings, cmd)?,
        Some(Commands::Dashboard { as_of, json }) => {
            handle_dashboard_command(&storage, &settings, as_of, json)?
        }
        Some(Commands::Calendar { month, as_of }) => {
            handle_calendar_command(&storage, &settings, month, as_of)?
        }
        Some(Commands::Trends { as_of, json }) => {
            handle_trends_command(&storage, &settings, as_of, json)?
        }
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        Some(Commands::Config) => {
            println!("mealplan Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Date format:           {}", settings.date_format);
            println!("  Recent transactions:   {}", settings.recent_transactions_limit);
            println!("  Default meals per day: {}", settings.default_meals_per_day);
            println!("  Setup completed:       {}", settings.setup_completed);
        }
        None => {
            println!("mealplan - semester meal plan and budget tracker");
            println!();
            println!("Run 'mealplan init' to set up your semester.");
            println!("Run 'mealplan --help' for usage information.");
        }
    }

    Ok(())
}
