//! First-run setup wizard
//!
//! The wizard itself is a pure state machine (`wizard`); `steps` and
//! `runner` drive it interactively over any reader and writer.

pub mod prompt;
pub mod runner;
pub mod steps;
pub mod wizard;

pub use prompt::{Prompt, Reply};
pub use runner::run_interactive;
pub use wizard::{OnboardingConfig, SetupDraft, SetupWizard, WizardStep, DEFAULT_MEALS_PER_DAY};
