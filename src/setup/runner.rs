//! Interactive driver for the setup wizard
//!
//! Runs one step per wizard state until the wizard completes. Typing
//! `back` at any prompt returns to the previous step with its answers kept.

use std::io::{BufRead, Write};

use crate::error::{MealPlanError, MealPlanResult};

use super::prompt::Prompt;
use super::steps::{BalancesStep, DatesStep, PreferencesStep, StepOutcome};
use super::wizard::{OnboardingConfig, SetupDraft, SetupWizard, WizardStep};

type StepFn<R, W> = fn(&mut Prompt<R, W>, &mut SetupDraft) -> MealPlanResult<StepOutcome>;

/// Walk the wizard interactively and return the finished configuration
pub fn run_interactive<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    wizard: &mut SetupWizard,
) -> MealPlanResult<OnboardingConfig> {
    prompt.say("")?;
    prompt.say("Welcome! Let's set up your meal plan.")?;
    prompt.say("Type 'back' at any prompt to return to the previous step.")?;

    loop {
        let step = wizard.step();
        let run_step: StepFn<R, W> = match step {
            WizardStep::Dates => DatesStep::run,
            WizardStep::Balances => BalancesStep::run,
            WizardStep::Preferences => PreferencesStep::run,
            WizardStep::Complete => {
                return Err(MealPlanError::Validation("Setup already completed".into()))
            }
        };

        prompt.say("")?;
        prompt.say(&format!("Step {} of 3: {}", step.number(), step.title()))?;

        let outcome = run_step(prompt, wizard.draft_mut())?;

        match outcome {
            StepOutcome::Back => {
                wizard.back();
            }
            StepOutcome::Next if step == WizardStep::Preferences => {
                if let Some(config) = wizard.complete() {
                    return Ok(config);
                }
            }
            StepOutcome::Next => {
                wizard.next();
            }
        }
    }
}
