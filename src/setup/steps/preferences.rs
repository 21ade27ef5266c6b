//! Daily meal preferences step

use std::io::{BufRead, Write};

use crate::error::MealPlanResult;
use crate::models::semester::MEALS_PER_DAY_RANGE;
use crate::setup::prompt::Prompt;
use crate::setup::wizard::SetupDraft;

use super::{answer, StepOutcome};

/// Collects the planned number of meals per day
pub struct PreferencesStep;

impl PreferencesStep {
    pub fn run<R: BufRead, W: Write>(
        prompt: &mut Prompt<R, W>,
        draft: &mut SetupDraft,
    ) -> MealPlanResult<StepOutcome> {
        prompt.say("How many meals do you plan to eat per day? (1-5)")?;

        let meals = answer!(prompt.ask_with(
            "Meals per day",
            draft.meals_per_day,
            |s| s.parse::<u8>().map_err(|_| format!("'{}' is not a number", s)),
            |n| {
                if MEALS_PER_DAY_RANGE.contains(n) {
                    Ok(())
                } else {
                    Err("Meals per day must be between 1 and 5".into())
                }
            },
        )?);
        draft.meals_per_day = Some(meals);

        Ok(StepOutcome::Next)
    }
}
