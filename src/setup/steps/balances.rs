//! Meal plan balances step

use std::io::{BufRead, Write};

use crate::error::MealPlanResult;
use crate::models::Money;
use crate::setup::prompt::Prompt;
use crate::setup::wizard::SetupDraft;

use super::{answer, StepOutcome};

fn non_negative(amount: &Money) -> Result<(), String> {
    if amount.is_negative() {
        Err("Amount cannot be negative".into())
    } else {
        Ok(())
    }
}

fn parse_money(s: &str) -> Result<Money, String> {
    Money::parse(s).map_err(|e| e.to_string())
}

/// Collects the starting balance of every resource pool
pub struct BalancesStep;

impl BalancesStep {
    pub fn run<R: BufRead, W: Write>(
        prompt: &mut Prompt<R, W>,
        draft: &mut SetupDraft,
    ) -> MealPlanResult<StepOutcome> {
        prompt.say("Enter your meal plan balances. Use 0 for anything you don't have.")?;

        let dining = answer!(prompt.ask_with(
            "Dining dollars",
            draft.dining_dollars,
            parse_money,
            non_negative,
        )?);
        draft.dining_dollars = Some(dining);

        let swipes: u32 = answer!(prompt.ask("Meal swipes", draft.meal_swipes)?);
        draft.meal_swipes = Some(swipes);

        let exchanges: u32 = answer!(prompt.ask("Meal exchanges", draft.meal_exchanges)?);
        draft.meal_exchanges = Some(exchanges);

        let debit = answer!(prompt.ask_with(
            "Debit card balance",
            draft.debit_balance,
            parse_money,
            non_negative,
        )?);
        draft.debit_balance = Some(debit);

        Ok(StepOutcome::Next)
    }
}
