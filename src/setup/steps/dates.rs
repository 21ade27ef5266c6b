//! Semester dates step

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::MealPlanResult;
use crate::setup::prompt::Prompt;
use crate::setup::wizard::SetupDraft;

use super::{answer, StepOutcome};

/// Collects the semester start and end dates
pub struct DatesStep;

impl DatesStep {
    pub fn run<R: BufRead, W: Write>(
        prompt: &mut Prompt<R, W>,
        draft: &mut SetupDraft,
    ) -> MealPlanResult<StepOutcome> {
        prompt.say("When does your semester start and end? (YYYY-MM-DD)")?;

        let start: NaiveDate = answer!(prompt.ask("Start date", draft.semester_start)?);
        draft.semester_start = Some(start);

        // A kept end date from an earlier pass may no longer follow the new start
        let current_end = draft.semester_end.filter(|end| *end > start);
        let end = answer!(prompt.ask_with(
            "End date",
            current_end,
            |s| {
                s.parse::<NaiveDate>()
                    .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", s))
            },
            |end| {
                if *end > start {
                    Ok(())
                } else {
                    Err("End date must be after the start date".into())
                }
            },
        )?);
        draft.semester_end = Some(end);

        Ok(StepOutcome::Next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_must_follow_start() {
        let mut prompt = Prompt::new("2025-08-25\n2025-08-01\n2025-12-15\n".as_bytes(), Vec::new());
        let mut draft = SetupDraft::default();

        let outcome = DatesStep::run(&mut prompt, &mut draft).unwrap();
        assert_eq!(outcome, StepOutcome::Next);
        assert_eq!(draft.semester_start, NaiveDate::from_ymd_opt(2025, 8, 25));
        assert_eq!(draft.semester_end, NaiveDate::from_ymd_opt(2025, 12, 15));
    }
}
