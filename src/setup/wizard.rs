//! Setup wizard state machine
//!
//! The wizard walks a strictly ordered set of steps (dates, balances,
//! preferences). Moving forward is gated on the current step's required
//! fields; an invalid `next` is a no-op rather than an error. `complete`
//! is the only way to obtain an [`OnboardingConfig`], and it is never
//! produced with a field missing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Money, ResourceBalances};

/// Default meals-per-day pre-filled into a fresh draft
pub const DEFAULT_MEALS_PER_DAY: u8 = 3;

/// Wizard states, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Dates,
    Balances,
    Preferences,
    Complete,
}

impl WizardStep {
    /// One-based position for "Step n of 3" headers
    pub fn number(&self) -> usize {
        match self {
            Self::Dates => 1,
            Self::Balances => 2,
            Self::Preferences => 3,
            Self::Complete => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dates => "Semester Dates",
            Self::Balances => "Meal Plan Details",
            Self::Preferences => "Daily Meal Preferences",
            Self::Complete => "Setup Complete",
        }
    }
}

/// Fields collected so far; `None` means not entered yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupDraft {
    pub semester_start: Option<NaiveDate>,
    pub semester_end: Option<NaiveDate>,
    pub dining_dollars: Option<Money>,
    pub meal_swipes: Option<u32>,
    pub meal_exchanges: Option<u32>,
    pub debit_balance: Option<Money>,
    pub meals_per_day: Option<u8>,
}

impl SetupDraft {
    /// Whether every field the given step requires is present
    ///
    /// Zero counts as present: a plan with no meal exchanges is valid.
    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Dates => self.semester_start.is_some() && self.semester_end.is_some(),
            WizardStep::Balances => {
                self.dining_dollars.is_some()
                    && self.meal_swipes.is_some()
                    && self.meal_exchanges.is_some()
                    && self.debit_balance.is_some()
            }
            WizardStep::Preferences => self.meals_per_day.is_some(),
            WizardStep::Complete => true,
        }
    }

    fn assemble(&self) -> Option<OnboardingConfig> {
        Some(OnboardingConfig {
            semester_start: self.semester_start?,
            semester_end: self.semester_end?,
            dining_dollars: self.dining_dollars?,
            meal_swipes: self.meal_swipes?,
            meal_exchanges: self.meal_exchanges?,
            debit_balance: self.debit_balance?,
            meals_per_day: self.meals_per_day?,
        })
    }
}

/// The fully assembled semester configuration emitted on completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingConfig {
    pub semester_start: NaiveDate,
    pub semester_end: NaiveDate,
    pub dining_dollars: Money,
    pub meal_swipes: u32,
    pub meal_exchanges: u32,
    pub debit_balance: Money,
    pub meals_per_day: u8,
}

impl OnboardingConfig {
    /// Starting balances for the new semester
    pub fn balances(&self) -> ResourceBalances {
        ResourceBalances {
            dining_dollars: self.dining_dollars,
            meal_swipes: self.meal_swipes,
            meal_exchanges: self.meal_exchanges,
            debit_card: self.debit_balance,
        }
    }
}

/// The setup wizard
#[derive(Debug, Clone)]
pub struct SetupWizard {
    step: WizardStep,
    draft: SetupDraft,
}

impl Default for SetupWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupWizard {
    /// Start at the dates step with meals-per-day pre-filled
    pub fn new() -> Self {
        Self::with_meals_per_day(DEFAULT_MEALS_PER_DAY)
    }

    /// Start with a custom meals-per-day default
    pub fn with_meals_per_day(meals_per_day: u8) -> Self {
        Self {
            step: WizardStep::Dates,
            draft: SetupDraft {
                meals_per_day: Some(meals_per_day),
                ..SetupDraft::default()
            },
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &SetupDraft {
        &self.draft
    }

    /// Mutable access for filling in fields; ignored once complete
    pub fn draft_mut(&mut self) -> &mut SetupDraft {
        &mut self.draft
    }

    pub fn is_step_valid(&self) -> bool {
        self.draft.is_step_valid(self.step)
    }

    pub fn is_complete(&self) -> bool {
        self.step == WizardStep::Complete
    }

    /// Advance one step if the current step is valid
    ///
    /// Returns whether the step changed. `next` never reaches `Complete`;
    /// use [`SetupWizard::complete`] from the preferences step.
    pub fn next(&mut self) -> bool {
        if !self.is_step_valid() {
            return false;
        }

        let next = match self.step {
            WizardStep::Dates => WizardStep::Balances,
            WizardStep::Balances => WizardStep::Preferences,
            WizardStep::Preferences | WizardStep::Complete => return false,
        };
        self.step = next;
        true
    }

    /// Go back one step, keeping every entered field
    ///
    /// No-op on the first step and after completion.
    pub fn back(&mut self) -> bool {
        let prev = match self.step {
            WizardStep::Balances => WizardStep::Dates,
            WizardStep::Preferences => WizardStep::Balances,
            WizardStep::Dates | WizardStep::Complete => return false,
        };
        self.step = prev;
        true
    }

    /// Finish the wizard from a valid preferences step
    ///
    /// Returns the assembled configuration, or `None` (leaving the state
    /// unchanged) when called from any other step or with missing fields.
    pub fn complete(&mut self) -> Option<OnboardingConfig> {
        if self.step != WizardStep::Preferences || !self.is_step_valid() {
            return None;
        }

        let config = self.draft.assemble()?;
        self.step = WizardStep::Complete;
        Some(config)
    }
}
