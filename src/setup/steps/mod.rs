//! Setup wizard steps
//!
//! One interactive step per wizard state. Each step fills its fields into
//! the draft and reports whether the user wants to move on or go back.

pub mod balances;
pub mod dates;
pub mod preferences;

pub use balances::BalancesStep;
pub use dates::DatesStep;
pub use preferences::PreferencesStep;

/// How a step ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Next,
    Back,
}

/// Unwrap a prompt reply or leave the step with `StepOutcome::Back`
macro_rules! answer {
    ($reply:expr) => {
        match $reply {
            $crate::setup::prompt::Reply::Value(value) => value,
            $crate::setup::prompt::Reply::Back => {
                return Ok($crate::setup::steps::StepOutcome::Back)
            }
        }
    };
}

pub(crate) use answer;
