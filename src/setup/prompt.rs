//! Line-oriented prompting over any reader/writer pair
//!
//! Steps never touch stdin/stdout directly, so the whole wizard can be
//! driven from a byte slice in tests.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{MealPlanError, MealPlanResult};

/// Keyword that returns to the previous step
pub const BACK_KEYWORD: &str = "back";

/// What the user typed at a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Value(T),
    Back,
}

/// A prompt session over an input and an output stream
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of text
    pub fn say(&mut self, text: &str) -> MealPlanResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Read one trimmed line; end of input cancels setup
    fn read_line(&mut self, label: &str) -> MealPlanResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MealPlanError::SetupCancelled);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer parses and passes `check`
    ///
    /// A blank answer takes `current` when there is one (a value entered
    /// before going back, or a pre-filled default) and re-prompts otherwise.
    pub fn ask_with<T, P, C>(
        &mut self,
        label: &str,
        current: Option<T>,
        parse: P,
        check: C,
    ) -> MealPlanResult<Reply<T>>
    where
        T: Clone + std::fmt::Display,
        P: Fn(&str) -> Result<T, String>,
        C: Fn(&T) -> Result<(), String>,
    {
        let label = match &current {
            Some(value) => format!("{} [{}]: ", label, value),
            None => format!("{}: ", label),
        };

        loop {
            let line = self.read_line(&label)?;

            if line.eq_ignore_ascii_case(BACK_KEYWORD) {
                return Ok(Reply::Back);
            }

            let value = if line.is_empty() {
                match &current {
                    Some(value) => value.clone(),
                    None => {
                        self.say("  A value is required.")?;
                        continue;
                    }
                }
            } else {
                match parse(&line) {
                    Ok(value) => value,
                    Err(msg) => {
                        self.say(&format!("  {}", msg))?;
                        continue;
                    }
                }
            };

            match check(&value) {
                Ok(()) => return Ok(Reply::Value(value)),
                Err(msg) => self.say(&format!("  {}", msg))?,
            }
        }
    }

    /// Ask for any `FromStr` value with no extra check
    pub fn ask<T>(&mut self, label: &str, current: Option<T>) -> MealPlanResult<Reply<T>>
    where
        T: Clone + std::fmt::Display + FromStr,
        T::Err: std::fmt::Display,
    {
        self.ask_with(
            label,
            current,
            |s| s.parse::<T>().map_err(|e| format!("Invalid value: {}", e)),
            |_| Ok(()),
        )
    }
}
