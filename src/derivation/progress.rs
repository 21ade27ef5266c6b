//! Consumption percentages and their qualitative tiers
//!
//! One threshold table serves every display surface: below 30 is low,
//! 30 up to 60 is medium, 60 and above is high. Spending past an allocation
//! overrides the tier entirely.

use serde::Serialize;
use std::fmt;

use crate::models::Money;

/// Lower bound (inclusive) of the medium tier
pub const MEDIUM_THRESHOLD: f64 = 30.0;

/// Lower bound (inclusive) of the high tier
pub const HIGH_THRESHOLD: f64 = 60.0;

/// `numerator` as a percentage of `denominator`, or 0 when the denominator
/// is not positive. Not clamped.
pub fn percentage(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator * 100.0 / denominator
    } else {
        0.0
    }
}

/// Share of an initial allotment already used
pub fn consumption(initial: f64, current: f64) -> f64 {
    percentage(initial - current, initial)
}

/// Clamp a percentage into 0..=100 for progress bars
pub fn clamp_for_display(percentage: f64) -> f64 {
    percentage.clamp(0.0, 100.0)
}

/// Strictly more spent than allocated
pub fn is_over_budget(spent: Money, allocated: Money) -> bool {
    spent > allocated
}

/// Qualitative bucket for a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= HIGH_THRESHOLD {
            Self::High
        } else if percentage >= MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Classification of a category's spending against its allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStatus {
    Within(Tier),
    OverBudget,
}

impl ProgressStatus {
    pub fn classify(spent: Money, allocated: Money) -> Self {
        if is_over_budget(spent, allocated) {
            Self::OverBudget
        } else {
            let pct = percentage(spent.as_f64(), allocated.as_f64());
            Self::Within(Tier::from_percentage(pct))
        }
    }

    pub fn is_over_budget(&self) -> bool {
        matches!(self, Self::OverBudget)
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Within(tier) => write!(f, "{}", tier),
            Self::OverBudget => write!(f, "over budget"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(25.0, 100.0), 25.0);
        assert_eq!(percentage(150.0, 100.0), 150.0);
        assert_eq!(percentage(945.5, 1000.0), 94.55);
    }

    #[test]
    fn test_percentage_non_positive_denominator() {
        assert_eq!(percentage(10.0, 0.0), 0.0);
        assert_eq!(percentage(10.0, -5.0), 0.0);
        assert_eq!(percentage(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::from_percentage(0.0), Tier::Low);
        assert_eq!(Tier::from_percentage(29.999), Tier::Low);
        assert_eq!(Tier::from_percentage(30.0), Tier::Medium);
        assert_eq!(Tier::from_percentage(59.999), Tier::Medium);
        assert_eq!(Tier::from_percentage(60.0), Tier::High);
        assert_eq!(Tier::from_percentage(250.0), Tier::High);
    }

    #[test]
    fn test_over_budget_is_strict() {
        let hundred = Money::from_cents(10000);
        assert!(!is_over_budget(hundred, hundred));
        assert!(is_over_budget(Money::from_cents(10001), hundred));
    }

    #[test]
    fn test_over_budget_overrides_tier() {
        let status = ProgressStatus::classify(Money::from_cents(100), Money::zero());
        assert_eq!(status, ProgressStatus::OverBudget);

        let status = ProgressStatus::classify(Money::from_cents(10000), Money::from_cents(10000));
        assert_eq!(status, ProgressStatus::Within(Tier::High));

        let status = ProgressStatus::classify(Money::zero(), Money::zero());
        assert_eq!(status, ProgressStatus::Within(Tier::Low));
    }

    #[test]
    fn test_consumption_and_clamp() {
        assert_eq!(consumption(100.0, 40.0), 60.0);
        assert_eq!(consumption(0.0, 0.0), 0.0);
        assert_eq!(clamp_for_display(140.0), 100.0);
        assert_eq!(clamp_for_display(-5.0), 0.0);
    }
}
