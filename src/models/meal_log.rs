//! Meal log model
//!
//! Each logged meal records what was eaten and which pool paid for it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{MealLogId, SemesterId};
use super::money::Money;
use super::semester::Resource;

/// Which meal of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn all() -> &'static [Self] {
        &[Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack]
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Breakfast => write!(f, "Breakfast"),
            Self::Lunch => write!(f, "Lunch"),
            Self::Dinner => write!(f, "Dinner"),
            Self::Snack => write!(f, "Snack"),
        }
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            other => Err(format!("Unknown meal type: {}", other)),
        }
    }
}

/// How a meal was paid for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    MealSwipe,
    DiningDollars,
    MealExchange,
    DebitCard,
}

impl PaymentMethod {
    pub fn all() -> &'static [Self] {
        &[
            Self::MealSwipe,
            Self::DiningDollars,
            Self::MealExchange,
            Self::DebitCard,
        ]
    }

    /// The semester pool this method draws from
    pub fn resource(&self) -> Resource {
        match self {
            Self::MealSwipe => Resource::MealSwipes,
            Self::DiningDollars => Resource::DiningDollars,
            Self::MealExchange => Resource::MealExchanges,
            Self::DebitCard => Resource::DebitCard,
        }
    }

    /// Whether the method spends a currency balance (and so needs an amount)
    pub fn draws_currency(&self) -> bool {
        self.resource().is_currency()
    }

    /// Kebab-case identifier used on the command line and in files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MealSwipe => "meal-swipe",
            Self::DiningDollars => "dining-dollars",
            Self::MealExchange => "meal-exchange",
            Self::DebitCard => "debit-card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MealSwipe => write!(f, "Meal Swipe"),
            Self::DiningDollars => write!(f, "Dining Dollars"),
            Self::MealExchange => write!(f, "Meal Exchange"),
            Self::DebitCard => write!(f, "Debit Card"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::all()
            .iter()
            .copied()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| format!("Unknown payment method: {}", s.trim()))
    }
}

/// A logged meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealLog {
    pub id: MealLogId,

    pub semester_id: SemesterId,

    pub date: NaiveDate,

    pub meal_type: MealType,

    pub payment_method: PaymentMethod,

    /// Present only when the payment method draws from a currency balance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    pub created_at: DateTime<Utc>,
}

impl MealLog {
    pub fn new(
        semester_id: SemesterId,
        date: NaiveDate,
        meal_type: MealType,
        payment_method: PaymentMethod,
        amount: Option<Money>,
    ) -> Self {
        Self {
            id: MealLogId::new(),
            semester_id,
            date,
            meal_type,
            payment_method,
            amount,
            created_at: Utc::now(),
        }
    }

    /// Short description, e.g. "Lunch (Meal Swipe)"
    pub fn describe(&self) -> String {
        format!("{} ({})", self.meal_type, self.payment_method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payment_method() {
        assert_eq!("meal-swipe".parse(), Ok(PaymentMethod::MealSwipe));
        assert_eq!("Dining Dollars".parse(), Ok(PaymentMethod::DiningDollars));
        assert_eq!("debit_card".parse(), Ok(PaymentMethod::DebitCard));
        assert!("cash".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_parse_meal_type() {
        assert_eq!("LUNCH".parse(), Ok(MealType::Lunch));
        assert!("brunch".parse::<MealType>().is_err());
    }

    #[test]
    fn test_payment_resources() {
        assert_eq!(PaymentMethod::MealExchange.resource(), Resource::MealExchanges);
        assert!(PaymentMethod::DiningDollars.draws_currency());
        assert!(!PaymentMethod::MealSwipe.draws_currency());
    }

    #[test]
    fn test_serialization_uses_kebab_case() {
        let log = MealLog::new(
            SemesterId::new(),
            NaiveDate::from_ymd_opt(2025, 9, 3).unwrap(),
            MealType::Dinner,
            PaymentMethod::MealExchange,
            None,
        );
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains(r#""payment_method":"meal-exchange""#));
        assert!(json.contains(r#""meal_type":"dinner""#));
        assert_eq!(log.describe(), "Dinner (Meal Exchange)");
    }
}
