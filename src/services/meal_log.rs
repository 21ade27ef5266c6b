//! Meal log service
//!
//! Logging a meal draws down one of the semester's resource pools and
//! leaves two records behind: the meal log itself and a `Meal` transaction
//! so the meal shows up in the recent activity feed.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::audit::{AuditEntry, EntityType};
use crate::error::{MealPlanError, MealPlanResult};
use crate::models::{MealLog, MealType, Money, PaymentMethod, ResourceBalances, SemesterId, Transaction};
use crate::storage::DataStore;

/// Input for logging a meal
#[derive(Debug, Clone)]
pub struct NewMealLog {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub payment_method: PaymentMethod,
    /// Required for currency methods, absent for swipes and exchanges
    pub amount: Option<Money>,
}

/// Take one meal's worth out of the matching pool
fn deduct(balances: &mut ResourceBalances, method: PaymentMethod, amount: Money) -> MealPlanResult<()> {
    let insufficient = |needed: String, available: String| MealPlanError::InsufficientBalance {
        resource: method.resource().to_string(),
        needed,
        available,
    };

    match method {
        PaymentMethod::MealSwipe => {
            balances.meal_swipes = balances
                .meal_swipes
                .checked_sub(1)
                .ok_or_else(|| insufficient("1".into(), "0".into()))?;
        }
        PaymentMethod::MealExchange => {
            balances.meal_exchanges = balances
                .meal_exchanges
                .checked_sub(1)
                .ok_or_else(|| insufficient("1".into(), "0".into()))?;
        }
        PaymentMethod::DiningDollars | PaymentMethod::DebitCard => {
            let pool = if method == PaymentMethod::DiningDollars {
                &mut balances.dining_dollars
            } else {
                &mut balances.debit_card
            };
            let available = *pool;
            *pool = available
                .checked_sub(amount)
                .filter(|left| !left.is_negative())
                .ok_or_else(|| insufficient(amount.to_string(), available.to_string()))?;
        }
    }

    Ok(())
}

/// Service for meal logging
pub struct MealLogService<'a> {
    store: &'a dyn DataStore,
}

impl<'a> MealLogService<'a> {
    pub fn new(store: &'a dyn DataStore) -> Self {
        Self { store }
    }

    /// Log a meal against the active semester
    ///
    /// Every check runs before anything is written, so a rejected meal
    /// leaves balances, logs and transactions untouched.
    pub fn log(&self, input: NewMealLog) -> MealPlanResult<MealLog> {
        let semester = self
            .store
            .active_semester()?
            .ok_or(MealPlanError::NoActiveSemester)?;

        let method = input.payment_method;
        let amount = match (method.draws_currency(), input.amount) {
            (true, Some(amount)) if amount.is_positive() => Some(amount),
            (true, _) => {
                warn!("rejected {} meal without a positive amount", method);
                return Err(MealPlanError::Validation(format!(
                    "{} meals need an amount greater than zero",
                    method
                )));
            }
            (false, None) => None,
            (false, Some(_)) => {
                warn!("rejected {} meal with an amount", method);
                return Err(MealPlanError::Validation(format!(
                    "{} meals use one {} and don't take an amount",
                    method,
                    method.to_string().to_lowercase()
                )));
            }
        };

        let before = semester.clone();
        let mut semester = semester;
        if let Err(e) = deduct(&mut semester.current, method, amount.unwrap_or_default()) {
            warn!("rejected meal on `{}`: {}", semester.name, e);
            return Err(e);
        }

        let log = MealLog::new(semester.id, input.date, input.meal_type, method, amount);
        let transaction = Transaction::meal(
            semester.id,
            amount.unwrap_or_default(),
            log.describe(),
            input.date,
        );

        // Balances only move once the meal and its transaction are stored
        self.store.insert_meal_log(log.clone())?;
        self.store.insert_transaction(transaction.clone())?;
        self.store.update_semester(semester.clone())?;

        self.store.record(&AuditEntry::update(
            EntityType::Semester,
            semester.id.to_string(),
            Some(semester.name.clone()),
            &before,
            &semester,
        ))?;
        self.store.record(&AuditEntry::create(
            EntityType::MealLog,
            log.id.to_string(),
            Some(log.describe()),
            &log,
        ))?;
        self.store.record(&AuditEntry::create(
            EntityType::Transaction,
            transaction.id.to_string(),
            Some(transaction.description.clone()),
            &transaction,
        ))?;

        info!(
            "logged {} on {}; {} left",
            log.describe(),
            log.date,
            semester.current.format(method.resource())
        );
        Ok(log)
    }

    /// A semester's meal logs, newest first
    pub fn list(&self, semester_id: SemesterId) -> MealPlanResult<Vec<MealLog>> {
        self.store.meal_logs(semester_id)
    }
}
