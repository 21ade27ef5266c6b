//! Semester service

use chrono::{Datelike, NaiveDate};
use tracing::{info, warn};

use crate::audit::{AuditEntry, EntityType};
use crate::error::{MealPlanError, MealPlanResult};
use crate::models::Semester;
use crate::setup::OnboardingConfig;
use crate::storage::DataStore;

/// Name used when setup doesn't supply one, e.g. "Fall 2025"
pub fn default_semester_name(start: NaiveDate) -> String {
    let season = match start.month() {
        1..=5 => "Spring",
        6 | 7 => "Summer",
        _ => "Fall",
    };
    format!("{} {}", season, start.year())
}

/// Service for semester management
pub struct SemesterService<'a> {
    store: &'a dyn DataStore,
}

impl<'a> SemesterService<'a> {
    pub fn new(store: &'a dyn DataStore) -> Self {
        Self { store }
    }

    /// Create the active semester from a completed setup
    ///
    /// Current balances start equal to the initial ones and any previously
    /// active semester is deactivated.
    pub fn create(&self, config: OnboardingConfig, name: &str) -> MealPlanResult<Semester> {
        let name = match name.trim() {
            "" => default_semester_name(config.semester_start),
            trimmed => trimmed.to_string(),
        };

        let semester = Semester::new(
            name,
            config.semester_start,
            config.semester_end,
            config.balances(),
            config.meals_per_day,
        );

        if let Err(e) = semester.validate() {
            warn!("rejected semester `{}`: {}", semester.name, e);
            return Err(MealPlanError::Validation(e.to_string()));
        }

        self.store.insert_semester(semester.clone())?;
        self.store.record(&AuditEntry::create(
            EntityType::Semester,
            semester.id.to_string(),
            Some(semester.name.clone()),
            &semester,
        ))?;

        info!(
            "created semester `{}` ({} to {})",
            semester.name, semester.start_date, semester.end_date
        );
        Ok(semester)
    }

    pub fn active(&self) -> MealPlanResult<Option<Semester>> {
        self.store.active_semester()
    }

    /// The active semester, or `NoActiveSemester`
    pub fn require_active(&self) -> MealPlanResult<Semester> {
        self.store
            .active_semester()?
            .ok_or(MealPlanError::NoActiveSemester)
    }

    pub fn list(&self) -> MealPlanResult<Vec<Semester>> {
        self.store.semesters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{create_test_storage, date, onboarding};

    #[test]
    fn test_create_sets_current_to_initial() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SemesterService::new(&storage);

        let semester = service.create(onboarding(), "Fall 2025").unwrap();

        assert_eq!(semester.current, semester.initial);
        assert_eq!(semester.initial.meal_swipes, 100);
        assert_eq!(service.require_active().unwrap().id, semester.id);
        assert_eq!(storage.audit().read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_only_one_active() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SemesterService::new(&storage);

        let first = service.create(onboarding(), "Fall").unwrap();
        let second = service.create(onboarding(), "Fall again").unwrap();

        let semesters = service.list().unwrap();
        assert_eq!(semesters.len(), 2);
        assert_eq!(semesters.iter().filter(|s| s.is_active).count(), 1);
        assert_eq!(service.require_active().unwrap().id, second.id);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_require_active_without_semester() {
        let (_temp_dir, storage) = create_test_storage();
        let err = SemesterService::new(&storage).require_active().unwrap_err();
        assert!(matches!(err, MealPlanError::NoActiveSemester));
    }

    #[test]
    fn test_invalid_dates_rejected_without_write() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SemesterService::new(&storage);

        let mut config = onboarding();
        config.semester_end = config.semester_start;

        let err = service.create(config, "Broken").unwrap_err();
        assert!(err.is_validation());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_default_name() {
        assert_eq!(default_semester_name(date(2025, 8, 25)), "Fall 2025");
        assert_eq!(default_semester_name(date(2026, 1, 12)), "Spring 2026");
        assert_eq!(default_semester_name(date(2026, 6, 1)), "Summer 2026");

        let (_temp_dir, storage) = create_test_storage();
        let semester = SemesterService::new(&storage).create(onboarding(), "  ").unwrap();
        assert_eq!(semester.name, "Fall 2025");
    }
}
