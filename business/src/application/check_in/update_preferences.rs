use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::check_in::errors::CheckInError;
use crate::domain::check_in::model::CheckIn;
use crate::domain::check_in::repository::CheckInRepository;
use crate::domain::check_in::use_cases::update_preferences::{
    UpdatePreferencesParams, UpdatePreferencesUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdatePreferencesUseCaseImpl {
    pub repository: Arc<dyn CheckInRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdatePreferencesUseCase for UpdatePreferencesUseCaseImpl {
    async fn execute(&self, params: UpdatePreferencesParams) -> Result<CheckIn, CheckInError> {
        self.logger
            .info(&format!("Updating preferences for check-in {}", params.id));

        let mut check_in = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CheckInError::NotFound,
                other => CheckInError::Repository(other),
            })?;

        check_in.update_preferences(params.diet_preference, params.lunch_timing);
        self.repository.save(&check_in).await?;

        Ok(check_in)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::check_in::model::NewCheckInProps;
    use crate::domain::check_in::value_objects::{DietPreference, LunchTiming};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CheckInRepo {}

        #[async_trait]
        impl CheckInRepository for CheckInRepo {
            async fn get_all(&self) -> Result<Vec<CheckIn>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<CheckIn, RepositoryError>;
            async fn save(&self, check_in: &CheckIn) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn existing() -> CheckIn {
        CheckIn::new(NewCheckInProps {
            name: "Meera Iyer".to_string(),
            email: "meera@example.com".to_string(),
            diet_preference: DietPreference::Veg,
            lunch_timing: LunchTiming::One,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_save_new_default_diet_and_follow_it_today() {
        let stored = existing();
        let id = stored.id;
        let mut mock_repo = MockCheckInRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(move |i| *i == id)
            .returning(move |_| Ok(stored.clone()));
        mock_repo
            .expect_save()
            .withf(|c| {
                c.diet_preference == DietPreference::NonVeg
                    && c.todays_actual_diet == DietPreference::NonVeg
                    && c.lunch_timing == LunchTiming::Three
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdatePreferencesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdatePreferencesParams {
                id,
                diet_preference: Some(DietPreference::NonVeg),
                lunch_timing: Some(LunchTiming::Three),
            })
            .await
            .unwrap();

        assert!(!updated.skip_meal_today);
    }

    #[tokio::test]
    async fn should_return_not_found_when_check_in_missing() {
        let mut mock_repo = MockCheckInRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdatePreferencesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdatePreferencesParams {
                id: Uuid::new_v4(),
                diet_preference: None,
                lunch_timing: Some(LunchTiming::Noon),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CheckInError::NotFound));
    }
}
