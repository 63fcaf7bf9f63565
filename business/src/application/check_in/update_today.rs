use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::check_in::errors::CheckInError;
use crate::domain::check_in::model::CheckIn;
use crate::domain::check_in::repository::CheckInRepository;
use crate::domain::check_in::use_cases::update_today::{
    UpdateTodaysChoiceParams, UpdateTodaysChoiceUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateTodaysChoiceUseCaseImpl {
    pub repository: Arc<dyn CheckInRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateTodaysChoiceUseCase for UpdateTodaysChoiceUseCaseImpl {
    async fn execute(&self, params: UpdateTodaysChoiceParams) -> Result<CheckIn, CheckInError> {
        self.logger
            .info(&format!("Updating today's choice for check-in {}", params.id));

        let mut check_in = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CheckInError::NotFound,
                other => CheckInError::Repository(other),
            })?;

        check_in.update_today(params.todays_actual_diet, params.skip_meal_today);
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
            name: "Ravi Kumar".to_string(),
            email: "ravi@example.com".to_string(),
            diet_preference: DietPreference::NonVeg,
            lunch_timing: LunchTiming::Two,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_switch_todays_diet_and_save() {
        let stored = existing();
        let id = stored.id;
        let mut mock_repo = MockCheckInRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(move |i| *i == id)
            .returning(move |_| Ok(stored.clone()));
        mock_repo
            .expect_save()
            .withf(|c| c.todays_actual_diet == DietPreference::Veg && !c.skip_meal_today)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateTodaysChoiceUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateTodaysChoiceParams {
                id,
                todays_actual_diet: Some(DietPreference::Veg),
                skip_meal_today: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.diet_preference, DietPreference::NonVeg);
        assert_eq!(updated.todays_actual_diet, DietPreference::Veg);
    }

    #[tokio::test]
    async fn should_return_not_found_when_check_in_missing() {
        let mut mock_repo = MockCheckInRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateTodaysChoiceUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateTodaysChoiceParams {
                id: Uuid::new_v4(),
                todays_actual_diet: None,
                skip_meal_today: Some(true),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CheckInError::NotFound));
    }
}
