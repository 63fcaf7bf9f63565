use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::dish_waste::errors::DishWasteError;
use crate::domain::dish_waste::model::DishWasteLog;
use crate::domain::dish_waste::repository::DishWasteLogRepository;
use crate::domain::dish_waste::use_cases::create::{
    CreateDishWasteLogParams, CreateDishWasteLogUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::menu::repository::MenuRepository;

pub struct CreateDishWasteLogUseCaseImpl {
    pub repository: Arc<dyn DishWasteLogRepository>,
    pub menu_repository: Arc<dyn MenuRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateDishWasteLogUseCase for CreateDishWasteLogUseCaseImpl {
    async fn execute(
        &self,
        params: CreateDishWasteLogParams,
    ) -> Result<DishWasteLog, DishWasteError> {
        let menu = self.menu_repository.get_today().await?;
        let log = DishWasteLog::for_menu(&menu, &params.amounts).inspect_err(|e| {
            self.logger
                .warn(&format!("Dish waste not logged: {}", e));
        })?;

        self.repository.save(&log).await?;
        self.logger.info(&format!(
            "Dish waste logged for {} dishes, {}kg in total",
            log.items.len(),
            log.total_kg()
        ));

        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dish_waste::model::DishWasteAmount;
    use crate::domain::errors::RepositoryError;
    use crate::domain::menu::model::MenuItem;
    use mockall::mock;

    mock! {
        pub DishWasteRepo {}

        #[async_trait]
        impl DishWasteLogRepository for DishWasteRepo {
            async fn get_all(&self) -> Result<Vec<DishWasteLog>, RepositoryError>;
            async fn save(&self, log: &DishWasteLog) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub MenuRepo {}

        #[async_trait]
        impl MenuRepository for MenuRepo {
            async fn get_today(&self) -> Result<Vec<MenuItem>, RepositoryError>;
            async fn replace_today(&self, items: &[MenuItem]) -> Result<(), RepositoryError>;
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

    fn todays_menu() -> MockMenuRepo {
        let mut menu_repo = MockMenuRepo::new();
        menu_repo.expect_get_today().returning(|| {
            Ok(vec![MenuItem {
                dish_id: "r_3".to_string(),
                name: "Chicken Biryani".to_string(),
                category: "Rice".to_string(),
                description: String::new(),
                image: String::new(),
            }])
        });
        menu_repo
    }

    fn amount(id: &str, kg: f64) -> DishWasteAmount {
        DishWasteAmount {
            dish_id: id.to_string(),
            amount_kg: kg,
        }
    }

    #[tokio::test]
    async fn should_save_waste_for_menu_dishes() {
        let mut mock_repo = MockDishWasteRepo::new();
        mock_repo
            .expect_save()
            .withf(|log| log.items.len() == 1 && log.items[0].dish_name == "Chicken Biryani")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateDishWasteLogUseCaseImpl {
            repository: Arc::new(mock_repo),
            menu_repository: Arc::new(todays_menu()),
            logger: mock_logger(),
        };

        let log = use_case
            .execute(CreateDishWasteLogParams {
                amounts: vec![amount("r_3", 2.5)],
            })
            .await
            .unwrap();

        assert_eq!(log.items[0].amount_wasted_kg, 2.5);
        assert_eq!(log.items[0].category, "Rice");
    }

    #[tokio::test]
    async fn should_not_save_when_every_amount_is_zero() {
        let use_case = CreateDishWasteLogUseCaseImpl {
            repository: Arc::new(MockDishWasteRepo::new()),
            menu_repository: Arc::new(todays_menu()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateDishWasteLogParams {
                amounts: vec![amount("r_3", 0.0)],
            })
            .await;

        assert!(matches!(result.unwrap_err(), DishWasteError::NothingToLog));
    }

    #[tokio::test]
    async fn should_report_menu_read_failure() {
        let mut menu_repo = MockMenuRepo::new();
        menu_repo
            .expect_get_today()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = CreateDishWasteLogUseCaseImpl {
            repository: Arc::new(MockDishWasteRepo::new()),
            menu_repository: Arc::new(menu_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateDishWasteLogParams {
                amounts: vec![amount("r_3", 1.0)],
            })
            .await;

        assert!(matches!(result.unwrap_err(), DishWasteError::Repository(_)));
    }
}
