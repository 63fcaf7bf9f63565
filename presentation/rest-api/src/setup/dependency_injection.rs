use std::sync::Arc;

use business::domain::catalog::model::DishCatalog;
use business::domain::logger::Logger;
use business::domain::storage::KeyValueStore;
use logger::TracingLogger;
use openai::client::OpenAIClient;
use openai::completion_provider::OpenAICompletionProvider;
use persistence::check_in::repository::CheckInRepositoryKv;
use persistence::dish_waste::repository::DishWasteLogRepositoryKv;
use persistence::menu::repository::MenuRepositoryKv;
use persistence::waste::repository::WasteLogRepositoryKv;

use business::application::check_in::create::CreateCheckInUseCaseImpl;
use business::application::check_in::get_all::GetAllCheckInsUseCaseImpl;
use business::application::check_in::get_summary::GetCheckInSummaryUseCaseImpl;
use business::application::check_in::update_preferences::UpdatePreferencesUseCaseImpl;
use business::application::check_in::update_today::UpdateTodaysChoiceUseCaseImpl;
use business::application::dish_waste::create::CreateDishWasteLogUseCaseImpl;
use business::application::dish_waste::get_all::GetAllDishWasteLogsUseCaseImpl;
use business::application::menu::get_today::GetTodaysMenuUseCaseImpl;
use business::application::menu::set_today::SetTodaysMenuUseCaseImpl;
use business::application::suggestion::generate::GenerateKitchenSuggestionsUseCaseImpl;
use business::application::suggestion::suggest::SuggestDishQuantitiesUseCaseImpl;
use business::application::waste::create::CreateWasteLogUseCaseImpl;
use business::application::waste::get_all::GetAllWasteLogsUseCaseImpl;
use business::application::waste::get_summary::GetWasteSummaryUseCaseImpl;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub check_in_api: crate::api::check_in::routes::CheckInApi,
    pub menu_api: crate::api::menu::routes::MenuApi,
    pub waste_api: crate::api::waste::routes::WasteLogApi,
    pub dish_waste_api: crate::api::dish_waste::routes::DishWasteLogApi,
    pub suggestion_api: crate::api::suggestion::routes::SuggestionApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig, store: Arc<dyn KeyValueStore>) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let catalog = DishCatalog::standard();
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let check_in_repository = Arc::new(CheckInRepositoryKv::new(store.clone()));
        let menu_repository = Arc::new(MenuRepositoryKv::new(store.clone()));
        let waste_repository = Arc::new(WasteLogRepositoryKv::new(store.clone()));
        let dish_waste_repository = Arc::new(DishWasteLogRepositoryKv::new(store));

        let openai_client = OpenAIClient::new(
            config.openai.api_key.clone(),
            config.openai.model.clone(),
            config.openai.base_url.clone(),
            config.suggestion.timeout,
        );
        let completion_provider = Arc::new(OpenAICompletionProvider::new(openai_client));

        // Check-in use cases
        let create_check_in_use_case = Arc::new(CreateCheckInUseCaseImpl {
            repository: check_in_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_check_ins_use_case = Arc::new(GetAllCheckInsUseCaseImpl {
            repository: check_in_repository.clone(),
            logger: logger.clone(),
        });
        let get_check_in_summary_use_case = Arc::new(GetCheckInSummaryUseCaseImpl {
            repository: check_in_repository.clone(),
            logger: logger.clone(),
        });
        let update_todays_choice_use_case = Arc::new(UpdateTodaysChoiceUseCaseImpl {
            repository: check_in_repository.clone(),
            logger: logger.clone(),
        });
        let update_preferences_use_case = Arc::new(UpdatePreferencesUseCaseImpl {
            repository: check_in_repository.clone(),
            logger: logger.clone(),
        });

        // Menu use cases
        let set_todays_menu_use_case = Arc::new(SetTodaysMenuUseCaseImpl {
            repository: menu_repository.clone(),
            catalog,
            logger: logger.clone(),
        });
        let get_todays_menu_use_case = Arc::new(GetTodaysMenuUseCaseImpl {
            repository: menu_repository.clone(),
            logger: logger.clone(),
        });

        // Dish waste use cases
        let create_dish_waste_log_use_case = Arc::new(CreateDishWasteLogUseCaseImpl {
            repository: dish_waste_repository.clone(),
            menu_repository,
            logger: logger.clone(),
        });
        let get_all_dish_waste_logs_use_case = Arc::new(GetAllDishWasteLogsUseCaseImpl {
            repository: dish_waste_repository,
            logger: logger.clone(),
        });

        // Waste use cases
        let create_waste_log_use_case = Arc::new(CreateWasteLogUseCaseImpl {
            repository: waste_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_waste_logs_use_case = Arc::new(GetAllWasteLogsUseCaseImpl {
            repository: waste_repository.clone(),
            logger: logger.clone(),
        });
        let get_waste_summary_use_case = Arc::new(GetWasteSummaryUseCaseImpl {
            repository: waste_repository,
            logger: logger.clone(),
        });

        // Suggestion use cases
        let suggest_use_case = Arc::new(SuggestDishQuantitiesUseCaseImpl {
            provider: completion_provider,
            logger: logger.clone(),
        });
        let generate_use_case = Arc::new(GenerateKitchenSuggestionsUseCaseImpl {
            check_in_repository,
            engine: suggest_use_case.clone(),
            catalog,
            logger,
        });

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(catalog);

        let check_in_api = crate::api::check_in::routes::CheckInApi::new(
            create_check_in_use_case,
            get_all_check_ins_use_case,
            get_check_in_summary_use_case,
            update_todays_choice_use_case,
            update_preferences_use_case,
        );

        let menu_api = crate::api::menu::routes::MenuApi::new(
            set_todays_menu_use_case,
            get_todays_menu_use_case,
        );

        let waste_api = crate::api::waste::routes::WasteLogApi::new(
            create_waste_log_use_case,
            get_all_waste_logs_use_case,
            get_waste_summary_use_case,
        );

        let dish_waste_api = crate::api::dish_waste::routes::DishWasteLogApi::new(
            create_dish_waste_log_use_case,
            get_all_dish_waste_logs_use_case,
        );

        let suggestion_api = crate::api::suggestion::routes::SuggestionApi::new(
            generate_use_case,
            suggest_use_case,
            catalog,
            config.suggestion.clone(),
        );

        Ok(Self {
            health_api,
            catalog_api,
            check_in_api,
            menu_api,
            waste_api,
            dish_waste_api,
            suggestion_api,
        })
    }
}
