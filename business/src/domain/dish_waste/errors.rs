#[derive(Debug, thiserror::Error)]
pub enum DishWasteError {
    #[error("dish_waste.nothing_to_log")]
    NothingToLog,
    #[error("dish_waste.not_on_menu")]
    NotOnMenu(String),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
