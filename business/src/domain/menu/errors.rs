#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("menu.empty_selection")]
    EmptySelection,
    #[error("menu.unknown_dish")]
    UnknownDish(String),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
