#[derive(Debug, thiserror::Error)]
pub enum WasteError {
    #[error("waste.amount_too_small")]
    AmountTooSmall,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
