#[derive(Debug, thiserror::Error)]
pub enum CheckInError {
    #[error("check_in.name_invalid")]
    NameInvalid,
    #[error("check_in.email_invalid")]
    EmailInvalid,
    #[error("check_in.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
