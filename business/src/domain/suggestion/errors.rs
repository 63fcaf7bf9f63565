use crate::domain::errors::RepositoryError;

/// Failures raised by a completion provider adapter.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion.unreachable: {0}")]
    Unreachable(String),
    #[error("completion.rejected: status {status}")]
    Rejected { status: u16 },
    #[error("completion.malformed_response")]
    MalformedResponse,
}

#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion.no_check_ins")]
    NoCheckIns,
    #[error("suggestion.provider_failed")]
    ProviderFailed(#[from] CompletionError),
    #[error("suggestion.invalid_output")]
    InvalidOutput,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
