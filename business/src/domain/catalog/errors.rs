#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.duplicate_name: {0}")]
    DuplicateName(String),
    #[error("catalog.duplicate_id: {0}")]
    DuplicateId(String),
    #[error("catalog.empty_category: {0}")]
    EmptyCategory(String),
    #[error("catalog.empty_field")]
    EmptyField,
}
