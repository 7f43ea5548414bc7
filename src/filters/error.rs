use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("Expected a sequence of integers or strings, found {found}.")]
    UnsupportedType { found: String },
}

impl CollectionError {
    pub(crate) fn unsupported(found: impl Into<String>) -> Self {
        CollectionError::UnsupportedType {
            found: found.into(),
        }
    }
}
