use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabdeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Document has {0} validation error(s)")]
    ValidationFailed(usize),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TabdeckError>;
