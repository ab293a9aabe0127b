//! Errors produced by the token store and session layer

pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// The backing store rejected a read, write or removal
    #[error("storage failure: {0}")]
    Storage(String),

    /// A persisted value could not be serialized or parsed
    #[error("serialization failure: {0}")]
    Serialization(String),
}

impl CoreError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
