#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

impl EngineError {
    pub(crate) fn invalid_data(e: impl std::fmt::Display) -> Self {
        EngineError::InvalidData { msg: e.to_string() }
    }
}
