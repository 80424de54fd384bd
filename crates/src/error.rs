use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid options file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate option value `{0}`")]
    DuplicateValue(String),

    #[error("options list is empty")]
    EmptyOptions,

    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("{0}")]
    Usage(String),

    #[error("program error: {0}")]
    Program(String),
}

pub type Result<T> = std::result::Result<T, Error>;
