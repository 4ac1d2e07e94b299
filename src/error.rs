use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("undefined reference: `{0}` is not a defined schedule binding")]
    UndefinedReference(String),

    #[error("Schedule parsing error: {0}")]
    Parse(String),

    #[error("Schedule validation failed: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
