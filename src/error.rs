/// Centralized error types for the market clock
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    // Configuration Errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    // Calendar Errors
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    // File I/O Errors
    #[error("File I/O error: {0}")]
    FileError(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    // Data Errors
    #[error("Serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid control message: {0}")]
    InvalidControlMessage(String),

    // Presenter Errors
    #[error("Display surface error: {0}")]
    SurfaceError(String),

    #[error("Presenter task failed: {0}")]
    TaskFailed(String),

    // Generic Errors
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ClockError>;

impl ClockError {
    /// Check if the presenter should stop rendering after this error
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ClockError::SurfaceError(_) | ClockError::FileError(_) | ClockError::TaskFailed(_)
        )
    }

    /// Get error code for logging
    pub fn error_code(&self) -> &str {
        match self {
            ClockError::ConfigError(_) => "CFG_001",
            ClockError::InvalidParameter(_) => "CFG_002",
            ClockError::UnknownTimezone(_) => "CAL_001",
            ClockError::InvalidDate(_) => "CAL_002",
            ClockError::FileError(_) => "FILE_001",
            ClockError::FileNotFound(_) => "FILE_002",
            ClockError::SerializationError(_) => "DATA_001",
            ClockError::InvalidControlMessage(_) => "DATA_002",
            ClockError::SurfaceError(_) => "UI_001",
            ClockError::TaskFailed(_) => "SYS_001",
            ClockError::Other(_) => "GEN_001",
        }
    }
}
