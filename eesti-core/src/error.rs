use thiserror::Error;

#[derive(Error, Debug)]
pub enum EestiError {
    // Configuration errors
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("Config directory unavailable")]
    ConfigDirUnavailable,

    #[error("Config serialize error: {0}")]
    ConfigSerialize(String),

    #[error("Invalid config value: {field} - {reason}")]
    InvalidConfig { field: String, reason: String },

    // Other errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EestiResult<T> = Result<T, EestiError>;
