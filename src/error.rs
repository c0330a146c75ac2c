use thiserror::Error;

pub type Result<T> = std::result::Result<T, SketchError>;

#[derive(Error, Debug)]
pub enum SketchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid candidate at position {index}: {reason}")]
    InvalidCandidate { index: usize, reason: String },

    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    #[error("Failed to parse environment variable {var_name}: value '{value}' - {error}")]
    EnvParseError {
        var_name: String,
        value: String,
        error: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
