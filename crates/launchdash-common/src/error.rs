use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchDashError {
    /// The launch table could not be read or is missing required data.
    #[error("Data load error: {0}")]
    DataLoad(String),

    /// A site has no records, so its success ratio is undefined.
    #[error("Aggregation error: {0}")]
    Aggregation(String),

    /// A control value is outside the known domain. Recoverable.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl LaunchDashError {
    /// Startup errors abort the process; selection errors only suppress a chart update.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LaunchDashError::InvalidSelection(_))
    }
}

pub type Result<T> = std::result::Result<T, LaunchDashError>;
