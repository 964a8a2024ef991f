use marketrecap_core::{SourceError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(
        "an Alpha Vantage API key is required; pass --alphavantage-key or set ALPHAVANTAGE_API_KEY"
    )]
    MissingApiKey,

    #[error("probe failed: {0}")]
    Source(#[from] SourceError),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::MissingApiKey => 2,
            Self::Source(_) => 4,
            Self::Logging(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
