use thiserror::Error;

/// Configuration and record errors raised before or while building a run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },
    #[error("symbol '{value}' has no letter")]
    SymbolWithoutLetter { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("{provider} credential is required but was empty")]
    MissingCredential { provider: &'static str },

    #[error("provider identifier for '{symbol}' cannot be empty")]
    EmptyProviderId { symbol: String },
    #[error("rate series key cannot be empty")]
    EmptyRateKey,

    #[error("invalid report mode '{value}', expected one of spot, closing")]
    InvalidMode { value: String },
}
