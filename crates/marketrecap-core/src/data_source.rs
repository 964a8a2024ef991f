//! Structured adapter errors.
//!
//! Every provider adapter returns `Result<_, SourceError>`. Feed components
//! log the error and turn it into an absent record, so a `SourceError` never
//! travels further than the feed that observed it.
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | [`SourceErrorKind::Unavailable`] | transport failure, timeout, non-2xx status |
//! | [`SourceErrorKind::RateLimited`] | provider answered with a rate-limit note |
//! | [`SourceErrorKind::ProviderError`] | provider answered with an error payload |
//! | [`SourceErrorKind::InsufficientData`] | fewer than two usable observations |
//! | [`SourceErrorKind::MissingCredential`] | the call needs a key that is not configured |
//! | [`SourceErrorKind::Malformed`] | the payload could not be decoded |

use std::fmt::{Display, Formatter};

use crate::http_client::HttpError;
use crate::ProviderId;

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    RateLimited,
    ProviderError,
    InsufficientData,
    MissingCredential,
    Malformed,
}

impl SourceErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unavailable => "unavailable",
            Self::RateLimited => "rate_limited",
            Self::ProviderError => "provider_error",
            Self::InsufficientData => "insufficient_data",
            Self::MissingCredential => "missing_credential",
            Self::Malformed => "malformed",
        }
    }
}

/// Structured source error carried from adapters to feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    provider: ProviderId,
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn new(provider: ProviderId, kind: SourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            provider,
            kind,
            message: message.into(),
        }
    }

    pub fn unavailable(provider: ProviderId, message: impl Into<String>) -> Self {
        Self::new(provider, SourceErrorKind::Unavailable, message)
    }

    pub fn rate_limited(provider: ProviderId, message: impl Into<String>) -> Self {
        Self::new(provider, SourceErrorKind::RateLimited, message)
    }

    pub fn provider_error(provider: ProviderId, message: impl Into<String>) -> Self {
        Self::new(provider, SourceErrorKind::ProviderError, message)
    }

    pub fn insufficient_data(provider: ProviderId, message: impl Into<String>) -> Self {
        Self::new(provider, SourceErrorKind::InsufficientData, message)
    }

    pub fn missing_credential(provider: ProviderId) -> Self {
        Self::new(
            provider,
            SourceErrorKind::MissingCredential,
            format!("no {provider} credential configured"),
        )
    }

    pub fn malformed(provider: ProviderId, message: impl Into<String>) -> Self {
        Self::new(provider, SourceErrorKind::Malformed, message)
    }

    pub fn transport(provider: ProviderId, error: &HttpError) -> Self {
        let message = if error.timed_out() {
            format!("{provider} request timed out: {}", error.message())
        } else {
            format!("{provider} transport error: {}", error.message())
        };
        Self::unavailable(provider, message)
    }

    pub fn status(provider: ProviderId, status: u16) -> Self {
        Self::unavailable(provider, format!("{provider} returned status {status}"))
    }

    pub const fn provider(&self) -> ProviderId {
        self.provider
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)
    }
}

impl std::error::Error for SourceError {}
