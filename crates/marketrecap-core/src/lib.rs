//! # Marketrecap Core
//!
//! Data acquisition and report assembly for the `marketrecap` tool.
//!
//! ## Overview
//!
//! A run fetches three kinds of market data one after another, tolerates any
//! of them failing, and renders a text report:
//!
//! - **Crypto prices** from CoinGecko (spot 24h change or day-over-day closes)
//! - **Benchmark Treasury yield** from Alpha Vantage, falling back to FRED
//! - **Short-term rates** from FRED, falling back to Alpha Vantage maturities
//! - **Optional narrative** from the Anthropic Messages API
//!
//! All I/O is blocking and sequential. Every adapter returns
//! `Result<_, SourceError>`; the feeds log failures and hand absent records
//! to the report, which has an omission or fallback path for each section.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | CoinGecko, Alpha Vantage, FRED and Anthropic adapters |
//! | [`config`] | Run configuration, credentials and report modes |
//! | [`data_source`] | Structured adapter errors |
//! | [`domain`] | Records, snapshot, sentiment, dates |
//! | [`error`] | Validation errors for configuration and records |
//! | [`feeds`] | Price, yield and short-rate feeds with fallbacks |
//! | [`http_client`] | Blocking HTTP client abstraction |
//! | [`narrative`] | Optional prose correlation analysis |
//! | [`provider_policy`] | Per-provider URLs, pacing and timeouts |
//! | [`recap`] | Sequential run driver |
//! | [`report`] | Text report assembly |
//! | [`source`] | Provider identifiers |
//! | [`throttling`] | Fixed request pacing |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use marketrecap_core::{Credentials, MarketRecap, RecapConfig, ReportMode, ReqwestHttpClient};
//! use time::OffsetDateTime;
//!
//! let credentials = Credentials::new("ALPHAVANTAGE_KEY").with_fred(std::env::var("FRED_API_KEY").ok());
//! let config = RecapConfig::new(ReportMode::Closing, credentials);
//! let recap = MarketRecap::new(config, Arc::new(ReqwestHttpClient::new()))?;
//!
//! let outcome = recap.run(OffsetDateTime::now_utc().date());
//! println!("{}", outcome.text);
//! # Ok::<(), marketrecap_core::ValidationError>(())
//! ```

pub mod adapters;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod feeds;
pub mod http_client;
pub mod narrative;
pub mod provider_policy;
pub mod recap;
pub mod report;
pub mod source;
pub mod throttling;

pub use adapters::{
    classify_treasury_payload, AlphaVantageAdapter, AnthropicAdapter, CoinGeckoAdapter, FredAdapter,
    TreasuryPayload, TreasuryProbe,
};
pub use config::{
    Credentials, NarrativeSettings, ProviderPolicies, RateFallback, RateSeries, RecapConfig, ReportMode,
    TrackedAsset,
};
pub use data_source::{SourceError, SourceErrorKind};
pub use domain::*;
pub use error::ValidationError;
pub use feeds::{approximate_from_nearest_maturity, PriceFeed, ShortRateFeed, YieldFeed};
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use narrative::NarrativeSynthesizer;
pub use provider_policy::ProviderPolicy;
pub use recap::{MarketRecap, RecapOutcome};
pub use report::ReportAssembler;
pub use source::ProviderId;
pub use throttling::RequestPacer;
