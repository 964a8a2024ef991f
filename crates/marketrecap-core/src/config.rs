//! Run configuration.
//!
//! [`RecapConfig::new`] describes the stock recap: BTC, ETH and XRP from
//! CoinGecko, the 10-year Treasury as benchmark, and fed funds plus the
//! 3-month and 2-year Treasury as short rates. Credentials are opaque
//! strings; only the Alpha Vantage key is mandatory.

use std::fmt::{Debug, Formatter};
use std::str::FromStr;
use std::time::Duration;

use crate::provider_policy::ProviderPolicy;
use crate::{Symbol, TreasuryMaturity, ValidationError};

/// Which price variant the recap fetches and renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Current price with the provider's own 24h change.
    Spot,
    /// Two most recent daily closes with a computed day-over-day change.
    #[default]
    Closing,
}

impl ReportMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spot => "spot",
            Self::Closing => "closing",
        }
    }

    pub const fn file_prefix(self) -> &'static str {
        match self {
            Self::Spot => "crypto_market_report",
            Self::Closing => "market_recap_closing",
        }
    }
}

impl FromStr for ReportMode {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "spot" => Ok(Self::Spot),
            "closing" => Ok(Self::Closing),
            other => Err(ValidationError::InvalidMode {
                value: other.to_owned(),
            }),
        }
    }
}

/// API keys passed in at construction time. Never logged.
#[derive(Clone, Default)]
pub struct Credentials {
    alphavantage: String,
    fred: Option<String>,
    anthropic: Option<String>,
}

impl Credentials {
    pub fn new(alphavantage: impl Into<String>) -> Self {
        Self {
            alphavantage: alphavantage.into(),
            fred: None,
            anthropic: None,
        }
    }

    pub fn with_fred(mut self, key: Option<String>) -> Self {
        self.fred = non_blank(key);
        self
    }

    pub fn with_anthropic(mut self, key: Option<String>) -> Self {
        self.anthropic = non_blank(key);
        self
    }

    pub fn alphavantage(&self) -> &str {
        &self.alphavantage
    }

    pub fn fred(&self) -> Option<&str> {
        self.fred.as_deref()
    }

    pub fn anthropic(&self) -> Option<&str> {
        self.anthropic.as_deref()
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("alphavantage", &"[REDACTED]")
            .field("fred", &self.fred.as_ref().map(|_| "[REDACTED]"))
            .field("anthropic", &self.anthropic.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

fn non_blank(key: Option<String>) -> Option<String> {
    key.map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Asset ticker and the provider's coin id for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedAsset {
    pub symbol: Symbol,
    pub coin_id: String,
}

impl TrackedAsset {
    pub fn new(symbol: &str, coin_id: &str) -> Result<Self, ValidationError> {
        let symbol = Symbol::parse(symbol)?;
        let coin_id = coin_id.trim();
        if coin_id.is_empty() {
            return Err(ValidationError::EmptyProviderId {
                symbol: symbol.to_string(),
            });
        }
        Ok(Self {
            symbol,
            coin_id: coin_id.to_owned(),
        })
    }
}

/// Where a short-rate series comes from when the primary provider has nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateFallback {
    /// Query the secondary provider for this Treasury maturity.
    Maturity(TreasuryMaturity),
    /// No secondary equivalent exists; copy the nearest fetched maturity.
    NearestMaturity,
}

/// One short-term rate series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateSeries {
    pub key: String,
    pub display_name: String,
    pub fred_series: String,
    pub fallback: RateFallback,
}

impl RateSeries {
    pub fn new(
        key: &str,
        display_name: &str,
        fred_series: &str,
        fallback: RateFallback,
    ) -> Result<Self, ValidationError> {
        if key.trim().is_empty() {
            return Err(ValidationError::EmptyRateKey);
        }
        Ok(Self {
            key: key.to_owned(),
            display_name: display_name.to_owned(),
            fred_series: fred_series.to_owned(),
            fallback,
        })
    }
}

/// Model settings for the optional narrative call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeSettings {
    pub model: String,
    pub max_tokens: u32,
}

impl Default for NarrativeSettings {
    fn default() -> Self {
        Self {
            model: String::from("claude-3-5-sonnet-20241022"),
            max_tokens: 300,
        }
    }
}

/// Provider policies used by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderPolicies {
    pub coingecko: ProviderPolicy,
    pub alphavantage: ProviderPolicy,
    pub fred: ProviderPolicy,
    pub anthropic: ProviderPolicy,
}

impl ProviderPolicies {
    pub fn for_mode(mode: ReportMode) -> Self {
        Self {
            coingecko: ProviderPolicy::coingecko_default(mode == ReportMode::Closing),
            alphavantage: ProviderPolicy::alphavantage_default(),
            fred: ProviderPolicy::fred_default(),
            anthropic: ProviderPolicy::anthropic_default(),
        }
    }
}

/// Full configuration of a recap run.
#[derive(Debug, Clone)]
pub struct RecapConfig {
    pub mode: ReportMode,
    pub credentials: Credentials,
    pub assets: Vec<TrackedAsset>,
    pub benchmark: TreasuryMaturity,
    pub rates: Vec<RateSeries>,
    pub policies: ProviderPolicies,
    pub narrative: NarrativeSettings,
}

impl RecapConfig {
    pub fn new(mode: ReportMode, credentials: Credentials) -> Self {
        Self {
            mode,
            credentials,
            assets: default_assets(),
            benchmark: TreasuryMaturity::TenYear,
            rates: default_rates(),
            policies: ProviderPolicies::for_mode(mode),
            narrative: NarrativeSettings::default(),
        }
    }

    /// Rejects a run that cannot start. Only the mandatory credential is
    /// checked; optional keys are simply absent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credentials.alphavantage().trim().is_empty() {
            return Err(ValidationError::MissingCredential {
                provider: "alphavantage",
            });
        }
        Ok(())
    }

    /// Override the per-request timeout of the data feeds.
    pub fn with_feed_timeout(mut self, timeout: Duration) -> Self {
        self.policies.coingecko.timeout = timeout;
        self.policies.alphavantage.timeout = timeout;
        self.policies.fred.timeout = timeout;
        self
    }

    /// Drop all inter-request pauses.
    pub fn without_pacing(mut self) -> Self {
        self.policies.coingecko = self.policies.coingecko.without_spacing();
        self.policies.alphavantage = self.policies.alphavantage.without_spacing();
        self.policies.fred = self.policies.fred.without_spacing();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.narrative.model = model.into();
        self
    }
}

fn default_assets() -> Vec<TrackedAsset> {
    [("BTC", "bitcoin"), ("ETH", "ethereum"), ("XRP", "ripple")]
        .into_iter()
        .filter_map(|(symbol, coin_id)| TrackedAsset::new(symbol, coin_id).ok())
        .collect()
}

fn default_rates() -> Vec<RateSeries> {
    [
        ("fed_funds_rate", "Fed Funds Rate", "FEDFUNDS", RateFallback::NearestMaturity),
        (
            "3_month_tbill",
            "3 Month Tbill",
            "DGS3MO",
            RateFallback::Maturity(TreasuryMaturity::ThreeMonth),
        ),
        (
            "2_year_treasury",
            "2 Year Treasury",
            "DGS2",
            RateFallback::Maturity(TreasuryMaturity::TwoYear),
        ),
    ]
    .into_iter()
    .filter_map(|(key, name, series, fallback)| RateSeries::new(key, name, series, fallback).ok())
    .collect()
}
