use std::time::Duration;

use crate::ProviderId;

/// Per-provider endpoint and pacing settings.
///
/// `request_spacing` is a fixed pause inserted between successive requests
/// in a per-item loop. It is not a retry delay and never adapts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderPolicy {
    pub provider_id: ProviderId,
    pub base_url: String,
    pub request_spacing: Duration,
    pub timeout: Duration,
}

impl ProviderPolicy {
    /// CoinGecko free tier. Closing mode issues two calls per asset, so it
    /// spaces assets further apart than spot mode.
    pub fn coingecko_default(closing: bool) -> Self {
        Self {
            provider_id: ProviderId::Coingecko,
            base_url: String::from("https://api.coingecko.com/api/v3"),
            request_spacing: if closing {
                Duration::from_secs(2)
            } else {
                Duration::from_millis(500)
            },
            timeout: Duration::from_secs(30),
        }
    }

    pub fn alphavantage_default() -> Self {
        Self {
            provider_id: ProviderId::Alphavantage,
            base_url: String::from("https://www.alphavantage.co/query"),
            request_spacing: Duration::ZERO,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn fred_default() -> Self {
        Self {
            provider_id: ProviderId::Fred,
            base_url: String::from("https://api.stlouisfed.org/fred/series/observations"),
            request_spacing: Duration::from_millis(500),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn anthropic_default() -> Self {
        Self {
            provider_id: ProviderId::Anthropic,
            base_url: String::from("https://api.anthropic.com"),
            request_spacing: Duration::ZERO,
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn without_spacing(mut self) -> Self {
        self.request_spacing = Duration::ZERO;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_mode_spaces_coingecko_calls_further_apart() {
        let closing = ProviderPolicy::coingecko_default(true);
        let spot = ProviderPolicy::coingecko_default(false);

        assert_eq!(closing.request_spacing, Duration::from_secs(2));
        assert_eq!(spot.request_spacing, Duration::from_millis(500));
    }

    #[test]
    fn narrative_waits_longer_than_data_feeds() {
        let narrative = ProviderPolicy::anthropic_default();
        assert_eq!(narrative.provider_id, ProviderId::Anthropic);
        assert_eq!(narrative.timeout, Duration::from_secs(60));
        assert_eq!(ProviderPolicy::alphavantage_default().timeout, Duration::from_secs(30));
        assert!(ProviderPolicy::alphavantage_default().request_spacing.is_zero());
    }

    #[test]
    fn without_spacing_zeroes_only_spacing() {
        let policy = ProviderPolicy::fred_default().without_spacing();
        assert_eq!(policy.request_spacing, Duration::ZERO);
        assert_eq!(policy.timeout, Duration::from_secs(30));
    }
}
