use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use super::{execute_success, parse_json, preview};
use crate::data_source::SourceError;
use crate::http_client::{HttpClient, HttpRequest};
use crate::provider_policy::ProviderPolicy;
use crate::ProviderId;

const PROVIDER: ProviderId = ProviderId::Coingecko;

/// CoinGecko public API adapter.
#[derive(Clone)]
pub struct CoinGeckoAdapter {
    http_client: Arc<dyn HttpClient>,
    policy: ProviderPolicy,
}

/// Market fields of `/coins/{id}` in USD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinMarketData {
    pub current_price: f64,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
}

/// One `[timestamp_ms, price]` pair of `/coins/{id}/market_chart`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp_ms: f64,
    pub price: f64,
}

impl CoinGeckoAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>, policy: ProviderPolicy) -> Self {
        Self {
            http_client,
            policy,
        }
    }

    pub fn policy(&self) -> &ProviderPolicy {
        &self.policy
    }

    /// Current USD market data for one coin.
    pub fn coin_market_data(&self, coin_id: &str) -> Result<CoinMarketData, SourceError> {
        let url = format!(
            "{}/coins/{}",
            self.policy.base_url,
            urlencoding::encode(coin_id)
        );
        let request = HttpRequest::get(url).with_timeout(self.policy.timeout);
        let body = execute_success(self.http_client.as_ref(), PROVIDER, request)?;
        let payload: CoinResponse = parse_json(PROVIDER, &body)?;

        let Some(market_data) = payload.market_data else {
            debug!(coin_id, body = %preview(&body, 200), "coin response without market_data");
            return Err(SourceError::malformed(
                PROVIDER,
                format!("no market_data in coingecko response for '{coin_id}'"),
            ));
        };

        let current_price = market_data.current_price.usd.ok_or_else(|| {
            SourceError::malformed(PROVIDER, format!("no USD price for '{coin_id}'"))
        })?;

        Ok(CoinMarketData {
            current_price,
            price_change_24h: market_data.price_change_24h,
            price_change_percentage_24h: market_data.price_change_percentage_24h,
            market_cap: market_data.market_cap.usd,
            total_volume: market_data.total_volume.usd,
        })
    }

    /// Daily USD price history, oldest first as CoinGecko returns it.
    pub fn daily_prices(&self, coin_id: &str, days: u32) -> Result<Vec<PricePoint>, SourceError> {
        let url = format!(
            "{}/coins/{}/market_chart",
            self.policy.base_url,
            urlencoding::encode(coin_id)
        );
        let request = HttpRequest::get(url)
            .with_query("vs_currency", "usd")
            .with_query("days", days.to_string())
            .with_query("interval", "daily")
            .with_timeout(self.policy.timeout);
        let body = execute_success(self.http_client.as_ref(), PROVIDER, request)?;
        let payload: MarketChartResponse = parse_json(PROVIDER, &body)?;

        Ok(payload
            .prices
            .into_iter()
            .map(|(timestamp_ms, price)| PricePoint {
                timestamp_ms,
                price,
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct CoinResponse {
    #[serde(default)]
    market_data: Option<MarketDataPayload>,
}

#[derive(Debug, Deserialize)]
struct MarketDataPayload {
    #[serde(default)]
    current_price: UsdValue,
    #[serde(default)]
    price_change_24h: Option<f64>,
    #[serde(default)]
    price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    market_cap: UsdValue,
    #[serde(default)]
    total_volume: UsdValue,
}

#[derive(Debug, Default, Deserialize)]
struct UsdValue {
    #[serde(default)]
    usd: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    #[serde(default)]
    prices: Vec<(f64, f64)>,
}
