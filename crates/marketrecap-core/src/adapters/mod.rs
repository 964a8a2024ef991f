//! Provider adapters.
//!
//! Each adapter owns one upstream API: it builds requests, runs them through
//! the shared [`HttpClient`], and decodes the payload into domain values or a
//! [`SourceError`]. Fallback decisions live in the feeds, not here.

pub mod alphavantage;
pub mod anthropic;
pub mod coingecko;
pub mod fred;

pub use alphavantage::{classify_treasury_payload, AlphaVantageAdapter, TreasuryPayload, TreasuryProbe};
pub use anthropic::AnthropicAdapter;
pub use coingecko::{CoinGeckoAdapter, CoinMarketData, PricePoint};
pub use fred::FredAdapter;

use serde::de::DeserializeOwned;

use crate::data_source::SourceError;
use crate::http_client::{HttpClient, HttpRequest, HttpResponse};
use crate::ProviderId;

/// Run a request, mapping transport failures to `Unavailable`.
fn execute(
    client: &dyn HttpClient,
    provider: ProviderId,
    request: HttpRequest,
) -> Result<HttpResponse, SourceError> {
    client
        .execute(request)
        .map_err(|error| SourceError::transport(provider, &error))
}

/// Run a request and require a 2xx answer. HTTP 429 is reported as a
/// rate limit, any other non-2xx status as unavailable.
fn execute_success(
    client: &dyn HttpClient,
    provider: ProviderId,
    request: HttpRequest,
) -> Result<String, SourceError> {
    let response = execute(client, provider, request)?;
    if response.status == 429 {
        return Err(SourceError::rate_limited(
            provider,
            format!("{provider} returned status 429"),
        ));
    }
    if !response.is_success() {
        return Err(SourceError::status(provider, response.status));
    }
    Ok(response.body)
}

fn parse_json<T: DeserializeOwned>(provider: ProviderId, body: &str) -> Result<T, SourceError> {
    serde_json::from_str(body).map_err(|error| {
        SourceError::malformed(provider, format!("failed to parse {provider} response: {error}"))
    })
}

/// First `max` characters of a payload, for debug logging.
fn preview(body: &str, max: usize) -> String {
    let mut out = body.chars().take(max).collect::<String>();
    if body.chars().count() > max {
        out.push_str("...");
    }
    out
}
