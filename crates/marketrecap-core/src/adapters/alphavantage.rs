use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use super::{execute, execute_success, parse_json, preview};
use crate::data_source::SourceError;
use crate::domain::parse_numeric;
use crate::http_client::{HttpAuth, HttpClient, HttpRequest};
use crate::provider_policy::ProviderPolicy;
use crate::{normalize_descending, Observation, ProviderId, TreasuryMaturity};

const PROVIDER: ProviderId = ProviderId::Alphavantage;
const DATA_KEY: &str = "data";
const TIME_SERIES_KEY: &str = "Time Series (Daily)";
const NOTE_KEY: &str = "Note";
const INFORMATION_KEY: &str = "Information";
const ERROR_KEY: &str = "Error Message";

/// Alpha Vantage adapter for the `TREASURY_YIELD` function.
#[derive(Clone)]
pub struct AlphaVantageAdapter {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
    policy: ProviderPolicy,
}

/// The response shapes `TREASURY_YIELD` is known to produce.
///
/// A 200 answer can still be a rate-limit note or an error message, so the
/// body is classified before anything is read from it.
#[derive(Debug, Clone, PartialEq)]
pub enum TreasuryPayload {
    /// `{"data": [{"date": .., "value": ..}, ..]}`
    DataArray(Vec<Observation>),
    /// `{"Time Series (Daily)": {"<date>": {"<field>": ..}, ..}}`
    TimeSeries(Vec<Observation>),
    /// `{"Note": ..}` or `{"Information": ..}`
    RateLimited(String),
    /// `{"Error Message": ..}`
    ProviderError(String),
    /// Anything else; carries the top-level keys for diagnostics.
    Unrecognized(Vec<String>),
}

impl TreasuryPayload {
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::DataArray(_) => "data_array",
            Self::TimeSeries(_) => "time_series",
            Self::RateLimited(_) => "rate_limited",
            Self::ProviderError(_) => "provider_error",
            Self::Unrecognized(_) => "unrecognized",
        }
    }

    /// Newest-first observations, or the error the payload stands for.
    pub fn into_observations(self) -> Result<Vec<Observation>, SourceError> {
        match self {
            Self::DataArray(observations) | Self::TimeSeries(observations) => {
                Ok(normalize_descending(observations))
            }
            Self::RateLimited(note) => Err(SourceError::rate_limited(PROVIDER, note)),
            Self::ProviderError(message) => Err(SourceError::provider_error(PROVIDER, message)),
            Self::Unrecognized(keys) => Err(SourceError::malformed(
                PROVIDER,
                format!("unexpected alphavantage payload with keys [{}]", keys.join(", ")),
            )),
        }
    }
}

/// Raw outcome of a single diagnostic request.
#[derive(Debug, Clone, PartialEq)]
pub struct TreasuryProbe {
    pub url: String,
    pub status: u16,
    /// `None` when the body is not JSON.
    pub payload: Option<TreasuryPayload>,
    pub body_preview: String,
}

/// Classify a `TREASURY_YIELD` body.
///
/// For the time-series shape the value is read from the field named after
/// the maturity's short label (`"10Y"`), falling back to the first numeric
/// field of the entry.
pub fn classify_treasury_payload(payload: &Value, maturity: TreasuryMaturity) -> TreasuryPayload {
    let Some(object) = payload.as_object() else {
        return TreasuryPayload::Unrecognized(Vec::new());
    };

    if let Some(Value::Array(entries)) = object.get(DATA_KEY) {
        return TreasuryPayload::DataArray(entries.iter().map(data_entry).collect());
    }

    if let Some(Value::Object(series)) = object.get(TIME_SERIES_KEY) {
        return TreasuryPayload::TimeSeries(
            series
                .iter()
                .map(|(date, entry)| time_series_entry(date, entry, maturity.short_label()))
                .collect(),
        );
    }

    if let Some(note) = object.get(NOTE_KEY).or_else(|| object.get(INFORMATION_KEY)) {
        return TreasuryPayload::RateLimited(text_of(note));
    }

    if let Some(message) = object.get(ERROR_KEY) {
        return TreasuryPayload::ProviderError(text_of(message));
    }

    TreasuryPayload::Unrecognized(object.keys().cloned().collect())
}

impl AlphaVantageAdapter {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        api_key: impl Into<String>,
        policy: ProviderPolicy,
    ) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            policy,
        }
    }

    pub fn policy(&self) -> &ProviderPolicy {
        &self.policy
    }

    /// Daily yield series for one maturity, newest first.
    pub fn treasury_yield(&self, maturity: TreasuryMaturity) -> Result<Vec<Observation>, SourceError> {
        if self.api_key.trim().is_empty() {
            return Err(SourceError::missing_credential(PROVIDER));
        }

        let body = execute_success(
            self.http_client.as_ref(),
            PROVIDER,
            self.treasury_request(maturity),
        )?;
        let value: Value = parse_json(PROVIDER, &body)?;
        let payload = classify_treasury_payload(&value, maturity);
        debug!(
            maturity = maturity.short_label(),
            shape = payload.shape(),
            "classified alphavantage treasury payload"
        );
        if let TreasuryPayload::Unrecognized(_) = payload {
            debug!(body = %preview(&body, 300), "unrecognized alphavantage body");
        }

        payload.into_observations()
    }

    /// Issue one `TREASURY_YIELD` request and report what came back without
    /// treating any answer as an error. Transport failures still fail.
    pub fn probe_treasury(&self, maturity: TreasuryMaturity) -> Result<TreasuryProbe, SourceError> {
        let request = self.treasury_request(maturity);
        let url = request.full_url();
        let response = execute(self.http_client.as_ref(), PROVIDER, request)?;
        let payload = serde_json::from_str::<Value>(&response.body)
            .ok()
            .map(|value| classify_treasury_payload(&value, maturity));

        Ok(TreasuryProbe {
            url,
            status: response.status,
            payload,
            body_preview: preview(&response.body, 500),
        })
    }

    fn treasury_request(&self, maturity: TreasuryMaturity) -> HttpRequest {
        HttpRequest::get(self.policy.base_url.clone())
            .with_query("function", "TREASURY_YIELD")
            .with_query("interval", "daily")
            .with_query("maturity", maturity.alphavantage_param())
            .with_auth(&HttpAuth::query_param("apikey", self.api_key.clone()))
            .with_timeout(self.policy.timeout)
    }
}

fn data_entry(entry: &Value) -> Observation {
    let date = entry
        .get("date")
        .and_then(Value::as_str)
        .map(str::to_owned);
    let value = entry.get("value").and_then(parse_numeric);
    Observation::new(date, value)
}

fn time_series_entry(date: &str, entry: &Value, field: &str) -> Observation {
    let value = match entry {
        Value::Object(fields) => fields
            .get(field)
            .and_then(parse_numeric)
            .or_else(|| first_numeric(fields)),
        other => parse_numeric(other),
    };
    Observation::new(Some(date.to_owned()), value)
}

fn first_numeric(fields: &Map<String, Value>) -> Option<f64> {
    fields.values().find_map(parse_numeric)
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
