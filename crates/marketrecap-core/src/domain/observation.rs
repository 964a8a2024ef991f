use serde_json::Value;

use crate::data_source::SourceError;
use crate::domain::models::Change;
use crate::ProviderId;

/// One point of a rate/yield series as read from a provider payload.
///
/// `value` is `None` when the provider sent a placeholder such as `"."`.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub date: Option<String>,
    pub value: Option<f64>,
}

impl Observation {
    pub fn new(date: Option<String>, value: Option<f64>) -> Self {
        Self { date, value }
    }

    /// Build from a JSON scalar that may be a number or a numeric string.
    pub fn from_json(date: Option<String>, value: &Value) -> Self {
        Self::new(date, parse_numeric(value))
    }
}

/// Newest and second-newest observation of a normalized series.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestPair {
    pub current: Observation,
    pub previous: Observation,
}

impl LatestPair {
    pub fn change(&self, provider: ProviderId) -> Result<Change, SourceError> {
        let (Some(current), Some(previous)) = (self.current.value, self.previous.value) else {
            return Err(SourceError::insufficient_data(
                provider,
                "latest observations are not numeric",
            ));
        };

        Change::between(current, previous)
            .map_err(|error| SourceError::malformed(provider, error.to_string()))
    }
}

/// Order observations newest-first.
///
/// When every observation is dated the series is sorted by date descending
/// (ISO dates compare lexicographically). Otherwise the provider's array
/// order is trusted and index 0 is taken as the newest.
pub fn normalize_descending(mut observations: Vec<Observation>) -> Vec<Observation> {
    if observations.iter().all(|observation| observation.date.is_some()) {
        observations.sort_by(|left, right| right.date.cmp(&left.date));
    }
    observations
}

/// Take the two newest points of an already-normalized series.
pub fn latest_pair(
    provider: ProviderId,
    observations: Vec<Observation>,
) -> Result<LatestPair, SourceError> {
    let count = observations.len();
    let mut iter = observations.into_iter();
    match (iter.next(), iter.next()) {
        (Some(current), Some(previous)) => Ok(LatestPair { current, previous }),
        _ => Err(SourceError::insufficient_data(
            provider,
            format!("{provider} returned {count} observation(s), need at least 2"),
        )),
    }
}

pub(crate) fn parse_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|parsed| parsed.is_finite()),
        _ => None,
    }
}
