use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use super::{execute, parse_json};
use crate::data_source::SourceError;
use crate::http_client::{HttpAuth, HttpClient, HttpRequest};
use crate::provider_policy::ProviderPolicy;
use crate::{normalize_descending, Observation, ProviderId};

const PROVIDER: ProviderId = ProviderId::Fred;

/// FRED series-observations adapter.
///
/// The key is optional here; callers decide whether a keyless request is
/// worth making.
#[derive(Clone)]
pub struct FredAdapter {
    http_client: Arc<dyn HttpClient>,
    api_key: Option<String>,
    policy: ProviderPolicy,
}

impl FredAdapter {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        api_key: Option<String>,
        policy: ProviderPolicy,
    ) -> Self {
        Self {
            http_client,
            api_key,
            policy,
        }
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn policy(&self) -> &ProviderPolicy {
        &self.policy
    }

    /// The two newest observations of `series_id`, newest first.
    pub fn latest_observations(&self, series_id: &str) -> Result<Vec<Observation>, SourceError> {
        let mut request = HttpRequest::get(self.policy.base_url.clone())
            .with_query("series_id", series_id);
        if let Some(key) = &self.api_key {
            request = request.with_auth(&HttpAuth::query_param("api_key", key.clone()));
        }
        let request = request
            .with_query("file_type", "json")
            .with_query("limit", "2")
            .with_query("sort_order", "desc")
            .with_timeout(self.policy.timeout);

        let response = execute(self.http_client.as_ref(), PROVIDER, request)?;
        if response.status == 429 {
            return Err(SourceError::rate_limited(PROVIDER, "fred returned status 429"));
        }
        if !response.is_success() {
            // FRED explains 400s in the body, e.g. a missing or bad api_key.
            let detail = serde_json::from_str::<FredErrorResponse>(&response.body)
                .ok()
                .and_then(|body| body.error_message);
            return Err(match detail {
                Some(message) => SourceError::provider_error(
                    PROVIDER,
                    format!("fred returned status {}: {message}", response.status),
                ),
                None => SourceError::status(PROVIDER, response.status),
            });
        }

        let payload: FredObservationsResponse = parse_json(PROVIDER, &response.body)?;
        let Some(observations) = payload.observations else {
            return Err(SourceError::malformed(
                PROVIDER,
                format!("no observations in fred response for '{series_id}'"),
            ));
        };

        Ok(normalize_descending(
            observations
                .into_iter()
                .map(|entry| Observation::from_json(entry.date, &entry.value))
                .collect(),
        ))
    }
}

#[derive(Debug, Deserialize)]
struct FredObservationsResponse {
    #[serde(default)]
    observations: Option<Vec<FredObservation>>,
}

#[derive(Debug, Deserialize)]
struct FredObservation {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    value: Value,
}

#[derive(Debug, Deserialize)]
struct FredErrorResponse {
    #[serde(default)]
    error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_source::SourceErrorKind;
    use crate::http_client::{HttpError, HttpResponse};
    use std::sync::Mutex;

    struct RecordingClient {
        response: HttpResponse,
        urls: Mutex<Vec<String>>,
    }

    impl RecordingClient {
        fn new(response: HttpResponse) -> Arc<Self> {
            Arc::new(Self {
                response,
                urls: Mutex::new(Vec::new()),
            })
        }

        fn urls(&self) -> Vec<String> {
            self.urls
                .lock()
                .expect("url store should not be poisoned")
                .clone()
        }
    }

    impl HttpClient for RecordingClient {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.urls
                .lock()
                .expect("url store should not be poisoned")
                .push(request.full_url());
            Ok(self.response.clone())
        }
    }

    const TWO_OBSERVATIONS: &str = r#"{"observations":[
        {"date":"2026-10-14","value":"5.33"},
        {"date":"2026-10-15","value":"5.31"}]}"#;

    #[test]
    fn request_includes_key_limit_and_sort_order() {
        let client = RecordingClient::new(HttpResponse::ok_json(TWO_OBSERVATIONS));
        let adapter = FredAdapter::new(
            client.clone(),
            Some(String::from("fred-key")),
            ProviderPolicy::fred_default(),
        );

        let observations = adapter.latest_observations("DGS3MO").expect("should parse");
        assert_eq!(observations[0].date.as_deref(), Some("2026-10-15"));
        assert_eq!(
            client.urls(),
            ["https://api.stlouisfed.org/fred/series/observations?series_id=DGS3MO&api_key=fred-key&file_type=json&limit=2&sort_order=desc"]
        );
    }

    #[test]
    fn keyless_request_omits_api_key() {
        let client = RecordingClient::new(HttpResponse::ok_json(TWO_OBSERVATIONS));
        let adapter = FredAdapter::new(client.clone(), None, ProviderPolicy::fred_default());

        adapter.latest_observations("DGS10").expect("should parse");
        assert!(!client.urls()[0].contains("api_key"));
    }

    #[test]
    fn dot_placeholder_is_kept_as_missing_value() {
        let client = RecordingClient::new(HttpResponse::ok_json(
            r#"{"observations":[{"date":"2026-10-15","value":"."},{"date":"2026-10-14","value":"4.1"}]}"#,
        ));
        let adapter = FredAdapter::new(client, None, ProviderPolicy::fred_default());

        let observations = adapter.latest_observations("DGS10").expect("should parse");
        assert_eq!(observations[0].value, None);
        assert_eq!(observations[1].value, Some(4.1));
    }

    #[test]
    fn bad_request_surfaces_fred_error_message() {
        let client = RecordingClient::new(HttpResponse::with_status(
            400,
            r#"{"error_code":400,"error_message":"Bad Request.  The value for variable api_key is not registered."}"#,
        ));
        let adapter = FredAdapter::new(client, None, ProviderPolicy::fred_default());

        let err = adapter.latest_observations("DGS10").expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::ProviderError);
        assert!(err.message().contains("api_key"));
    }
}
