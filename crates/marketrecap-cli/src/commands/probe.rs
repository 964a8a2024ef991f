use std::sync::Arc;

use marketrecap_core::{
    AlphaVantageAdapter, HttpClient, Observation, ProviderPolicy, TreasuryMaturity, TreasuryPayload,
    TreasuryProbe,
};
use tracing::info;

use super::{alphavantage_key, mask_key};
use crate::cli::{Cli, ProbeArgs};
use crate::error::CliError;

pub fn run(cli: &Cli, args: &ProbeArgs, http_client: Arc<dyn HttpClient>) -> Result<(), CliError> {
    let key = alphavantage_key(cli)?;
    let maturity = TreasuryMaturity::from(args.maturity);
    let policy = ProviderPolicy::alphavantage_default()
        .with_timeout(std::time::Duration::from_millis(cli.timeout_ms));
    let adapter = AlphaVantageAdapter::new(http_client, key.clone(), policy);

    info!(maturity = maturity.short_label(), "probing alphavantage treasury endpoint");
    let probe = adapter.probe_treasury(maturity)?;
    println!("{}", render(&probe, &key));
    Ok(())
}

/// Human-readable probe summary with the key masked everywhere.
pub fn render(probe: &TreasuryProbe, key: &str) -> String {
    let masked = mask_key(key);
    let url = redact(&probe.url, key, &masked);

    let mut lines = vec![
        format!("🔑 API key: {masked}"),
        format!("🌐 URL: {url}"),
        format!("📡 HTTP status: {}", probe.status),
    ];

    match &probe.payload {
        None => lines.push(String::from("🧾 Response shape: not JSON")),
        Some(payload) => {
            lines.push(format!("🧾 Response shape: {}", payload.shape()));
            lines.extend(describe(payload));
        }
    }

    lines.push(String::from("🔍 Body preview:"));
    lines.push(redact(&probe.body_preview, key, &masked));
    lines.join("\n")
}

fn redact(text: &str, key: &str, masked: &str) -> String {
    if key.is_empty() {
        text.to_owned()
    } else {
        text.replace(key, masked)
    }
}

fn describe(payload: &TreasuryPayload) -> Vec<String> {
    match payload {
        TreasuryPayload::DataArray(observations) | TreasuryPayload::TimeSeries(observations) => {
            let mut lines = vec![format!("   observations: {}", observations.len())];
            let newest = marketrecap_core::normalize_descending(observations.clone());
            lines.extend(newest.first().map(|point| format!("   newest: {}", point_label(point))));
            lines
        }
        TreasuryPayload::RateLimited(note) => vec![format!("   ⏳ rate limit note: {note}")],
        TreasuryPayload::ProviderError(message) => vec![format!("   ❌ error message: {message}")],
        TreasuryPayload::Unrecognized(keys) => vec![format!("   keys: [{}]", keys.join(", "))],
    }
}

fn point_label(point: &Observation) -> String {
    let date = point.date.as_deref().unwrap_or("undated");
    match point.value {
        Some(value) => format!("{date} = {value:.2}"),
        None => format!("{date} = (not numeric)"),
    }
}
