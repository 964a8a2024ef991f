//! Optional prose correlation analysis.
//!
//! A [`NarrativeSynthesizer`] exists only when an Anthropic key is
//! configured. Holding `Option<NarrativeSynthesizer>` is the capability
//! flag; a missing synthesizer and a failed call look the same to the
//! report.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapters::AnthropicAdapter;
use crate::config::NarrativeSettings;
use crate::http_client::HttpClient;
use crate::provider_policy::ProviderPolicy;
use crate::report::{format_signed, format_usd};
use crate::{MarketSnapshot, Sentiment, TreasuryMaturity};

const NO_DATA: &str = "No data";

#[derive(Clone)]
pub struct NarrativeSynthesizer {
    adapter: AnthropicAdapter,
    settings: NarrativeSettings,
    benchmark: TreasuryMaturity,
}

impl NarrativeSynthesizer {
    /// `None` when no usable key is configured.
    pub fn from_credential(
        http_client: Arc<dyn HttpClient>,
        api_key: Option<&str>,
        policy: ProviderPolicy,
        settings: NarrativeSettings,
        benchmark: TreasuryMaturity,
    ) -> Option<Self> {
        let api_key = api_key.map(str::trim).filter(|key| !key.is_empty())?;
        Some(Self {
            adapter: AnthropicAdapter::new(http_client, api_key, policy),
            settings,
            benchmark,
        })
    }

    pub fn synthesize(&self, snapshot: &MarketSnapshot, sentiment: Sentiment) -> Option<String> {
        let prompt = build_prompt(snapshot, self.benchmark, sentiment);
        match self.adapter.complete(&prompt, &self.settings) {
            Ok(text) => {
                info!(model = %self.settings.model, chars = text.len(), "narrative generated");
                Some(text)
            }
            Err(error) => {
                warn!(
                    kind = error.kind().as_str(),
                    %error,
                    "narrative unavailable, using standard analysis"
                );
                None
            }
        }
    }
}

/// Prompt text for the narrative call. Built from computed summary fields
/// only, never from provider payloads.
pub fn build_prompt(snapshot: &MarketSnapshot, benchmark: TreasuryMaturity, sentiment: Sentiment) -> String {
    let crypto = snapshot
        .assets()
        .map(|record| {
            format!(
                "{}: ${} ({}% {})",
                record.symbol,
                format_usd(record.current_value),
                format_signed(record.percent_change),
                direction(record.percent_change)
            )
        })
        .collect::<Vec<_>>();

    let treasury = snapshot.treasury().map(|record| {
        format!(
            "{}: {:.2}% ({}bps {})",
            benchmark.label(),
            record.current_value,
            format_signed(record.change),
            direction(record.change)
        )
    });

    let rates = snapshot
        .rates()
        .map(|(name, record)| {
            format!(
                "{name}: {:.2}% ({}bps {})",
                record.current_value,
                format_signed(record.change),
                direction(record.change)
            )
        })
        .collect::<Vec<_>>();

    format!(
        "You are a financial market analyst providing insights for a daily market recap report. \n\
         \n\
         Market Data Summary:\n\
         - Cryptocurrencies: {crypto}\n\
         - Treasury: {treasury}\n\
         - Short-term Rates: {rates}\n\
         - Overall Sentiment: {sentiment}\n\
         \n\
         Provide a concise, professional market correlation analysis (2-3 sentences) that:\n\
         1. Explains the relationship between Treasury yields, interest rates, and cryptocurrency performance\n\
         2. Identifies key market dynamics and what they might indicate\n\
         3. Uses professional financial language suitable for LinkedIn\n\
         4. Is insightful but not overly technical\n\
         5. Includes relevant market context\n\
         \n\
         Format your response as plain text without markdown, emojis, or special formatting. Keep it under 200 words.",
        crypto = join_or_no_data(&crypto),
        treasury = treasury.as_deref().unwrap_or(NO_DATA),
        rates = join_or_no_data(&rates),
        sentiment = sentiment.label(),
    )
}

fn direction(change: f64) -> &'static str {
    if change > 0.0 {
        "up"
    } else {
        "down"
    }
}

fn join_or_no_data(parts: &[String]) -> String {
    if parts.is_empty() {
        NO_DATA.to_owned()
    } else {
        parts.join(", ")
    }
}
