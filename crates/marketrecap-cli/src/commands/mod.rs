mod probe;
mod run;

use std::sync::Arc;
use std::time::Duration;

use marketrecap_core::{Credentials, HttpClient, RecapConfig, ReportMode, ReqwestHttpClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Secondary variable consulted when the primary Alpha Vantage variable is unset.
const LEGACY_ALPHAVANTAGE_ENV: &str = "ALPHAVANTAGE_API_KEY";

pub fn run(cli: &Cli) -> Result<(), CliError> {
    let http_client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());

    match cli.resolved_command() {
        Command::Run(args) => run::run(cli, &args, http_client),
        Command::ProbeTreasury(args) => probe::run(cli, &args, http_client),
    }
}

/// The Alpha Vantage key from the flag, its env binding, or the legacy
/// variable. Blank values count as missing.
fn alphavantage_key(cli: &Cli) -> Result<String, CliError> {
    cli.alphavantage_key
        .clone()
        .and_then(non_blank)
        .or_else(|| std::env::var(LEGACY_ALPHAVANTAGE_ENV).ok().and_then(non_blank))
        .ok_or(CliError::MissingApiKey)
}

fn non_blank(key: String) -> Option<String> {
    let key = key.trim();
    (!key.is_empty()).then(|| key.to_owned())
}

fn build_config(cli: &Cli, mode: ReportMode) -> Result<RecapConfig, CliError> {
    let credentials = Credentials::new(alphavantage_key(cli)?)
        .with_fred(cli.fred_key.clone())
        .with_anthropic(cli.anthropic_key.clone());

    let mut config = RecapConfig::new(mode, credentials)
        .with_feed_timeout(Duration::from_millis(cli.timeout_ms));
    if cli.no_pacing {
        config = config.without_pacing();
    }
    if let Some(model) = &cli.model {
        config = config.with_model(model.clone());
    }
    Ok(config)
}

/// `abcdefgh...wxyz`, or `***` for keys too short to show any of.
pub fn mask_key(key: &str) -> String {
    let chars = key.chars().collect::<Vec<_>>();
    if chars.len() <= 12 {
        return String::from("***");
    }
    let head = chars[..8].iter().collect::<String>();
    let tail = chars[chars.len() - 4..].iter().collect::<String>();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn long_keys_show_head_and_tail() {
        assert_eq!(mask_key("ABCDEFGH12345678WXYZ"), "ABCDEFGH...WXYZ");
    }

    #[test]
    fn short_keys_are_fully_masked() {
        assert_eq!(mask_key("demo"), "***");
        assert_eq!(mask_key("123456789012"), "***");
    }

    #[test]
    fn flags_flow_into_config() {
        let cli = Cli::try_parse_from([
            "marketrecap",
            "--alphavantage-key",
            "av-key",
            "--fred-key",
            "fred-key",
            "--timeout-ms",
            "1500",
            "--no-pacing",
            "--model",
            "claude-test",
        ])
        .expect("should parse");

        let config = build_config(&cli, ReportMode::Spot).expect("config should build");
        assert_eq!(config.credentials.alphavantage(), "av-key");
        assert_eq!(config.credentials.fred(), Some("fred-key"));
        assert_eq!(config.policies.fred.timeout, Duration::from_millis(1500));
        assert!(config.policies.coingecko.request_spacing.is_zero());
        assert_eq!(config.narrative.model, "claude-test");
    }

    #[test]
    fn blank_flag_key_is_missing() {
        let cli = Cli::try_parse_from(["marketrecap", "--alphavantage-key", "  "]).expect("should parse");
        // The legacy variable may be set in the test environment; only a
        // present, non-blank value may come back.
        match alphavantage_key(&cli) {
            Ok(key) => assert!(!key.trim().is_empty()),
            Err(error) => assert_eq!(error.exit_code(), 2),
        }
    }
}
