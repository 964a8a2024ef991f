use std::sync::Arc;

use time::Date;
use tracing::info;

use crate::adapters::{AlphaVantageAdapter, CoinGeckoAdapter, FredAdapter};
use crate::config::RecapConfig;
use crate::error::ValidationError;
use crate::feeds::{PriceFeed, ShortRateFeed, YieldFeed};
use crate::http_client::HttpClient;
use crate::narrative::NarrativeSynthesizer;
use crate::report::ReportAssembler;
use crate::{MarketSnapshot, ReportDates, Sentiment};

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RecapOutcome {
    pub dates: ReportDates,
    pub snapshot: MarketSnapshot,
    pub sentiment: Sentiment,
    pub narrative: Option<String>,
    pub text: String,
}

/// Sequential recap driver: prices, benchmark yield, short rates, then the
/// optional narrative and the rendered text.
pub struct MarketRecap {
    config: RecapConfig,
    prices: PriceFeed,
    yields: YieldFeed,
    rates: ShortRateFeed,
    narrative: Option<NarrativeSynthesizer>,
}

impl MarketRecap {
    /// Fails only when the configuration cannot start a run, before any
    /// request is made.
    pub fn new(config: RecapConfig, http_client: Arc<dyn HttpClient>) -> Result<Self, ValidationError> {
        config.validate()?;

        let policies = &config.policies;
        let credentials = &config.credentials;
        let alphavantage = AlphaVantageAdapter::new(
            Arc::clone(&http_client),
            credentials.alphavantage(),
            policies.alphavantage.clone(),
        );
        let fred = FredAdapter::new(
            Arc::clone(&http_client),
            credentials.fred().map(str::to_owned),
            policies.fred.clone(),
        );
        let coingecko = CoinGeckoAdapter::new(Arc::clone(&http_client), policies.coingecko.clone());

        let prices = PriceFeed::new(coingecko, config.mode);
        let yields = YieldFeed::new(alphavantage.clone(), fred.clone(), config.benchmark);
        let rates = ShortRateFeed::new(fred, alphavantage);
        let narrative = NarrativeSynthesizer::from_credential(
            http_client,
            credentials.anthropic(),
            policies.anthropic.clone(),
            config.narrative.clone(),
            config.benchmark,
        );

        Ok(Self {
            config,
            prices,
            yields,
            rates,
            narrative,
        })
    }

    pub fn config(&self) -> &RecapConfig {
        &self.config
    }

    pub fn has_narrative(&self) -> bool {
        self.narrative.is_some()
    }

    /// Run every feed once, in order, and freeze the result.
    pub fn collect(&self) -> MarketSnapshot {
        let assets = self.prices.fetch(&self.config.assets);
        let treasury = self.yields.fetch();
        let rates = self.rates.fetch(&self.config.rates);
        MarketSnapshot::new(assets, treasury, rates)
    }

    pub fn run(&self, run_date: Date) -> RecapOutcome {
        let dates = ReportDates::for_run(run_date);
        info!(
            mode = self.config.mode.as_str(),
            run_date = %dates.run_label(),
            data_date = %dates.data_label(),
            narrative = self.has_narrative(),
            "starting market recap"
        );

        let snapshot = self.collect();
        let sentiment = snapshot.sentiment();
        let narrative = self
            .narrative
            .as_ref()
            .and_then(|synthesizer| synthesizer.synthesize(&snapshot, sentiment));

        let text = ReportAssembler::new(self.config.mode, dates, self.config.benchmark)
            .assemble(&snapshot, narrative.as_deref());

        info!(
            assets = snapshot.assets().count(),
            treasury = snapshot.treasury().is_some(),
            rates = snapshot.rates().count(),
            sentiment = sentiment.as_str(),
            "market recap assembled"
        );

        RecapOutcome {
            dates,
            snapshot,
            sentiment,
            narrative,
            text,
        }
    }
}
