use tracing::{info, warn};

use crate::adapters::{AlphaVantageAdapter, FredAdapter};
use crate::data_source::SourceError;
use crate::{latest_pair, Observation, ProviderId, TreasuryMaturity, YieldRecord};

/// Benchmark yield: Alpha Vantage first, then the FRED constant-maturity
/// series for the same maturity. No third attempt.
#[derive(Clone)]
pub struct YieldFeed {
    primary: AlphaVantageAdapter,
    fallback: FredAdapter,
    maturity: TreasuryMaturity,
}

impl YieldFeed {
    pub fn new(primary: AlphaVantageAdapter, fallback: FredAdapter, maturity: TreasuryMaturity) -> Self {
        Self {
            primary,
            fallback,
            maturity,
        }
    }

    pub fn fetch(&self) -> Option<YieldRecord> {
        let primary_error = match self.from_primary() {
            Ok(record) => {
                self.log_record(ProviderId::Alphavantage, &record);
                return Some(record);
            }
            Err(error) => error,
        };
        warn!(
            maturity = self.maturity.short_label(),
            kind = primary_error.kind().as_str(),
            error = %primary_error,
            "primary yield source failed, trying fred"
        );

        match self.from_fallback() {
            Ok(record) => {
                self.log_record(ProviderId::Fred, &record);
                Some(record)
            }
            Err(error) => {
                warn!(
                    maturity = self.maturity.short_label(),
                    kind = error.kind().as_str(),
                    %error,
                    "fallback yield source failed, yield unavailable"
                );
                None
            }
        }
    }

    fn from_primary(&self) -> Result<YieldRecord, SourceError> {
        let observations = self.primary.treasury_yield(self.maturity)?;
        record_from(ProviderId::Alphavantage, observations)
    }

    fn from_fallback(&self) -> Result<YieldRecord, SourceError> {
        let observations = self
            .fallback
            .latest_observations(self.maturity.fred_series())?;
        record_from(ProviderId::Fred, observations)
    }

    fn log_record(&self, provider: ProviderId, record: &YieldRecord) {
        info!(
            provider = provider.as_str(),
            maturity = self.maturity.short_label(),
            current = record.current_value,
            change = record.change,
            "fetched benchmark yield"
        );
    }
}

fn record_from(provider: ProviderId, observations: Vec<Observation>) -> Result<YieldRecord, SourceError> {
    let pair = latest_pair(provider, observations)?;
    let change = pair.change(provider)?;
    Ok(YieldRecord::from_change(change).with_dates(pair.current.date, pair.previous.date))
}
