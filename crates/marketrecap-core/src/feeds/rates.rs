use tracing::{info, warn};

use crate::adapters::{AlphaVantageAdapter, FredAdapter};
use crate::config::{RateFallback, RateSeries};
use crate::data_source::SourceError;
use crate::throttling::RequestPacer;
use crate::{latest_pair, Observation, ProviderId, RateRecord, RateSlot, TreasuryMaturity};

/// Short-term rates: FRED per series, or Alpha Vantage Treasury maturities
/// when FRED produced nothing at all.
#[derive(Clone)]
pub struct ShortRateFeed {
    primary: FredAdapter,
    secondary: AlphaVantageAdapter,
    primary_pacer: RequestPacer,
    secondary_pacer: RequestPacer,
}

impl ShortRateFeed {
    pub fn new(primary: FredAdapter, secondary: AlphaVantageAdapter) -> Self {
        let primary_pacer = RequestPacer::from_policy(primary.policy());
        let secondary_pacer = RequestPacer::from_policy(secondary.policy());
        Self {
            primary,
            secondary,
            primary_pacer,
            secondary_pacer,
        }
    }

    /// One slot per configured series, in input order.
    pub fn fetch(&self, series: &[RateSeries]) -> Vec<RateSlot> {
        let primary = self.from_primary(series);
        if primary.iter().any(|slot| slot.record.is_some()) {
            return primary;
        }

        info!("no short rate from fred, falling back to alphavantage treasury maturities");
        self.from_secondary(series)
    }

    fn from_primary(&self, series: &[RateSeries]) -> Vec<RateSlot> {
        if !self.primary.has_key() {
            warn!("no fred api key configured, skipping fred short rates");
            return series.iter().map(absent).collect();
        }

        series
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                self.primary_pacer.pause_before(position);
                let result = self
                    .primary
                    .latest_observations(&entry.fred_series)
                    .and_then(|observations| record_from(ProviderId::Fred, observations));
                slot_from(entry, ProviderId::Fred, result)
            })
            .collect()
    }

    fn from_secondary(&self, series: &[RateSeries]) -> Vec<RateSlot> {
        let mut fetched: Vec<(TreasuryMaturity, RateRecord)> = Vec::new();
        let mut position = 0;
        let mut slots = series
            .iter()
            .map(|entry| match entry.fallback {
                RateFallback::Maturity(maturity) => {
                    self.secondary_pacer.pause_before(position);
                    position += 1;
                    let result = self
                        .secondary
                        .treasury_yield(maturity)
                        .and_then(|observations| record_from(ProviderId::Alphavantage, observations));
                    let slot = slot_from(entry, ProviderId::Alphavantage, result);
                    if let Some(record) = &slot.record {
                        fetched.push((maturity, record.clone()));
                    }
                    slot
                }
                RateFallback::NearestMaturity => absent(entry),
            })
            .collect::<Vec<_>>();

        for (slot, entry) in slots.iter_mut().zip(series) {
            if entry.fallback != RateFallback::NearestMaturity {
                continue;
            }
            slot.record = approximate_from_nearest_maturity(&fetched);
            match &slot.record {
                Some(record) => info!(
                    series = %entry.key,
                    current = record.current_value,
                    note = record.note.as_deref().unwrap_or_default(),
                    "short rate approximated"
                ),
                None => warn!(series = %entry.key, "no maturity available to approximate from"),
            }
        }

        slots
    }
}

/// Stand-in for a series with no secondary equivalent, such as the policy
/// rate.
///
/// This is a domain approximation, not an estimate: the shortest fetched
/// maturity is copied as-is and tagged `Approximated from <label>` so the
/// report can say so. Returns `None` when nothing was fetched.
pub fn approximate_from_nearest_maturity(
    fetched: &[(TreasuryMaturity, RateRecord)],
) -> Option<RateRecord> {
    fetched
        .iter()
        .min_by_key(|(maturity, _)| *maturity)
        .map(|(maturity, record)| {
            RateRecord::approximated_from(record, format!("Approximated from {}", maturity.label()))
        })
}

fn record_from(provider: ProviderId, observations: Vec<Observation>) -> Result<RateRecord, SourceError> {
    let pair = latest_pair(provider, observations)?;
    Ok(RateRecord::from_change(pair.change(provider)?))
}

fn slot_from(entry: &RateSeries, provider: ProviderId, result: Result<RateRecord, SourceError>) -> RateSlot {
    let record = match result {
        Ok(record) => {
            info!(
                provider = provider.as_str(),
                series = %entry.key,
                current = record.current_value,
                change = record.change,
                "fetched short rate"
            );
            Some(record)
        }
        Err(error) => {
            warn!(
                provider = provider.as_str(),
                series = %entry.key,
                kind = error.kind().as_str(),
                %error,
                "short rate unavailable"
            );
            None
        }
    };
    RateSlot::new(entry.key.clone(), entry.display_name.clone(), record)
}

fn absent(entry: &RateSeries) -> RateSlot {
    RateSlot::new(entry.key.clone(), entry.display_name.clone(), None)
}
