use tracing::{info, warn};

use super::validation_to_error;
use crate::adapters::CoinGeckoAdapter;
use crate::config::{ReportMode, TrackedAsset};
use crate::data_source::SourceError;
use crate::throttling::RequestPacer;
use crate::{AssetRecord, AssetSlot, ProviderId};

const PROVIDER: ProviderId = ProviderId::Coingecko;
const CLOSING_HISTORY_DAYS: u32 = 2;

/// Per-asset price records from CoinGecko.
#[derive(Clone)]
pub struct PriceFeed {
    adapter: CoinGeckoAdapter,
    mode: ReportMode,
    pacer: RequestPacer,
}

impl PriceFeed {
    pub fn new(adapter: CoinGeckoAdapter, mode: ReportMode) -> Self {
        let pacer = RequestPacer::from_policy(adapter.policy());
        Self {
            adapter,
            mode,
            pacer,
        }
    }

    /// One slot per tracked asset, in input order. A failed asset becomes an
    /// absent slot and never stops the loop.
    pub fn fetch(&self, assets: &[TrackedAsset]) -> Vec<AssetSlot> {
        assets
            .iter()
            .enumerate()
            .map(|(position, asset)| {
                self.pacer.pause_before(position);
                let record = match self.fetch_asset(asset) {
                    Ok(record) => {
                        info!(
                            symbol = %asset.symbol,
                            price = record.current_value,
                            change_pct = record.percent_change,
                            mode = self.mode.as_str(),
                            "fetched asset price"
                        );
                        Some(record)
                    }
                    Err(error) => {
                        warn!(
                            symbol = %asset.symbol,
                            coin_id = %asset.coin_id,
                            kind = error.kind().as_str(),
                            %error,
                            "asset price unavailable"
                        );
                        None
                    }
                };
                AssetSlot::new(asset.symbol.clone(), record)
            })
            .collect()
    }

    pub fn fetch_asset(&self, asset: &TrackedAsset) -> Result<AssetRecord, SourceError> {
        match self.mode {
            ReportMode::Spot => self.spot(asset),
            ReportMode::Closing => self.closing(asset),
        }
    }

    fn spot(&self, asset: &TrackedAsset) -> Result<AssetRecord, SourceError> {
        let data = self.adapter.coin_market_data(&asset.coin_id)?;
        let (Some(change), Some(change_pct)) =
            (data.price_change_24h, data.price_change_percentage_24h)
        else {
            return Err(SourceError::malformed(
                PROVIDER,
                format!("no 24h change reported for '{}'", asset.coin_id),
            ));
        };

        AssetRecord::from_spot(
            asset.symbol.clone(),
            data.current_price,
            change,
            change_pct,
            data.market_cap,
            data.total_volume,
        )
        .map_err(|error| validation_to_error(PROVIDER, error))
    }

    fn closing(&self, asset: &TrackedAsset) -> Result<AssetRecord, SourceError> {
        let points = self
            .adapter
            .daily_prices(&asset.coin_id, CLOSING_HISTORY_DAYS)?;
        let [.., previous, current] = points.as_slice() else {
            return Err(SourceError::insufficient_data(
                PROVIDER,
                format!(
                    "{} daily close(s) for '{}', need at least 2",
                    points.len(),
                    asset.coin_id
                ),
            ));
        };

        // Market cap and volume are not rendered; losing them keeps the closes.
        let (market_cap, volume) = match self.adapter.coin_market_data(&asset.coin_id) {
            Ok(data) => (data.market_cap, data.total_volume),
            Err(error) => {
                warn!(symbol = %asset.symbol, %error, "market cap and volume unavailable");
                (None, None)
            }
        };

        AssetRecord::from_closes(
            asset.symbol.clone(),
            current.price,
            previous.price,
            market_cap,
            volume,
        )
        .map_err(|error| validation_to_error(PROVIDER, error))
    }
}
