use crate::domain::models::{AssetRecord, RateRecord, YieldRecord};
use crate::domain::sentiment::Sentiment;
use crate::Symbol;

/// A tracked asset and whatever its fetch produced.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetSlot {
    pub symbol: Symbol,
    pub record: Option<AssetRecord>,
}

impl AssetSlot {
    pub fn new(symbol: Symbol, record: Option<AssetRecord>) -> Self {
        Self { symbol, record }
    }

    pub fn absent(symbol: Symbol) -> Self {
        Self::new(symbol, None)
    }
}

/// A configured short-rate series and whatever its fetch produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSlot {
    pub key: String,
    pub display_name: String,
    pub record: Option<RateRecord>,
}

impl RateSlot {
    pub fn new(key: impl Into<String>, display_name: impl Into<String>, record: Option<RateRecord>) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            record,
        }
    }
}

/// Everything fetched during one run, in configured order.
///
/// Built once from the feed results and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    assets: Vec<AssetSlot>,
    treasury: Option<YieldRecord>,
    rates: Vec<RateSlot>,
}

impl MarketSnapshot {
    pub fn new(assets: Vec<AssetSlot>, treasury: Option<YieldRecord>, rates: Vec<RateSlot>) -> Self {
        Self {
            assets,
            treasury,
            rates,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), None, Vec::new())
    }

    pub fn asset_slots(&self) -> &[AssetSlot] {
        &self.assets
    }

    /// Present asset records in configured order.
    pub fn assets(&self) -> impl Iterator<Item = &AssetRecord> + '_ {
        self.assets.iter().filter_map(|slot| slot.record.as_ref())
    }

    pub fn asset(&self, symbol: &str) -> Option<&AssetRecord> {
        self.assets
            .iter()
            .find(|slot| slot.symbol.as_str().eq_ignore_ascii_case(symbol))
            .and_then(|slot| slot.record.as_ref())
    }

    pub fn treasury(&self) -> Option<&YieldRecord> {
        self.treasury.as_ref()
    }

    pub fn rate_slots(&self) -> &[RateSlot] {
        &self.rates
    }

    /// Present rate records with their display names, in configured order.
    pub fn rates(&self) -> impl Iterator<Item = (&str, &RateRecord)> + '_ {
        self.rates
            .iter()
            .filter_map(|slot| slot.record.as_ref().map(|record| (slot.display_name.as_str(), record)))
    }

    pub fn rate(&self, key: &str) -> Option<&RateRecord> {
        self.rates
            .iter()
            .find(|slot| slot.key == key)
            .and_then(|slot| slot.record.as_ref())
    }

    pub fn has_assets(&self) -> bool {
        self.assets().next().is_some()
    }

    pub fn has_rates(&self) -> bool {
        self.rates().next().is_some()
    }

    pub fn sentiment(&self) -> Sentiment {
        Sentiment::from_percent_changes(self.assets().map(|record| record.percent_change))
    }
}
