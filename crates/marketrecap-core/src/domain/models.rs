use crate::{Symbol, ValidationError};

/// Current/previous pair with the derived day-over-day delta.
///
/// `absolute == current - previous`; `percent == absolute / previous * 100`
/// when `previous != 0`, otherwise `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Change {
    pub current: f64,
    pub previous: f64,
    pub absolute: f64,
    pub percent: f64,
}

impl Change {
    pub fn between(current: f64, previous: f64) -> Result<Self, ValidationError> {
        validate_finite("current", current)?;
        validate_finite("previous", previous)?;

        let absolute = current - previous;
        let percent = if previous != 0.0 {
            absolute / previous * 100.0
        } else {
            0.0
        };

        Ok(Self {
            current,
            previous,
            absolute,
            percent,
        })
    }
}

/// Per-asset price record.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRecord {
    pub symbol: Symbol,
    pub current_value: f64,
    pub previous_value: f64,
    pub absolute_change: f64,
    pub percent_change: f64,
    pub market_cap: Option<f64>,
    pub volume: Option<f64>,
}

impl AssetRecord {
    /// Record derived from two daily closes.
    pub fn from_closes(
        symbol: Symbol,
        current_close: f64,
        previous_close: f64,
        market_cap: Option<f64>,
        volume: Option<f64>,
    ) -> Result<Self, ValidationError> {
        let change = Change::between(current_close, previous_close)?;
        validate_optional_finite("market_cap", market_cap)?;
        validate_optional_finite("volume", volume)?;

        Ok(Self {
            symbol,
            current_value: change.current,
            previous_value: change.previous,
            absolute_change: change.absolute,
            percent_change: change.percent,
            market_cap,
            volume,
        })
    }

    /// Record built from a provider-reported 24h change. The percent change
    /// is taken as reported; the previous value is backed out of the
    /// absolute change.
    pub fn from_spot(
        symbol: Symbol,
        current_price: f64,
        change_24h: f64,
        change_24h_pct: f64,
        market_cap: Option<f64>,
        volume: Option<f64>,
    ) -> Result<Self, ValidationError> {
        validate_finite("current_price", current_price)?;
        validate_finite("change_24h", change_24h)?;
        validate_finite("change_24h_pct", change_24h_pct)?;
        validate_optional_finite("market_cap", market_cap)?;
        validate_optional_finite("volume", volume)?;

        Ok(Self {
            symbol,
            current_value: current_price,
            previous_value: current_price - change_24h,
            absolute_change: change_24h,
            percent_change: change_24h_pct,
            market_cap,
            volume,
        })
    }
}

/// Benchmark yield record. Dates are carried only when the provider sent them.
#[derive(Debug, Clone, PartialEq)]
pub struct YieldRecord {
    pub current_value: f64,
    pub previous_value: f64,
    pub change: f64,
    pub change_pct: f64,
    pub current_date: Option<String>,
    pub previous_date: Option<String>,
}

impl YieldRecord {
    pub fn from_change(change: Change) -> Self {
        Self {
            current_value: change.current,
            previous_value: change.previous,
            change: change.absolute,
            change_pct: change.percent,
            current_date: None,
            previous_date: None,
        }
    }

    pub fn with_dates(mut self, current_date: Option<String>, previous_date: Option<String>) -> Self {
        self.current_date = current_date;
        self.previous_date = previous_date;
        self
    }
}

/// Short-term rate record.
///
/// `note` is only ever set by the approximation fallback and must be shown
/// wherever the record is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct RateRecord {
    pub current_value: f64,
    pub previous_value: f64,
    pub change: f64,
    pub change_pct: f64,
    pub note: Option<String>,
}

impl RateRecord {
    pub fn from_change(change: Change) -> Self {
        Self {
            current_value: change.current,
            previous_value: change.previous,
            change: change.absolute,
            change_pct: change.percent,
            note: None,
        }
    }

    /// Copy of `source` standing in for a series that could not be fetched.
    pub fn approximated_from(source: &RateRecord, note: impl Into<String>) -> Self {
        Self {
            note: Some(note.into()),
            ..source.clone()
        }
    }

    pub fn is_approximation(&self) -> bool {
        self.note.is_some()
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

fn validate_optional_finite(
    field: &'static str,
    value: Option<f64>,
) -> Result<(), ValidationError> {
    if let Some(value) = value {
        validate_finite(field, value)?;
    }
    Ok(())
}
