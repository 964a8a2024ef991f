//! # Domain Models
//!
//! Transient records for one recap run. Nothing here outlives the run and
//! nothing is mutated after the feeds hand it over.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AssetRecord`] | Price, previous price, delta, market cap, volume |
//! | [`YieldRecord`] | Benchmark yield with optional observation dates |
//! | [`RateRecord`] | Short-term rate, optionally tagged as an approximation |
//! | [`MarketSnapshot`] | Ordered asset/rate slots plus the benchmark yield |
//! | [`Sentiment`] | Majority vote over asset percent changes |
//! | [`Observation`] | Raw dated point of a provider series |
//! | [`ReportDates`] | Run date and backdated trading day |
//!
//! ## Delta invariant
//!
//! Every record built from two points goes through [`Change::between`]:
//!
//! ```rust
//! use marketrecap_core::Change;
//!
//! let change = Change::between(4.10, 4.00).expect("finite inputs");
//! assert!((change.absolute - 0.10).abs() < 1e-9);
//! assert!((change.percent - 2.5).abs() < 1e-9);
//! ```

mod dates;
mod maturity;
mod models;
mod observation;
mod sentiment;
mod snapshot;
mod symbol;

pub use dates::{file_stamp, long_date, ReportDates};
pub use maturity::TreasuryMaturity;
pub use models::{AssetRecord, Change, RateRecord, YieldRecord};
pub use observation::{latest_pair, normalize_descending, LatestPair, Observation};
pub(crate) use observation::parse_numeric;
pub use sentiment::{RiskAppetite, Sentiment};
pub use snapshot::{AssetSlot, MarketSnapshot, RateSlot};
pub use symbol::Symbol;
