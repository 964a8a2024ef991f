//! Feed components.
//!
//! A feed wraps one or two adapters and owns the best-effort policy for its
//! slice of the snapshot: pacing between per-item requests, fallback to a
//! secondary provider, and turning every [`SourceError`] into an absent
//! record after logging it.

mod price;
mod rates;
mod yields;

pub use price::PriceFeed;
pub use rates::{approximate_from_nearest_maturity, ShortRateFeed};
pub use yields::YieldFeed;

use crate::data_source::SourceError;
use crate::{ProviderId, ValidationError};

fn validation_to_error(provider: ProviderId, error: ValidationError) -> SourceError {
    SourceError::malformed(provider, format!("{provider} payload failed validation: {error}"))
}
