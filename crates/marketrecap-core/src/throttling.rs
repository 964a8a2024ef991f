use std::time::Duration;

use crate::provider_policy::ProviderPolicy;

/// Fixed pause between successive requests of one per-item loop.
///
/// The first request of a loop goes out immediately; every later one waits
/// `spacing` first, whether or not the previous request succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestPacer {
    spacing: Duration,
}

impl RequestPacer {
    pub const fn new(spacing: Duration) -> Self {
        Self { spacing }
    }

    pub fn from_policy(policy: &ProviderPolicy) -> Self {
        Self::new(policy.request_spacing)
    }

    pub const fn spacing(&self) -> Duration {
        self.spacing
    }

    /// Delay owed before the request at `position` (zero-based) in a loop.
    pub fn delay_before(&self, position: usize) -> Duration {
        if position == 0 {
            Duration::ZERO
        } else {
            self.spacing
        }
    }

    pub fn pause_before(&self, position: usize) {
        let delay = self.delay_before(position);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_is_not_delayed() {
        let pacer = RequestPacer::new(Duration::from_secs(2));
        assert_eq!(pacer.delay_before(0), Duration::ZERO);
        assert_eq!(pacer.delay_before(1), Duration::from_secs(2));
        assert_eq!(pacer.delay_before(7), Duration::from_secs(2));
    }

    #[test]
    fn zero_spacing_never_sleeps() {
        let pacer = RequestPacer::from_policy(&ProviderPolicy::fred_default().without_spacing());
        let started = std::time::Instant::now();
        for position in 0..100 {
            pacer.pause_before(position);
        }
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
