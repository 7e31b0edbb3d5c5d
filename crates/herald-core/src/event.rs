//! The periodic event contract.
//!
//! An event runs autonomously on a fixed recurring interval, independent of
//! user input. One instance per concrete type is created at registry build
//! time and invoked repeatedly by the scheduler.

use std::num::NonZeroU32;
use std::time::Duration;

use async_trait::async_trait;

use crate::client::ChatClient;
use crate::error::SendResult;

/// Immutable descriptor for a periodic event.
///
/// The interval is encoded as [`NonZeroU32`], so positivity holds by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSpec {
    interval_minutes: NonZeroU32,
}

impl EventSpec {
    /// Creates a descriptor firing every `interval_minutes` minutes.
    pub const fn new(interval_minutes: NonZeroU32) -> Self {
        Self { interval_minutes }
    }

    /// Returns the configured interval in minutes.
    pub const fn interval_minutes(&self) -> NonZeroU32 {
        self.interval_minutes
    }

    /// Returns the interval as a [`Duration`].
    pub const fn period(&self) -> Duration {
        Duration::from_secs(self.interval_minutes.get() as u64 * 60)
    }
}

/// A handler invoked once per scheduled tick.
///
/// Implementations must be `Default`-constructible for
/// [`register_event!`](crate::register_event), and construction must not
/// perform I/O. A returned error is logged at the scheduler boundary and
/// never cancels future ticks.
#[async_trait]
pub trait Event: Send + Sync {
    /// A static label used in scheduler logs.
    fn name(&self) -> &'static str;

    /// Returns this event's descriptor.
    fn spec(&self) -> &EventSpec;

    /// Runs one tick.
    async fn run(&self, client: &dyn ChatClient) -> SendResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_converts_minutes_to_seconds() {
        let spec = EventSpec::new(NonZeroU32::new(60).unwrap());
        assert_eq!(spec.period(), Duration::from_secs(3600));
        assert_eq!(spec.interval_minutes().get(), 60);
    }
}
