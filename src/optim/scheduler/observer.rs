//! Rate-change notifications
//!
//! Schedulers never log through a global. Every decay or floor clamp is
//! reported to a [`RateObserver`] handed in at call time, so callers decide
//! whether events reach `tracing`, a test buffer, or nowhere at all.

/// A single learning rate change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateChange {
    /// Update count that triggered the change
    pub num_update: u64,
    /// Learning rate after the change
    pub rate: f64,
    /// The rate hit the scheduler floor and will not move again
    pub floored: bool,
}

/// Sink for rate-change events
pub trait RateObserver {
    fn on_rate_change(&mut self, change: &RateChange);
}

/// Forwards rate changes to `tracing` at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RateObserver for TracingObserver {
    fn on_rate_change(&mut self, change: &RateChange) {
        if change.floored {
            tracing::info!(
                num_update = change.num_update,
                rate = change.rate,
                "Update[{}]: learning rate arrived at {:.5e}, will not change in the future",
                change.num_update,
                change.rate
            );
        } else {
            tracing::info!(
                num_update = change.num_update,
                rate = change.rate,
                "Update[{}]: Change learning rate to {:.5e}",
                change.num_update,
                change.rate
            );
        }
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RateObserver for NoopObserver {
    fn on_rate_change(&mut self, _change: &RateChange) {}
}

/// Records events in arrival order
#[derive(Debug, Clone, Default)]
pub struct RateLog {
    events: Vec<RateChange>,
}

impl RateLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RateChange] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Most recent rate reported, if any
    pub fn last_rate(&self) -> Option<f64> {
        self.events.last().map(|e| e.rate)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl RateObserver for RateLog {
    fn on_rate_change(&mut self, change: &RateChange) {
        self.events.push(*change);
    }
}

impl<O: RateObserver + ?Sized> RateObserver for &mut O {
    fn on_rate_change(&mut self, change: &RateChange) {
        (**self).on_rate_change(change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(num_update: u64, rate: f64) -> RateChange {
        RateChange { num_update, rate, floored: false }
    }

    #[test]
    fn test_rate_log_records_in_order() {
        let mut log = RateLog::new();
        assert!(log.is_empty());
        log.on_rate_change(&change(11, 0.5));
        log.on_rate_change(&change(21, 0.25));

        assert_eq!(log.len(), 2);
        assert_eq!(log.events()[0].num_update, 11);
        assert_eq!(log.last_rate(), Some(0.25));

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.last_rate(), None);
    }

    #[test]
    fn test_observer_through_mut_ref() {
        fn feed<O: RateObserver>(mut obs: O) {
            obs.on_rate_change(&change(3, 0.1));
        }

        let mut log = RateLog::new();
        feed(&mut log);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_tracing_observer_without_subscriber() {
        // No subscriber installed: events are dropped silently.
        let mut obs = TracingObserver;
        obs.on_rate_change(&change(1, 0.1));
        obs.on_rate_change(&RateChange { num_update: 2, rate: 1e-8, floored: true });
    }

    #[test]
    fn test_tracing_observer_with_subscriber() {
        let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
        tracing::subscriber::with_default(subscriber, || {
            let mut obs = TracingObserver;
            obs.on_rate_change(&change(101, 0.001));
        });
    }

    #[test]
    fn test_noop_observer() {
        let mut obs = NoopObserver;
        obs.on_rate_change(&change(1, 0.1));
    }
}
