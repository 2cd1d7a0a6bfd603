//! Linear warm-up followed by multi-step decay

use super::error::{Result, ScheduleError};
use super::observer::RateObserver;
use super::threshold::ThresholdDecay;
use super::{LRScheduler, DEFAULT_BASE_LR};

/// Warm-Up Learning Rate Scheduler
///
/// - Phase 1 (`begin_iter <= num_update < end_iter`): add a fixed delta to the
///   current rate on every call
/// - At `num_update == end_iter`: snap to `end_lr`
/// - Always: apply multi-step decay to the current rate
///
/// The ramp is cumulative per call, not derived from `num_update`. Querying
/// the same update count twice inside the window ramps twice.
#[derive(Debug, Clone, PartialEq)]
pub struct WarmUpScheduler {
    base_lr: f64,
    begin_lr: f64,
    end_lr: f64,
    begin_iter: u64,
    end_iter: u64,
    rate_delta_per_iter: f64,
    current_lr: f64,
    decay: ThresholdDecay,
}

impl WarmUpScheduler {
    /// Create a new warm-up scheduler
    ///
    /// # Arguments
    /// * `begin_lr`, `end_lr` - Rates at the start and end of the window
    /// * `begin_iter`, `end_iter` - Warm-up window, `begin_iter < end_iter`
    /// * `thresholds` - Strictly increasing decay thresholds, all >= 1
    /// * `factor` - Multiplicative decay factor, at most 1.0
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for an empty or inverted warm-up window, or any
    /// threshold/factor rejected by [`ThresholdDecay::new`].
    pub fn new(
        begin_lr: f64,
        end_lr: f64,
        begin_iter: u64,
        end_iter: u64,
        thresholds: Vec<u64>,
        factor: f64,
    ) -> Result<Self> {
        let decay = ThresholdDecay::new(thresholds, factor)?;
        if begin_iter >= end_iter {
            return Err(ScheduleError::invalid(format!(
                "warm-up window must satisfy begin_iter < end_iter, got {begin_iter}..{end_iter}"
            )));
        }
        let rate_delta_per_iter = (end_lr - begin_lr) / (end_iter - begin_iter) as f64;
        Ok(Self {
            base_lr: DEFAULT_BASE_LR,
            begin_lr,
            end_lr,
            begin_iter,
            end_iter,
            rate_delta_per_iter,
            current_lr: begin_lr,
            decay,
        })
    }

    /// Rate after the last call (ramped and decayed)
    pub fn current_lr(&self) -> f64 {
        self.current_lr
    }

    pub fn begin_lr(&self) -> f64 {
        self.begin_lr
    }

    pub fn end_lr(&self) -> f64 {
        self.end_lr
    }

    pub fn window(&self) -> (u64, u64) {
        (self.begin_iter, self.end_iter)
    }

    pub fn rate_delta_per_iter(&self) -> f64 {
        self.rate_delta_per_iter
    }

    pub fn thresholds(&self) -> &[u64] {
        self.decay.thresholds()
    }

    pub fn next_threshold_index(&self) -> usize {
        self.decay.next_threshold_index()
    }
}

impl LRScheduler for WarmUpScheduler {
    fn schedule_with(&mut self, num_update: u64, observer: &mut dyn RateObserver) -> f64 {
        if (self.begin_iter..self.end_iter).contains(&num_update) {
            self.current_lr += self.rate_delta_per_iter;
        } else if num_update == self.end_iter {
            self.current_lr = self.end_lr;
        }
        self.current_lr = self.decay.advance(num_update, self.current_lr, observer);
        self.current_lr
    }

    fn base_lr(&self) -> f64 {
        self.base_lr
    }

    fn set_base_lr(&mut self, lr: f64) {
        self.base_lr = lr;
    }

    fn name(&self) -> &'static str {
        "WarmUpScheduler"
    }
}
