//! Multi-step learning rate scheduler

use super::error::Result;
use super::observer::RateObserver;
use super::threshold::ThresholdDecay;
use super::{LRScheduler, DEFAULT_BASE_LR};

/// Multi-Step Learning Rate Scheduler
///
/// Multiplies the learning rate by `factor` once for every threshold that
/// `num_update` has strictly exceeded.
///
/// Formula: lr = base_lr * factor^k, where k counts thresholds t with t < num_update
#[derive(Debug, Clone, PartialEq)]
pub struct MultiStepScheduler {
    base_lr: f64,
    decay: ThresholdDecay,
}

impl MultiStepScheduler {
    /// Create a new multi-step scheduler
    ///
    /// # Arguments
    /// * `thresholds` - Strictly increasing update counts, all >= 1
    /// * `factor` - Multiplicative factor, at most 1.0
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for an empty or non-increasing list, a zero
    /// threshold, or `factor > 1.0`.
    pub fn new(thresholds: Vec<u64>, factor: f64) -> Result<Self> {
        Ok(Self { base_lr: DEFAULT_BASE_LR, decay: ThresholdDecay::new(thresholds, factor)? })
    }

    pub fn with_base_lr(mut self, lr: f64) -> Self {
        self.base_lr = lr;
        self
    }

    pub fn thresholds(&self) -> &[u64] {
        self.decay.thresholds()
    }

    pub fn factor(&self) -> f64 {
        self.decay.factor()
    }

    /// Index of the next threshold to cross
    pub fn next_threshold_index(&self) -> usize {
        self.decay.next_threshold_index()
    }
}

impl LRScheduler for MultiStepScheduler {
    fn schedule_with(&mut self, num_update: u64, observer: &mut dyn RateObserver) -> f64 {
        self.base_lr = self.decay.advance(num_update, self.base_lr, observer);
        self.base_lr
    }

    fn base_lr(&self) -> f64 {
        self.base_lr
    }

    fn set_base_lr(&mut self, lr: f64) {
        self.base_lr = lr;
    }

    fn name(&self) -> &'static str {
        "MultiStepScheduler"
    }
}
