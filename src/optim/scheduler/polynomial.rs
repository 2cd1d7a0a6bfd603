//! Polynomial decay learning rate scheduler

use super::error::{Result, ScheduleError};
use super::observer::RateObserver;
use super::{LRScheduler, DEFAULT_BASE_LR};

/// Default decay exponent
pub const DEFAULT_POWER: f64 = 0.9;

/// Polynomial Decay Learning Rate Scheduler
///
/// Formula: lr = base_lr * (1 - num_update / total_updates)^power
///
/// Stateless: every call recomputes from the construction parameters. Past
/// `total_updates` the base goes negative, and a fractional `power` then
/// yields NaN. Callers keep `num_update` within range.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialScheduler {
    base_lr: f64,
    total_updates: u64,
    power: f64,
}

impl PolynomialScheduler {
    /// Create a new polynomial decay scheduler
    ///
    /// # Arguments
    /// * `total_updates` - Update count at which the rate reaches zero
    /// * `power` - Decay exponent in `[0, 1]`
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when `power` is outside `[0, 1]`.
    pub fn new(total_updates: u64, power: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&power) {
            return Err(ScheduleError::invalid(format!(
                "power must be no more than 1 and larger than 0, got {power}"
            )));
        }
        Ok(Self { base_lr: DEFAULT_BASE_LR, total_updates, power })
    }

    pub fn with_base_lr(mut self, lr: f64) -> Self {
        self.base_lr = lr;
        self
    }

    pub fn total_updates(&self) -> u64 {
        self.total_updates
    }

    pub fn power(&self) -> f64 {
        self.power
    }
}

impl LRScheduler for PolynomialScheduler {
    fn schedule_with(&mut self, num_update: u64, _observer: &mut dyn RateObserver) -> f64 {
        let progress = num_update as f64 / self.total_updates as f64;
        self.base_lr * (1.0 - progress).powf(self.power)
    }

    fn base_lr(&self) -> f64 {
        self.base_lr
    }

    fn set_base_lr(&mut self, lr: f64) {
        self.base_lr = lr;
    }

    fn name(&self) -> &'static str {
        "PolynomialScheduler"
    }
}
