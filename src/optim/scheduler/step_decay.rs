//! Step decay learning rate scheduler

use super::error::{Result, ScheduleError};
use super::observer::{RateChange, RateObserver};
use super::threshold::check_factor;
use super::{LRScheduler, DEFAULT_BASE_LR};

/// Default lower bound for the decayed rate
pub const DEFAULT_FLOOR: f64 = 1e-8;

/// Step Decay Learning Rate Scheduler
///
/// Multiplies the learning rate by `factor` each time `num_update` moves a
/// full `step` past the last applied boundary, never going below `floor`.
///
/// Boundaries are crossed with a strict comparison, so the first decay
/// happens at `num_update = step + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDecayScheduler {
    base_lr: f64,
    step: u64,
    factor: f64,
    floor: f64,
    elapsed_steps_applied: u64,
}

impl StepDecayScheduler {
    /// Create a new step decay scheduler
    ///
    /// # Arguments
    /// * `step` - Decay every `step` updates (must be >= 1)
    /// * `factor` - Multiplicative factor, at most 1.0
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when `step < 1` or `factor > 1.0`.
    pub fn new(step: u64, factor: f64) -> Result<Self> {
        if step < 1 {
            return Err(ScheduleError::invalid(
                "schedule step must be greater or equal than 1 round",
            ));
        }
        check_factor(factor)?;
        Ok(Self {
            base_lr: DEFAULT_BASE_LR,
            step,
            factor,
            floor: DEFAULT_FLOOR,
            elapsed_steps_applied: 0,
        })
    }

    pub fn with_base_lr(mut self, lr: f64) -> Self {
        self.base_lr = lr;
        self
    }

    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = floor;
        self
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Updates already consumed by applied decays (a multiple of `step`)
    pub fn elapsed_steps_applied(&self) -> u64 {
        self.elapsed_steps_applied
    }
}

impl LRScheduler for StepDecayScheduler {
    fn schedule_with(&mut self, num_update: u64, observer: &mut dyn RateObserver) -> f64 {
        while num_update > self.elapsed_steps_applied.saturating_add(self.step) {
            self.elapsed_steps_applied += self.step;
            self.base_lr *= self.factor;
            let floored = self.base_lr < self.floor;
            if floored {
                self.base_lr = self.floor;
            }
            observer.on_rate_change(&RateChange { num_update, rate: self.base_lr, floored });
        }
        self.base_lr
    }

    fn base_lr(&self) -> f64 {
        self.base_lr
    }

    fn set_base_lr(&mut self, lr: f64) {
        self.base_lr = lr;
    }

    fn name(&self) -> &'static str {
        "StepDecayScheduler"
    }
}
