//! Learning rate schedulers
//!
//! Every scheduler maps the update count seen so far to a learning rate:
//! - `StepDecayScheduler` - Multiply by a factor every N updates, down to a floor
//! - `MultiStepScheduler` - Multiply by a factor at each listed threshold
//! - `PolynomialScheduler` - Closed-form `(1 - t/T)^p` decay
//! - `WarmUpScheduler` - Linear ramp, then multi-step decay
//!
//! `num_update` is the largest number of updates applied to any single
//! parameter (see [`crate::optim::UpdateCounter`]). Stateful schedulers keep
//! monotonic counters, so repeated or slightly rewound update counts never
//! apply a decay twice.

mod error;
mod multi_step;
mod observer;
mod polynomial;
mod step_decay;
mod threshold;
mod warm_up;

#[cfg(test)]
mod proptests;

pub use error::{Result, ScheduleError};
pub use multi_step::MultiStepScheduler;
pub use observer::{NoopObserver, RateChange, RateLog, RateObserver, TracingObserver};
pub use polynomial::{PolynomialScheduler, DEFAULT_POWER};
pub use step_decay::{StepDecayScheduler, DEFAULT_FLOOR};
pub use threshold::ThresholdDecay;
pub use warm_up::WarmUpScheduler;

/// Learning rate used when a scheduler is built without one
pub const DEFAULT_BASE_LR: f64 = 0.01;

/// Learning rate scheduler trait
pub trait LRScheduler {
    /// Compute the learning rate for `num_update`, reporting every change
    /// to `observer`
    fn schedule_with(&mut self, num_update: u64, observer: &mut dyn RateObserver) -> f64;

    /// Compute the learning rate for `num_update`, logging changes via `tracing`
    fn schedule(&mut self, num_update: u64) -> f64 {
        self.schedule_with(num_update, &mut TracingObserver)
    }

    /// Current base learning rate
    fn base_lr(&self) -> f64;

    /// Overwrite the base learning rate
    fn set_base_lr(&mut self, lr: f64);

    fn name(&self) -> &'static str;
}

impl<S: LRScheduler + ?Sized> LRScheduler for Box<S> {
    fn schedule_with(&mut self, num_update: u64, observer: &mut dyn RateObserver) -> f64 {
        (**self).schedule_with(num_update, observer)
    }

    fn schedule(&mut self, num_update: u64) -> f64 {
        (**self).schedule(num_update)
    }

    fn base_lr(&self) -> f64 {
        (**self).base_lr()
    }

    fn set_base_lr(&mut self, lr: f64) {
        (**self).set_base_lr(lr);
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
