//! Learning rate scheduling for optimizers

mod optimizer;
pub mod scheduler;
mod update_count;

pub use optimizer::Optimizer;
pub use scheduler::{
    LRScheduler, MultiStepScheduler, NoopObserver, PolynomialScheduler, RateChange, RateLog,
    RateObserver, Result, ScheduleError, StepDecayScheduler, ThresholdDecay, TracingObserver,
    WarmUpScheduler, DEFAULT_BASE_LR, DEFAULT_FLOOR, DEFAULT_POWER,
};
pub use update_count::{ScheduledRate, UpdateCounter};
