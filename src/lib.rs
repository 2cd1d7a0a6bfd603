//! Update-count driven learning rate schedules
//!
//! An optimizer asks a scheduler for the rate to use after `num_update`
//! weight updates:
//!
//! ```rust
//! use entrenar_lr::optim::{LRScheduler, StepDecayScheduler};
//!
//! let mut scheduler = StepDecayScheduler::new(100, 0.5).unwrap().with_base_lr(0.1);
//! assert_eq!(scheduler.schedule(100), 0.1);
//! assert_eq!(scheduler.schedule(101), 0.05);
//! ```
//!
//! Rate changes are reported through a [`RateObserver`](optim::RateObserver);
//! `schedule` uses [`TracingObserver`](optim::TracingObserver).

pub mod config;
pub mod optim;

pub use config::SchedulerSpec;
pub use optim::{
    LRScheduler, MultiStepScheduler, PolynomialScheduler, ScheduleError, StepDecayScheduler,
    WarmUpScheduler,
};
