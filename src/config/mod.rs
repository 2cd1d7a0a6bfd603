//! Declarative scheduler configuration
//!
//! A scheduler can be described in YAML or JSON and turned into a boxed
//! [`LRScheduler`](crate::optim::LRScheduler):
//!
//! ```rust
//! use entrenar_lr::config::SchedulerSpec;
//! use entrenar_lr::optim::{LRScheduler, NoopObserver};
//!
//! let spec = SchedulerSpec::from_yaml(
//!     "type: multi_step\nbase_lr: 0.1\nsteps: [1000, 2000]\nfactor: 0.1\n",
//! )
//! .unwrap();
//! let mut scheduler = spec.build().unwrap();
//! assert_eq!(scheduler.schedule_with(1500, &mut NoopObserver), 0.1 * 0.1);
//! ```

mod schema;


pub use schema::SchedulerSpec;
