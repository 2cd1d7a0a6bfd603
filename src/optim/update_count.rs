//! Aggregate update counting for schedulers
//!
//! Schedulers expect `num_update` to be the largest number of updates any
//! single parameter has received. `UpdateCounter` keeps the per-parameter
//! counts and the running maximum; `ScheduledRate` wires it to a scheduler.

use super::scheduler::{LRScheduler, RateObserver, TracingObserver};
use super::Optimizer;
use std::collections::HashMap;

/// Per-parameter update counts and their running maximum
#[derive(Debug, Clone, Default)]
pub struct UpdateCounter {
    begin_num_update: u64,
    num_update: u64,
    counts: HashMap<usize, u64>,
}

impl UpdateCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter for a resumed run: unseen parameters start at `begin_num_update`
    pub fn resume(begin_num_update: u64) -> Self {
        Self { begin_num_update, num_update: begin_num_update, counts: HashMap::new() }
    }

    /// Record one update of parameter `index` and return the new aggregate
    pub fn record(&mut self, index: usize) -> u64 {
        let count = self.counts.entry(index).or_insert(self.begin_num_update);
        *count += 1;
        self.num_update = self.num_update.max(*count);
        self.num_update
    }

    /// Largest update count over all parameters
    pub fn num_update(&self) -> u64 {
        self.num_update
    }

    /// Updates recorded for `index`, if it has been seen
    pub fn count(&self, index: usize) -> Option<u64> {
        self.counts.get(&index).copied()
    }

    pub fn begin_num_update(&self) -> u64 {
        self.begin_num_update
    }
}

/// A scheduler driven by an [`UpdateCounter`]
#[derive(Debug, Clone)]
pub struct ScheduledRate<S> {
    counter: UpdateCounter,
    scheduler: S,
}

impl<S: LRScheduler> ScheduledRate<S> {
    pub fn new(scheduler: S) -> Self {
        Self { counter: UpdateCounter::new(), scheduler }
    }

    pub fn with_counter(scheduler: S, counter: UpdateCounter) -> Self {
        Self { counter, scheduler }
    }

    /// Record an update of parameter `index` and return the rate to use for it
    pub fn record(&mut self, index: usize) -> f64 {
        self.record_with(index, &mut TracingObserver)
    }

    pub fn record_with(&mut self, index: usize, observer: &mut dyn RateObserver) -> f64 {
        let num_update = self.counter.record(index);
        self.scheduler.schedule_with(num_update, observer)
    }

    /// Record an update of parameter `index` and push the rate into `optimizer`
    pub fn apply<O: Optimizer>(&mut self, index: usize, optimizer: &mut O) {
        optimizer.set_lr(self.record(index));
    }

    pub fn counter(&self) -> &UpdateCounter {
        &self.counter
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn into_inner(self) -> S {
        self.scheduler
    }
}
