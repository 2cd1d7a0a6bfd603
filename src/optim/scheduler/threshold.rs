//! Threshold-crossing decay shared by multi-step and warm-up schedules

use super::error::{Result, ScheduleError};
use super::observer::{RateChange, RateObserver};

/// Reject decay factors that would grow the rate (or are NaN)
pub(crate) fn check_factor(factor: f64) -> Result<()> {
    if factor <= 1.0 {
        Ok(())
    } else {
        Err(ScheduleError::invalid(format!(
            "factor must be no more than 1 to make lr reduce, got {factor}"
        )))
    }
}

/// Multiplies a rate by `factor` each time `num_update` passes the next
/// threshold in an increasing list.
///
/// `next_threshold_index` only ever moves forward, so replaying an update
/// count (or stepping back a little after a resume) never decays twice.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdDecay {
    thresholds: Vec<u64>,
    factor: f64,
    next_threshold_index: usize,
}

impl ThresholdDecay {
    /// # Errors
    ///
    /// `InvalidConfig` when `thresholds` is empty, not strictly increasing,
    /// contains 0, or when `factor > 1.0`.
    pub fn new(thresholds: Vec<u64>, factor: f64) -> Result<Self> {
        if thresholds.is_empty() {
            return Err(ScheduleError::invalid("schedule step list must not be empty"));
        }
        for (i, &t) in thresholds.iter().enumerate() {
            if i != 0 && t <= thresholds[i - 1] {
                return Err(ScheduleError::invalid(format!(
                    "schedule step must be an increasing integer list, got {thresholds:?}"
                )));
            }
            if t < 1 {
                return Err(ScheduleError::invalid(
                    "schedule step must be greater or equal than 1 round",
                ));
            }
        }
        check_factor(factor)?;
        Ok(Self { thresholds, factor, next_threshold_index: 0 })
    }

    pub fn thresholds(&self) -> &[u64] {
        &self.thresholds
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn next_threshold_index(&self) -> usize {
        self.next_threshold_index
    }

    /// Thresholds not yet crossed
    pub fn remaining(&self) -> &[u64] {
        &self.thresholds[self.next_threshold_index..]
    }

    /// Apply every decay whose threshold `num_update` strictly exceeds.
    ///
    /// `num_update == threshold` does not trigger that threshold.
    pub fn advance(&mut self, num_update: u64, mut rate: f64, observer: &mut dyn RateObserver) -> f64 {
        while let Some(&threshold) = self.thresholds.get(self.next_threshold_index) {
            if num_update <= threshold {
                break;
            }
            self.next_threshold_index += 1;
            rate *= self.factor;
            observer.on_rate_change(&RateChange { num_update, rate, floored: false });
        }
        rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optim::scheduler::observer::{NoopObserver, RateLog};

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(ThresholdDecay::new(vec![], 0.5), Err(ScheduleError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_non_increasing() {
        assert!(ThresholdDecay::new(vec![5, 3], 0.5).is_err());
        assert!(ThresholdDecay::new(vec![5, 5], 0.5).is_err());
    }

    #[test]
    fn test_rejects_zero_threshold() {
        assert!(ThresholdDecay::new(vec![0, 3], 0.5).is_err());
    }

    #[test]
    fn test_rejects_growing_or_nan_factor() {
        assert!(ThresholdDecay::new(vec![3], 1.01).is_err());
        assert!(ThresholdDecay::new(vec![3], f64::NAN).is_err());
        assert!(ThresholdDecay::new(vec![3], 1.0).is_ok());
    }

    #[test]
    fn test_advance_crosses_several_at_once() {
        let mut decay = ThresholdDecay::new(vec![2, 4, 6], 0.5).unwrap();
        let mut log = RateLog::new();
        let rate = decay.advance(5, 1.0, &mut log);
        assert_eq!(rate, 0.25);
        assert_eq!(decay.next_threshold_index(), 2);
        assert_eq!(decay.remaining(), &[6]);
        assert_eq!(log.len(), 2);
        assert!(log.events().iter().all(|e| e.num_update == 5));
    }

    #[test]
    fn test_advance_exhausted_is_stable() {
        let mut decay = ThresholdDecay::new(vec![1], 0.1).unwrap();
        let rate = decay.advance(100, 1.0, &mut NoopObserver);
        assert_eq!(decay.advance(200, rate, &mut NoopObserver), rate);
        assert!(decay.remaining().is_empty());
    }
}
