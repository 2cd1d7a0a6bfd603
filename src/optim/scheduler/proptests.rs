//! Property-based tests for learning rate schedulers

use super::*;
use proptest::prelude::*;

/// Decays applied by the strict boundary loop after seeing `num_update`
fn boundaries_crossed(num_update: u64, step: u64) -> u64 {
    num_update.saturating_sub(1) / step
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_step_decay_matches_closed_form(
        step in 1u64..50,
        factor in 0.05f64..1.0,
        floor in 0.0f64..0.01,
        num_update in 0u64..2000,
    ) {
        let mut scheduler = StepDecayScheduler::new(step, factor)
            .unwrap()
            .with_base_lr(1.0)
            .with_floor(floor);
        let lr = scheduler.schedule_with(num_update, &mut NoopObserver);
        let k = boundaries_crossed(num_update, step) as i32;
        let expected = floor.max(factor.powi(k));
        prop_assert!((lr - expected).abs() <= 1e-9 * expected.max(1e-12) + 1e-15,
            "lr={lr}, expected={expected}");
        prop_assert_eq!(scheduler.elapsed_steps_applied() % step, 0);
        prop_assert!(scheduler.elapsed_steps_applied() <= num_update);
    }

    #[test]
    fn prop_step_decay_non_increasing(
        step in 1u64..20,
        factor in 0.1f64..=1.0,
        deltas in proptest::collection::vec(0u64..15, 1..40),
    ) {
        let mut scheduler = StepDecayScheduler::new(step, factor).unwrap().with_base_lr(1.0);
        let mut num_update = 0;
        let mut prev = scheduler.schedule_with(num_update, &mut NoopObserver);
        for delta in deltas {
            num_update += delta;
            let lr = scheduler.schedule_with(num_update, &mut NoopObserver);
            prop_assert!(lr <= prev);
            prev = lr;
        }
    }

    #[test]
    fn prop_repeated_query_is_idempotent(
        num_update in 0u64..500,
        step in 1u64..30,
    ) {
        let mut step_decay = StepDecayScheduler::new(step, 0.5).unwrap();
        let first = step_decay.schedule_with(num_update, &mut NoopObserver);
        prop_assert_eq!(step_decay.schedule_with(num_update, &mut NoopObserver), first);

        let mut multi = MultiStepScheduler::new(vec![step, step * 2, step * 3], 0.5).unwrap();
        let first = multi.schedule_with(num_update, &mut NoopObserver);
        prop_assert_eq!(multi.schedule_with(num_update, &mut NoopObserver), first);
    }

    #[test]
    fn prop_multi_step_counts_exceeded_thresholds(
        thresholds in proptest::collection::btree_set(1u64..1000, 1..8),
        num_update in 0u64..1200,
    ) {
        let thresholds: Vec<u64> = thresholds.into_iter().collect();
        let k = thresholds.iter().filter(|&&t| num_update > t).count();
        let mut scheduler = MultiStepScheduler::new(thresholds, 0.5).unwrap().with_base_lr(1.0);
        let mut log = RateLog::new();
        let lr = scheduler.schedule_with(num_update, &mut log);
        prop_assert_eq!(log.len(), k);
        prop_assert_eq!(scheduler.next_threshold_index(), k);
        prop_assert!((lr - 0.5f64.powi(k as i32)).abs() < 1e-12);
    }

    #[test]
    fn prop_polynomial_in_range_is_bounded(
        total in 1u64..10_000,
        power in 0.0f64..=1.0,
        fraction in 0.0f64..=1.0,
    ) {
        let num_update = (total as f64 * fraction) as u64;
        let mut scheduler = PolynomialScheduler::new(total, power).unwrap().with_base_lr(0.1);
        let lr = scheduler.schedule_with(num_update, &mut NoopObserver);
        prop_assert!((0.0..=0.1 + 1e-12).contains(&lr));
    }

    #[test]
    fn prop_warm_up_window_must_be_non_empty(begin in 0u64..100, len in 0u64..100) {
        let result = WarmUpScheduler::new(0.0, 1.0, begin, begin + len, vec![500], 0.5);
        prop_assert_eq!(result.is_ok(), len > 0);
    }
}
