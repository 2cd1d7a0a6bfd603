//! Optimizer-side learning rate hook

/// Anything that consumes a scheduled learning rate
///
/// The scheduler never touches gradients; it only hands the optimizer a new
/// step size through `set_lr`.
pub trait Optimizer {
    /// Get learning rate
    fn lr(&self) -> f64;

    /// Set learning rate
    fn set_lr(&mut self, lr: f64);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal optimizer implementation for testing
    #[derive(Debug, Default)]
    pub(crate) struct TestOptimizer {
        pub(crate) learning_rate: f64,
    }

    impl Optimizer for TestOptimizer {
        fn lr(&self) -> f64 {
            self.learning_rate
        }

        fn set_lr(&mut self, lr: f64) {
            self.learning_rate = lr;
        }
    }

    #[test]
    fn test_set_lr_round_trip() {
        let mut opt = TestOptimizer { learning_rate: 0.1 };
        opt.set_lr(0.05);
        assert_eq!(opt.lr(), 0.05);
    }
}
