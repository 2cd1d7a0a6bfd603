//! YAML/JSON schema for learning rate schedulers

use crate::optim::{
    LRScheduler, MultiStepScheduler, PolynomialScheduler, Result, StepDecayScheduler,
    WarmUpScheduler, DEFAULT_BASE_LR, DEFAULT_FLOOR, DEFAULT_POWER,
};
use serde::{Deserialize, Serialize};

fn default_base_lr() -> f64 {
    DEFAULT_BASE_LR
}

fn default_factor() -> f64 {
    1.0
}

fn default_floor() -> f64 {
    DEFAULT_FLOOR
}

fn default_power() -> f64 {
    DEFAULT_POWER
}

/// Scheduler specification
///
/// Selected by the `type` key; every other key maps to a constructor
/// argument. Omitted `base_lr`, `factor`, `floor` and `power` take the same
/// defaults as the constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchedulerSpec {
    /// Decay by `factor` every `step` updates, down to `floor`
    StepDecay {
        #[serde(default = "default_base_lr")]
        base_lr: f64,
        step: u64,
        #[serde(default = "default_factor")]
        factor: f64,
        #[serde(default = "default_floor")]
        floor: f64,
    },

    /// Decay by `factor` after each update count in `steps`
    MultiStep {
        #[serde(default = "default_base_lr")]
        base_lr: f64,
        steps: Vec<u64>,
        #[serde(default = "default_factor")]
        factor: f64,
    },

    /// `base_lr * (1 - t / total_updates)^power`
    Polynomial {
        #[serde(default = "default_base_lr")]
        base_lr: f64,
        total_updates: u64,
        #[serde(default = "default_power")]
        power: f64,
    },

    /// Ramp from `begin_lr` to `end_lr` over `begin_iter..end_iter`, then
    /// decay by `factor` after each entry of `steps`
    WarmUp {
        begin_lr: f64,
        end_lr: f64,
        begin_iter: u64,
        end_iter: u64,
        steps: Vec<u64>,
        #[serde(default = "default_factor")]
        factor: f64,
    },
}

impl SchedulerSpec {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Schedule type as written in config files
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StepDecay { .. } => "step_decay",
            Self::MultiStep { .. } => "multi_step",
            Self::Polynomial { .. } => "polynomial",
            Self::WarmUp { .. } => "warm_up",
        }
    }

    /// Construct the described scheduler
    ///
    /// # Errors
    ///
    /// `InvalidConfig` with the same rules as the scheduler constructors.
    pub fn build(&self) -> Result<Box<dyn LRScheduler + Send>> {
        let scheduler: Box<dyn LRScheduler + Send> = match self {
            Self::StepDecay { base_lr, step, factor, floor } => Box::new(
                StepDecayScheduler::new(*step, *factor)?
                    .with_base_lr(*base_lr)
                    .with_floor(*floor),
            ),
            Self::MultiStep { base_lr, steps, factor } => {
                Box::new(MultiStepScheduler::new(steps.clone(), *factor)?.with_base_lr(*base_lr))
            }
            Self::Polynomial { base_lr, total_updates, power } => {
                Box::new(PolynomialScheduler::new(*total_updates, *power)?.with_base_lr(*base_lr))
            }
            Self::WarmUp { begin_lr, end_lr, begin_iter, end_iter, steps, factor } => {
                Box::new(WarmUpScheduler::new(
                    *begin_lr,
                    *end_lr,
                    *begin_iter,
                    *end_iter,
                    steps.clone(),
                    *factor,
                )?)
            }
        };
        Ok(scheduler)
    }

    /// Check the parameters without keeping the scheduler
    pub fn validate(&self) -> Result<()> {
        self.build().map(|_| ())
    }
}
