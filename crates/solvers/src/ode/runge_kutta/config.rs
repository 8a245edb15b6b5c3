use kutta_core::Accuracy;
use thiserror::Error;

/// How the observed solver treats a sample with a non-finite component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NonFinitePolicy {
    /// Keep stepping. The non-finite value poisons every later sample.
    #[default]
    Propagate,

    /// Stop at the first non-finite sample and return an error.
    Fail,
}

/// Configuration for an observed Runge–Kutta run.
///
/// Fields are public so a request can be deserialized directly; the solver
/// calls [`Config::validate`] before taking the first step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Fixed step size. May be negative to integrate backward.
    pub step: f64,

    /// Number of steps to take.
    pub steps: usize,

    /// Stepping order for every step of the run.
    #[cfg_attr(feature = "serde", serde(default))]
    pub accuracy: Accuracy,

    /// What to do when a sample has a non-finite component.
    #[cfg_attr(feature = "serde", serde(default))]
    pub non_finite: NonFinitePolicy,
}

/// Errors that can occur when validating a Runge–Kutta config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("step must be finite, got {0}")]
    NonFiniteStep(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self::new(0.01, 100)
    }
}

impl Config {
    /// Creates a second-order config that propagates non-finite values.
    #[must_use]
    pub fn new(step: f64, steps: usize) -> Self {
        Self {
            step,
            steps,
            accuracy: Accuracy::default(),
            non_finite: NonFinitePolicy::default(),
        }
    }

    /// Sets the stepping accuracy.
    #[must_use]
    pub fn accuracy(mut self, accuracy: Accuracy) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Sets the non-finite policy.
    #[must_use]
    pub fn non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }

    /// Validates that the step size is finite.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is NaN or infinite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step.is_finite() {
            return Err(ConfigError::NonFiniteStep(self.step));
        }
        Ok(())
    }
}
