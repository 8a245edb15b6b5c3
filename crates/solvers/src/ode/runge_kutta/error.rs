use super::ConfigError;

/// Errors that can occur during Runge–Kutta integration.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("non-finite sample at step {step} (x = {x})")]
    NonFinite { step: usize, x: f64 },
}
