
mod domain;
mod sweep;

pub mod signals;

pub use domain::*;
pub use sweep::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("logarithm of non-positive number: {parameter} = {value}")]
    Domain { parameter: &'static str, value: f64 },
    #[error("step must be finite and greater than zero, got {0}")]
    InvalidStep(f64),
    #[error("domain bounds must be finite, got [{start}, {stop})")]
    InvalidBounds { start: f64, stop: f64 },
    #[error("step {step} yields {len} points, more than {max}")]
    TooManyPoints { step: f64, len: f64, max: usize },
}

/// Rejects anything that can not be fed into `ln`, NaN included.
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<f64, Error> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(Error::Domain { parameter, value })
    }
}
