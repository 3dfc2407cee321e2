use ndarray::Array1;

use crate::{
    signals::{Curve, ExponentialCurve},
    Domain, Error,
};

/// An exponential curve sampled once over its domain.
#[derive(Debug, Clone)]
pub struct ExponentialSweep {
    domain: Domain,
    curve: ExponentialCurve,
    values: Array1<f64>,
}

impl ExponentialSweep {
    pub fn new(domain: Domain, max_frequency: f64) -> Result<Self, Error> {
        Self::with_scale(domain, max_frequency, 1.0)
    }

    pub fn with_scale(domain: Domain, max_frequency: f64, scale: f64) -> Result<Self, Error> {
        let curve = ExponentialCurve::with_scale(max_frequency, scale)?;
        let values = curve.sample(&domain);

        Ok(Self {
            domain,
            curve,
            values,
        })
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn max_frequency(&self) -> f64 {
        self.curve.max_frequency()
    }

    pub fn rate_constant(&self) -> f64 {
        self.curve.rate_constant()
    }

    pub fn scale(&self) -> f64 {
        self.curve.scale()
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn as_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }

    /// Value at the domain point closest to `t`.
    pub fn value_near(&self, t: f64) -> Option<f64> {
        let index = self.domain.position_of(t)?;
        self.values.get(index).copied()
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.domain.iter().copied().zip(self.values.iter().copied())
    }
}
