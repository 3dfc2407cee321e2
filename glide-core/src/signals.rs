mod cosine;
mod sweep;

use ndarray::Array1;

pub use cosine::Cosine;
pub use sweep::{generate as generate_exponential, ExponentialCurve, InterpolatedGlide};

use crate::Domain;

/// A closed-form curve, evaluated point by point over a [`Domain`].
pub trait Curve {
    fn value_at(&self, t: f64) -> f64;

    /// One value per domain point, in domain order.
    fn sample(&self, domain: &Domain) -> Array1<f64> {
        domain.as_array().mapv(|t| self.value_at(t))
    }

    fn samples<'a>(&'a self, domain: &'a Domain) -> Samples<'a, Self>
    where
        Self: Sized,
    {
        Samples {
            curve: self,
            domain,
            index: 0,
        }
    }
}

/// Lazy `(t, value)` pairs of a curve over a domain.
#[derive(Debug, Clone)]
pub struct Samples<'a, C> {
    curve: &'a C,
    domain: &'a Domain,
    index: usize,
}

impl<C: Curve> Iterator for Samples<'_, C> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let t = *self.domain.as_array().get(self.index)?;
        self.index += 1;

        Some((t, self.curve.value_at(t)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<C: Curve> ExactSizeIterator for Samples<'_, C> {
    fn len(&self) -> usize {
        self.domain.len() - self.index
    }
}
