use ndarray::Array1;

use crate::Error;

/// Upper bound on the number of points a single domain may hold.
pub const MAX_POINTS: usize = 10_000_000;

/// Evenly spaced axis a curve gets sampled over.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain(Array1<f64>);

impl Domain {
    /// Values from `start` (inclusive) to `stop` (exclusive), `step` apart.
    ///
    /// Yields `ceil((stop - start) / step)` points, or none when `stop <= start`.
    /// More than [`MAX_POINTS`] points is an error.
    pub fn arange(start: f64, stop: f64, step: f64) -> Result<Self, Error> {
        if !(step.is_finite() && step > 0.0) {
            return Err(Error::InvalidStep(step));
        }

        if !(start.is_finite() && stop.is_finite()) {
            return Err(Error::InvalidBounds { start, stop });
        }

        if stop <= start {
            return Ok(Self(Array1::from(Vec::new())));
        }

        let len = ((stop - start) / step).ceil();
        if !(len.is_finite() && len <= MAX_POINTS as f64) {
            return Err(Error::TooManyPoints {
                step,
                len,
                max: MAX_POINTS,
            });
        }

        Ok(Self(Array1::range(start, stop, step)))
    }

    /// `[0, 1)` sampled every `step`.
    pub fn unit(step: f64) -> Result<Self, Error> {
        Self::arange(0.0, 1.0, step)
    }

    /// `[-half_width, half_width)` sampled once per sample period.
    pub fn around_zero(half_width: f64, sample_rate: u32) -> Result<Self, Error> {
        let step = 1.0 / sample_rate as f64;
        Self::arange(-half_width, half_width, step)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> ndarray::iter::Iter<'_, f64, ndarray::Ix1> {
        self.0.iter()
    }

    pub fn as_array(&self) -> &Array1<f64> {
        &self.0
    }

    /// Index of the point closest to `t`.
    pub fn position_of(&self, t: f64) -> Option<usize> {
        self.0
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (*a - t).abs().total_cmp(&(*b - t).abs()))
            .map(|(i, _)| i)
    }
}

impl From<Vec<f64>> for Domain {
    fn from(values: Vec<f64>) -> Self {
        Self(Array1::from(values))
    }
}

impl From<&[f64]> for Domain {
    fn from(values: &[f64]) -> Self {
        Self(Array1::from(values.to_vec()))
    }
}

impl From<Array1<f64>> for Domain {
    fn from(values: Array1<f64>) -> Self {
        Self(values)
    }
}

impl<'a> IntoIterator for &'a Domain {
    type Item = &'a f64;
    type IntoIter = ndarray::iter::Iter<'a, f64, ndarray::Ix1>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
