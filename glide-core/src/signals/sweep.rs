mod exponential;

use tracing::debug;

pub use exponential::{generate, ExponentialCurve};

use crate::{ensure_positive, signals::Curve, Error};

/// Exponential glide from `min_frequency` at `t = 0` to `max_frequency` at `t = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolatedGlide {
    min_frequency: f64,
    max_frequency: f64,
}

impl InterpolatedGlide {
    pub fn new(min_frequency: f64, max_frequency: f64) -> Result<Self, Error> {
        let min_frequency = ensure_positive("min_frequency", min_frequency)?;
        let max_frequency = ensure_positive("max_frequency", max_frequency)?;
        debug!(min_frequency, max_frequency, "interpolated glide");

        Ok(Self {
            min_frequency,
            max_frequency,
        })
    }

    pub fn min_frequency(&self) -> f64 {
        self.min_frequency
    }

    pub fn max_frequency(&self) -> f64 {
        self.max_frequency
    }
}

impl Curve for InterpolatedGlide {
    fn value_at(&self, t: f64) -> f64 {
        f64::exp(
            f64::ln(self.min_frequency) * (1.0 - t) + f64::ln(self.max_frequency) * t,
        )
    }
}

#[cfg(test)]
mod test {
    use super::InterpolatedGlide;
    use crate::{signals::Curve, Domain, Error};

    #[test]
    fn starts_at_min_and_ends_at_max() {
        let glide = InterpolatedGlide::new(600.0, 20_000.0).unwrap();

        assert_eq_delta!(glide.value_at(0.0), 600.0, 1e-9);
        assert_eq_delta!(glide.value_at(1.0), 20_000.0, 1e-8);
    }

    #[test]
    fn midpoint_is_geometric_mean() {
        let glide = InterpolatedGlide::new(100.0, 10_000.0).unwrap();

        assert_eq_delta!(glide.value_at(0.5), 1_000.0, 1e-9);
    }

    #[test]
    fn downward_glide() {
        let domain = Domain::from(vec![0.0, 0.5, 1.0]);

        let values = InterpolatedGlide::new(800.0, 200.0).unwrap().sample(&domain);

        assert_eq_delta!(values[0], 800.0, 1e-9);
        assert_eq_delta!(values[1], 400.0, 1e-9);
        assert_eq_delta!(values[2], 200.0, 1e-9);
    }

    #[test]
    fn non_positive_bounds() {
        assert_eq!(
            InterpolatedGlide::new(0.0, 20_000.0),
            Err(Error::Domain {
                parameter: "min_frequency",
                value: 0.0
            })
        );
        assert_eq!(
            InterpolatedGlide::new(600.0, -1.0),
            Err(Error::Domain {
                parameter: "max_frequency",
                value: -1.0
            })
        );
    }
}
