use tracing::debug;

use crate::{ensure_positive, signals::Curve, Domain, Error};

/// Exponential growth that lands on `max_frequency` at `t = 1`.
///
/// The curve is `scale * exp(ln(max_frequency / scale) * t)`, evaluated in the
/// log domain so extreme ratios stay finite. It starts at
/// `scale` for `t = 0` no matter what the lower frequency bound is. Use
/// [`InterpolatedGlide`](super::InterpolatedGlide) for a glide between two
/// given frequencies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialCurve {
    max_frequency: f64,
    scale: f64,
    ln_scale: f64,
    rate_constant: f64,
}

impl ExponentialCurve {
    pub fn new(max_frequency: f64) -> Result<Self, Error> {
        Self::with_scale(max_frequency, 1.0)
    }

    pub fn with_scale(max_frequency: f64, scale: f64) -> Result<Self, Error> {
        let max_frequency = ensure_positive("max_frequency", max_frequency)?;
        let scale = ensure_positive("scale", scale)?;

        let ln_scale = f64::ln(scale);
        let rate_constant = f64::ln(max_frequency) - ln_scale;
        debug!(max_frequency, scale, rate_constant, "exponential curve");

        Ok(Self {
            max_frequency,
            scale,
            ln_scale,
            rate_constant,
        })
    }

    pub fn max_frequency(&self) -> f64 {
        self.max_frequency
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn rate_constant(&self) -> f64 {
        self.rate_constant
    }
}

impl Curve for ExponentialCurve {
    fn value_at(&self, t: f64) -> f64 {
        f64::exp(self.ln_scale + self.rate_constant * t)
    }
}

/// Samples `scale * exp(ln(max_frequency / scale) * t)` for every `t` in `domain`.
///
/// Parameters are checked before any point is evaluated.
pub fn generate(domain: &Domain, max_frequency: f64, scale: f64) -> Result<Vec<f64>, Error> {
    let curve = ExponentialCurve::with_scale(max_frequency, scale)?;

    Ok(curve.sample(domain).to_vec())
}

#[cfg(test)]
mod test {
    use super::{generate, ExponentialCurve};
    use crate::{signals::Curve, Domain, Error};

    #[test]
    fn glide_to_twenty_kilohertz() {
        let domain = Domain::from(vec![0.0, 0.5, 1.0]);

        let values = generate(&domain, 20_000.0, 1.0).unwrap();

        assert_eq!(values.len(), 3);
        assert_eq_rel!(values[0], 1.0, 1e-12);
        assert_eq_rel!(values[1], 141.421_356_237_309_5, 1e-9);
        assert_eq_rel!(values[2], 20_000.0, 1e-9);
    }

    #[test]
    fn rate_constant_is_log_of_target() {
        let curve = ExponentialCurve::new(20_000.0).unwrap();
        assert_eq_rel!(curve.rate_constant(), 9.903_487_552_536_127, 1e-12);

        let scaled = ExponentialCurve::with_scale(20_000.0, 10.0).unwrap();
        assert_eq_rel!(scaled.rate_constant(), f64::ln(2_000.0), 1e-12);
    }

    #[test]
    fn unscaled_endpoint_is_max_frequency() {
        let domain = Domain::from(vec![0.0, 0.25, 1.0]);

        for max_frequency in [0.5, 1.0, 440.0, 600.0, 20_000.0, 96_000.0] {
            let values = generate(&domain, max_frequency, 1.0).unwrap();
            assert_eq_rel!(values[2], max_frequency, 1e-9);
        }
    }

    #[test]
    fn endpoint_does_not_depend_on_scale() {
        let domain = Domain::from(vec![0.0, 1.0]);
        let unscaled = generate(&domain, 20_000.0, 1.0).unwrap();

        for scale in [0.01, 0.5, 2.0, 10.0, 600.0, 20_000.0, 50_000.0] {
            let scaled = generate(&domain, 20_000.0, scale).unwrap();

            assert_eq_rel!(scaled[1], unscaled[1], 1e-9);
            assert_eq_rel!(scaled[0], scale, 1e-12);
        }
    }

    #[test]
    fn extreme_ratio_stays_finite() {
        let curve = ExponentialCurve::with_scale(1e300, 1e-300).unwrap();

        assert!(curve.rate_constant().is_finite());
        assert_eq_rel!(curve.value_at(0.0), 1e-300, 1e-9);
        assert_eq_rel!(curve.value_at(1.0), 1e300, 1e-9);

        let inverted = ExponentialCurve::with_scale(1e-300, 1e300).unwrap();
        assert_eq_rel!(inverted.value_at(0.0), 1e300, 1e-9);
        assert_eq_rel!(inverted.value_at(1.0), 1e-300, 1e-9);
    }

    #[test]
    fn matches_closed_form() {
        let domain = Domain::unit(0.001).unwrap();

        let values = generate(&domain, 20_000.0, 1.0).unwrap();

        assert_eq!(values.len(), domain.len());
        for (t, v) in domain.iter().zip(values.iter()) {
            assert_eq_rel!(*v, f64::exp(f64::ln(20_000.0) * t), 1e-12);
        }
    }

    #[test]
    fn output_follows_domain_order() {
        let domain = Domain::from(vec![1.0, 0.0, 0.5]);

        let values = generate(&domain, 100.0, 1.0).unwrap();

        assert_eq_rel!(values[0], 100.0, 1e-9);
        assert_eq_rel!(values[1], 1.0, 1e-12);
        assert_eq_rel!(values[2], 10.0, 1e-9);
    }

    #[test]
    fn non_positive_max_frequency() {
        let domain = Domain::unit(0.1).unwrap();

        for max_frequency in [0.0, -5.0] {
            assert_eq!(
                generate(&domain, max_frequency, 1.0),
                Err(Error::Domain {
                    parameter: "max_frequency",
                    value: max_frequency
                })
            );
        }
    }

    #[test]
    fn non_positive_scale() {
        let domain = Domain::unit(0.1).unwrap();

        for scale in [0.0, -2.0] {
            assert_eq!(
                generate(&domain, 20_000.0, scale),
                Err(Error::Domain {
                    parameter: "scale",
                    value: scale
                })
            );
        }
    }

    #[test]
    fn empty_domain() {
        let domain = Domain::from(Vec::new());

        assert_eq!(generate(&domain, 20_000.0, 1.0), Ok(Vec::new()));
        assert!(generate(&domain, 0.0, 1.0).is_err());
    }

    #[test]
    fn curve_is_increasing_above_one() {
        let domain = Domain::unit(0.01).unwrap();
        let values = ExponentialCurve::new(600.0).unwrap().sample(&domain);

        let values = values.to_vec();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
