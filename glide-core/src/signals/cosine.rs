use std::f64::consts::PI;

use super::Curve;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cosine {
    amplitude: f64,
    frequency: f64,
    phase: f64,
}

impl Cosine {
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl Default for Cosine {
    fn default() -> Self {
        Self::new(0.8, 1000.0, PI / 2.0)
    }
}

impl Curve for Cosine {
    fn value_at(&self, t: f64) -> f64 {
        self.amplitude * f64::cos(2.0 * PI * self.frequency * t + self.phase)
    }
}
