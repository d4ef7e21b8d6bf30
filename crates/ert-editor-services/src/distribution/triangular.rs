use super::special::{bisect_inverse, ln_beta, regularized_beta};
use super::{Distribution, finite, ordered};
use crate::error::DistributionError;

fn mode_within(min: f64, mode: f64, max: f64) -> Result<(), DistributionError> {
    ordered(min, max)?;
    finite("mode", mode)?;
    if (min..=max).contains(&mode) {
        Ok(())
    } else {
        Err(DistributionError::ModeOutOfRange { min, mode, max })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangular {
    min: f64,
    mode: f64,
    max: f64,
}

impl Triangular {
    pub fn new(min: f64, mode: f64, max: f64) -> Result<Self, DistributionError> {
        mode_within(min, mode, max)?;
        Ok(Self { min, mode, max })
    }

    /// `P(X <= mode)`.
    fn peak_mass(&self) -> f64 {
        (self.mode - self.min) / (self.max - self.min)
    }
}

impl Distribution for Triangular {
    fn pdf(&self, x: f64) -> f64 {
        let (a, c, b) = (self.min, self.mode, self.max);
        if x < a || x > b {
            0.0
        } else if x < c {
            2.0 * (x - a) / ((b - a) * (c - a))
        } else if x > c {
            2.0 * (b - x) / ((b - a) * (b - c))
        } else {
            2.0 / (b - a)
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        let (a, c, b) = (self.min, self.mode, self.max);
        if x <= a {
            0.0
        } else if x >= b {
            1.0
        } else if x <= c {
            (x - a).powi(2) / ((b - a) * (c - a))
        } else {
            1.0 - (b - x).powi(2) / ((b - a) * (b - c))
        }
    }

    fn inv(&self, p: f64) -> f64 {
        let (a, c, b) = (self.min, self.mode, self.max);
        let p = p.clamp(0.0, 1.0);
        if p < self.peak_mass() {
            a + (p * (b - a) * (c - a)).sqrt()
        } else {
            b - ((1.0 - p) * (b - a) * (b - c)).sqrt()
        }
    }

    fn mean(&self) -> f64 {
        (self.min + self.mode + self.max) / 3.0
    }

    fn mode(&self) -> f64 {
        self.mode
    }

    fn variance(&self) -> f64 {
        let (a, c, b) = (self.min, self.mode, self.max);
        (a * a + b * b + c * c - a * b - a * c - b * c) / 18.0
    }
}

/// Beta-PERT: a Beta distribution on `[min, max]` shaped by the most likely value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pert {
    min: f64,
    mode: f64,
    max: f64,
    alpha: f64,
    beta: f64,
    ln_norm: f64,
}

impl Pert {
    /// Weight of the mode in the mean.
    const LAMBDA: f64 = 4.0;

    pub fn new(min: f64, mode: f64, max: f64) -> Result<Self, DistributionError> {
        mode_within(min, mode, max)?;
        let span = max - min;
        let alpha = 1.0 + Self::LAMBDA * (mode - min) / span;
        let beta = 1.0 + Self::LAMBDA * (max - mode) / span;
        Ok(Self {
            min,
            mode,
            max,
            alpha,
            beta,
            ln_norm: ln_beta(alpha, beta),
        })
    }

    fn unit(&self, x: f64) -> f64 {
        (x - self.min) / (self.max - self.min)
    }
}

impl Distribution for Pert {
    fn pdf(&self, x: f64) -> f64 {
        let u = self.unit(x);
        if !(0.0..=1.0).contains(&u) {
            return 0.0;
        }
        let ln_density =
            (self.alpha - 1.0) * u.ln() + (self.beta - 1.0) * (1.0 - u).ln() - self.ln_norm;
        let density = ln_density.exp() / (self.max - self.min);
        // ln(0) at an endpoint with a unit exponent gives 0 * -inf.
        if density.is_nan() { 0.0 } else { density }
    }

    fn cdf(&self, x: f64) -> f64 {
        regularized_beta(self.unit(x), self.alpha, self.beta)
    }

    fn inv(&self, p: f64) -> f64 {
        bisect_inverse(|x| self.cdf(x), self.min, self.max, p)
    }

    fn mean(&self) -> f64 {
        (self.min + Self::LAMBDA * self.mode + self.max) / (Self::LAMBDA + 2.0)
    }

    fn mode(&self) -> f64 {
        self.mode
    }

    fn variance(&self) -> f64 {
        let mean = self.mean();
        (mean - self.min) * (self.max - mean) / (Self::LAMBDA + 3.0)
    }
}
