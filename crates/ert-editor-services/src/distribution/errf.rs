//! Error-function transformed normals.
//!
//! A standard normal `Z` is mapped to `U = Φ((Z + skewness) / width)` on `(0, 1)` and then
//! scaled to `[min, max]`. The continuous variant keeps `U`; the discrete one bins it into
//! `nbins` equally spaced values.

use super::special::{std_normal_cdf, std_normal_inv, std_normal_pdf};
use super::{Distribution, Masses, bin_count, finite, grid, ordered};
use crate::error::DistributionError;

/// Midpoint-rule resolution for moments without a closed form.
const QUADRATURE_POINTS: usize = 4000;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transform {
    skewness: f64,
    width: f64,
}

impl Transform {
    fn new(skewness: f64, width: f64) -> Result<Self, DistributionError> {
        finite("skewness", skewness)?;
        finite("width", width)?;
        if width <= 0.0 {
            return Err(DistributionError::NonPositiveWidth(width));
        }
        Ok(Self { skewness, width })
    }

    /// `P(U <= u)`.
    fn cdf(&self, u: f64) -> f64 {
        if u <= 0.0 {
            return 0.0;
        }
        if u >= 1.0 {
            return 1.0;
        }
        std_normal_cdf(self.width * std_normal_inv(u) - self.skewness)
    }

    /// Density of `U` at `u`.
    fn pdf(&self, u: f64) -> f64 {
        if u <= 0.0 || u >= 1.0 {
            return 0.0;
        }
        let z = std_normal_inv(u);
        std_normal_pdf(self.width * z - self.skewness) * self.width / std_normal_pdf(z)
    }

    /// Quantile of `U`.
    fn inv(&self, p: f64) -> f64 {
        std_normal_cdf((std_normal_inv(p) + self.skewness) / self.width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorSkewedNormal {
    min: f64,
    max: f64,
    transform: Transform,
}

impl ErrorSkewedNormal {
    pub fn new(min: f64, max: f64, skewness: f64, width: f64) -> Result<Self, DistributionError> {
        ordered(min, max)?;
        Ok(Self {
            min,
            max,
            transform: Transform::new(skewness, width)?,
        })
    }

    fn span(&self) -> f64 {
        self.max - self.min
    }

    fn quantiles(&self) -> impl Iterator<Item = f64> + '_ {
        let n = QUADRATURE_POINTS as f64;
        (0..QUADRATURE_POINTS).map(move |i| self.inv((i as f64 + 0.5) / n))
    }
}

impl Distribution for ErrorSkewedNormal {
    fn pdf(&self, x: f64) -> f64 {
        self.transform.pdf((x - self.min) / self.span()) / self.span()
    }

    fn cdf(&self, x: f64) -> f64 {
        self.transform.cdf((x - self.min) / self.span())
    }

    fn inv(&self, p: f64) -> f64 {
        self.min + self.span() * self.transform.inv(p)
    }

    fn mean(&self) -> f64 {
        self.quantiles().sum::<f64>() / QUADRATURE_POINTS as f64
    }

    /// Grid search for the density peak.
    fn mode(&self) -> f64 {
        const STEPS: usize = 2000;
        let mut best = (self.median(), f64::NEG_INFINITY);
        for i in 1..STEPS {
            let x = self.min + self.span() * i as f64 / STEPS as f64;
            let density = self.pdf(x);
            if density.is_finite() && density > best.1 {
                best = (x, density);
            }
        }
        best.0
    }

    fn variance(&self) -> f64 {
        let mean = self.mean();
        self.quantiles().map(|q| (q - mean).powi(2)).sum::<f64>() / QUADRATURE_POINTS as f64
    }
}

#[derive(Debug, Clone)]
pub struct DiscreteErrorSkewedNormal {
    masses: Masses,
}

impl DiscreteErrorSkewedNormal {
    pub fn new(
        nbins: f64,
        min: f64,
        max: f64,
        skewness: f64,
        width: f64,
    ) -> Result<Self, DistributionError> {
        let n = bin_count(nbins)?;
        ordered(min, max)?;
        let transform = Transform::new(skewness, width)?;

        let values = grid(n, min, max);
        let probabilities = (0..n)
            .map(|k| {
                let lo = k as f64 / n as f64;
                let hi = (k + 1) as f64 / n as f64;
                transform.cdf(hi) - transform.cdf(lo)
            })
            .collect();
        Ok(Self {
            masses: Masses {
                values,
                probabilities,
            },
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.masses.values
    }
}

impl Distribution for DiscreteErrorSkewedNormal {
    fn pdf(&self, x: f64) -> f64 {
        self.masses.pmf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.masses.cdf(x)
    }

    fn inv(&self, p: f64) -> f64 {
        self.masses.inv(p)
    }

    fn mean(&self) -> f64 {
        self.masses.mean()
    }

    fn mode(&self) -> f64 {
        self.masses.mode()
    }

    fn variance(&self) -> f64 {
        self.masses.variance()
    }
}
