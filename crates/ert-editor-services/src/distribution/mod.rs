//! Prior distributions used by the DIST preview.
//!
//! Every family implements [`Distribution`] on its own; constructors validate their parameters
//! and return [`DistributionError`] instead of producing NaNs later.

mod errf;
mod normal;
pub mod special;
mod triangular;
mod uniform;

pub use errf::{DiscreteErrorSkewedNormal, ErrorSkewedNormal};
pub use normal::{LogNormal, Normal, TruncatedNormal};
pub use triangular::{Pert, Triangular};
pub use uniform::{Dirac, DiscreteUniform, LogUniform, Uniform};

use crate::error::DistributionError;

/// Capability interface of a univariate distribution.
///
/// For discrete families `pdf` is the probability mass at `x` (zero off the support).
pub trait Distribution: std::fmt::Debug + Send + Sync {
    fn pdf(&self, x: f64) -> f64;
    fn cdf(&self, x: f64) -> f64;
    /// Quantile function, the inverse of `cdf` on `(0, 1)`.
    fn inv(&self, p: f64) -> f64;
    fn mean(&self) -> f64;
    fn median(&self) -> f64 {
        self.inv(0.5)
    }
    fn mode(&self) -> f64;
    fn variance(&self) -> f64;
    fn std(&self) -> f64 {
        self.variance().sqrt()
    }
}

pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, DistributionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DistributionError::NonFiniteParameter(name))
    }
}

pub(crate) fn ordered(min: f64, max: f64) -> Result<(), DistributionError> {
    finite("min", min)?;
    finite("max", max)?;
    if min < max {
        Ok(())
    } else {
        Err(DistributionError::EmptyRange { min, max })
    }
}

/// Validate a bin count: an integer of at least 2.
pub(crate) fn bin_count(nbins: f64) -> Result<usize, DistributionError> {
    if nbins.is_finite() && nbins.fract() == 0.0 && nbins >= 2.0 {
        Ok(nbins as usize)
    } else {
        Err(DistributionError::TooFewBins(nbins))
    }
}

/// Evenly spaced support points `min + k (max - min) / (n - 1)`.
pub(crate) fn grid(n: usize, min: f64, max: f64) -> Vec<f64> {
    let step = (max - min) / (n - 1) as f64;
    (0..n).map(|k| min + k as f64 * step).collect()
}

/// A finite discrete distribution over sorted support points.
#[derive(Debug, Clone)]
pub(crate) struct Masses {
    pub values: Vec<f64>,
    pub probabilities: Vec<f64>,
}

impl Masses {
    fn tolerance(&self) -> f64 {
        let span = match (self.values.first(), self.values.last()) {
            (Some(lo), Some(hi)) => (hi - lo).abs().max(lo.abs()).max(hi.abs()),
            _ => 1.0,
        };
        1e-9 * span.max(1.0)
    }

    pub fn pmf(&self, x: f64) -> f64 {
        let tol = self.tolerance();
        self.values
            .iter()
            .zip(&self.probabilities)
            .find(|(v, _)| (*v - x).abs() <= tol)
            .map_or(0.0, |(_, p)| *p)
    }

    pub fn cdf(&self, x: f64) -> f64 {
        let tol = self.tolerance();
        self.values
            .iter()
            .zip(&self.probabilities)
            .take_while(|(v, _)| **v <= x + tol)
            .map(|(_, p)| p)
            .sum::<f64>()
            .min(1.0)
    }

    pub fn inv(&self, p: f64) -> f64 {
        let mut cumulative = 0.0;
        for (v, prob) in self.values.iter().zip(&self.probabilities) {
            cumulative += prob;
            if cumulative >= p - 1e-12 {
                return *v;
            }
        }
        self.values.last().copied().unwrap_or(f64::NAN)
    }

    pub fn mean(&self) -> f64 {
        self.values
            .iter()
            .zip(&self.probabilities)
            .map(|(v, p)| v * p)
            .sum()
    }

    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.values
            .iter()
            .zip(&self.probabilities)
            .map(|(v, p)| p * (v - mean).powi(2))
            .sum()
    }

    /// The most likely value; ties resolve to the smallest.
    pub fn mode(&self) -> f64 {
        let mut best = (f64::NAN, f64::NEG_INFINITY);
        for (v, p) in self.values.iter().zip(&self.probabilities) {
            if *p > best.1 + 1e-15 {
                best = (*v, *p);
            }
        }
        best.0
    }
}
