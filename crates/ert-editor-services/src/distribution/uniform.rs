use super::{Distribution, Masses, bin_count, finite, grid, ordered};
use crate::error::DistributionError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    min: f64,
    max: f64,
}

impl Uniform {
    pub fn new(min: f64, max: f64) -> Result<Self, DistributionError> {
        ordered(min, max)?;
        Ok(Self { min, max })
    }

    fn width(&self) -> f64 {
        self.max - self.min
    }
}

impl Distribution for Uniform {
    fn pdf(&self, x: f64) -> f64 {
        if (self.min..=self.max).contains(&x) {
            1.0 / self.width()
        } else {
            0.0
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        ((x - self.min) / self.width()).clamp(0.0, 1.0)
    }

    fn inv(&self, p: f64) -> f64 {
        self.min + p.clamp(0.0, 1.0) * self.width()
    }

    fn mean(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    /// Every point of the support is a mode; the lower bound is reported.
    fn mode(&self) -> f64 {
        self.min
    }

    fn variance(&self) -> f64 {
        self.width().powi(2) / 12.0
    }
}

/// `ln(X)` is uniform on `[ln(min), ln(max)]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogUniform {
    min: f64,
    max: f64,
    log_ratio: f64,
}

impl LogUniform {
    pub fn new(min: f64, max: f64) -> Result<Self, DistributionError> {
        ordered(min, max)?;
        if min <= 0.0 {
            return Err(DistributionError::NonPositiveBound(min));
        }
        Ok(Self {
            min,
            max,
            log_ratio: (max / min).ln(),
        })
    }
}

impl Distribution for LogUniform {
    fn pdf(&self, x: f64) -> f64 {
        if (self.min..=self.max).contains(&x) {
            1.0 / (x * self.log_ratio)
        } else {
            0.0
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.min {
            return 0.0;
        }
        ((x / self.min).ln() / self.log_ratio).min(1.0)
    }

    fn inv(&self, p: f64) -> f64 {
        self.min * (self.max / self.min).powf(p.clamp(0.0, 1.0))
    }

    fn mean(&self) -> f64 {
        (self.max - self.min) / self.log_ratio
    }

    fn median(&self) -> f64 {
        (self.min * self.max).sqrt()
    }

    fn mode(&self) -> f64 {
        self.min
    }

    fn variance(&self) -> f64 {
        let mean = self.mean();
        (self.max * self.max - self.min * self.min) / (2.0 * self.log_ratio) - mean * mean
    }
}

/// All mass at a single value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dirac {
    value: f64,
}

impl Dirac {
    pub fn new(value: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            value: finite("value", value)?,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Distribution for Dirac {
    fn pdf(&self, x: f64) -> f64 {
        if x == self.value { 1.0 } else { 0.0 }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x >= self.value { 1.0 } else { 0.0 }
    }

    fn inv(&self, _p: f64) -> f64 {
        self.value
    }

    fn mean(&self) -> f64 {
        self.value
    }

    fn median(&self) -> f64 {
        self.value
    }

    fn mode(&self) -> f64 {
        self.value
    }

    fn variance(&self) -> f64 {
        0.0
    }
}

/// `nbins` equally likely values from `min` to `max`.
#[derive(Debug, Clone)]
pub struct DiscreteUniform {
    nbins: usize,
    min: f64,
    max: f64,
    masses: Masses,
}

impl DiscreteUniform {
    pub fn new(nbins: f64, min: f64, max: f64) -> Result<Self, DistributionError> {
        let nbins = bin_count(nbins)?;
        ordered(min, max)?;
        let values = grid(nbins, min, max);
        let probabilities = vec![1.0 / nbins as f64; nbins];
        Ok(Self {
            nbins,
            min,
            max,
            masses: Masses {
                values,
                probabilities,
            },
        })
    }

    /// The support points.
    pub fn values(&self) -> &[f64] {
        &self.masses.values
    }
}

impl Distribution for DiscreteUniform {
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
        0.5 * (self.min + self.max)
    }

    fn mode(&self) -> f64 {
        self.min
    }

    fn variance(&self) -> f64 {
        let n = self.nbins as f64;
        (self.max - self.min).powi(2) * (n + 1.0) / (12.0 * (n - 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_rejects_empty_range() {
        assert!(Uniform::new(5.0, 5.0).is_err());
        assert_eq!(
            Uniform::new(5.0, 3.0).unwrap_err(),
            DistributionError::EmptyRange { min: 5.0, max: 3.0 }
        );
    }

    #[test]
    fn test_loguniform_requires_positive_bounds() {
        assert_eq!(
            LogUniform::new(0.0, 1.0).unwrap_err(),
            DistributionError::NonPositiveBound(0.0)
        );
        let d = LogUniform::new(1.0, 100.0).unwrap();
        assert!((d.median() - 10.0).abs() < 1e-12);
        assert!((d.cdf(10.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_discrete_uniform_grid_and_variance() {
        let d = DiscreteUniform::new(5.0, 0.0, 1.0).unwrap();
        assert_eq!(d.values(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!((d.pdf(0.75) - 0.2).abs() < 1e-12);
        assert_eq!(d.pdf(0.3), 0.0);
        assert!((d.cdf(0.5) - 0.6).abs() < 1e-12);
        assert_eq!(d.inv(0.5), 0.5);

        // Matches the direct second moment of the grid.
        let mean = d.mean();
        let direct: f64 = d.values().iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 5.0;
        assert!((d.variance() - direct).abs() < 1e-12);
    }

    #[test]
    fn test_discrete_uniform_bin_validation() {
        assert_eq!(
            DiscreteUniform::new(1.0, 0.0, 1.0).unwrap_err(),
            DistributionError::TooFewBins(1.0)
        );
        assert!(DiscreteUniform::new(2.5, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_dirac() {
        let d = Dirac::new(3.0).unwrap();
        assert_eq!(d.cdf(2.9), 0.0);
        assert_eq!(d.cdf(3.0), 1.0);
        assert_eq!(d.inv(0.3), 3.0);
        assert_eq!(d.variance(), 0.0);
    }
}
