use super::special::{std_normal_cdf, std_normal_inv, std_normal_pdf};
use super::{Distribution, finite, ordered};
use crate::error::DistributionError;

fn positive_std(std: f64) -> Result<f64, DistributionError> {
    finite("std", std)?;
    if std > 0.0 {
        Ok(std)
    } else {
        Err(DistributionError::NonPositiveStd(std))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: f64,
    std: f64,
}

impl Normal {
    pub fn new(mean: f64, std: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            mean: finite("mean", mean)?,
            std: positive_std(std)?,
        })
    }
}

impl Distribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        std_normal_pdf((x - self.mean) / self.std) / self.std
    }

    fn cdf(&self, x: f64) -> f64 {
        std_normal_cdf((x - self.mean) / self.std)
    }

    fn inv(&self, p: f64) -> f64 {
        self.mean + self.std * std_normal_inv(p)
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    fn median(&self) -> f64 {
        self.mean
    }

    fn mode(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        self.std * self.std
    }

    fn std(&self) -> f64 {
        self.std
    }
}

/// `ln(X)` is normal with the given mean and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormal {
    mu: f64,
    sigma: f64,
}

impl LogNormal {
    pub fn new(mean: f64, std: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            mu: finite("mean", mean)?,
            sigma: positive_std(std)?,
        })
    }
}

impl Distribution for LogNormal {
    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        std_normal_pdf((x.ln() - self.mu) / self.sigma) / (x * self.sigma)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        std_normal_cdf((x.ln() - self.mu) / self.sigma)
    }

    fn inv(&self, p: f64) -> f64 {
        (self.mu + self.sigma * std_normal_inv(p)).exp()
    }

    fn mean(&self) -> f64 {
        (self.mu + 0.5 * self.sigma * self.sigma).exp()
    }

    fn median(&self) -> f64 {
        self.mu.exp()
    }

    fn mode(&self) -> f64 {
        (self.mu - self.sigma * self.sigma).exp()
    }

    fn variance(&self) -> f64 {
        let s2 = self.sigma * self.sigma;
        (s2.exp() - 1.0) * (2.0 * self.mu + s2).exp()
    }
}

/// A normal distribution conditioned on `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncatedNormal {
    mean: f64,
    std: f64,
    min: f64,
    max: f64,
    alpha: f64,
    beta: f64,
    /// Probability mass of the untruncated normal inside `[min, max]`.
    z: f64,
}

impl TruncatedNormal {
    pub fn new(mean: f64, std: f64, min: f64, max: f64) -> Result<Self, DistributionError> {
        let mean = finite("mean", mean)?;
        let std = positive_std(std)?;
        ordered(min, max)?;
        let alpha = (min - mean) / std;
        let beta = (max - mean) / std;
        let z = std_normal_cdf(beta) - std_normal_cdf(alpha);
        if z <= 0.0 {
            // The interval lies so far in a tail that it carries no representable mass.
            return Err(DistributionError::EmptyRange { min, max });
        }
        Ok(Self {
            mean,
            std,
            min,
            max,
            alpha,
            beta,
            z,
        })
    }
}

impl Distribution for TruncatedNormal {
    fn pdf(&self, x: f64) -> f64 {
        if x < self.min || x > self.max {
            return 0.0;
        }
        std_normal_pdf((x - self.mean) / self.std) / (self.std * self.z)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.min {
            return 0.0;
        }
        if x >= self.max {
            return 1.0;
        }
        (std_normal_cdf((x - self.mean) / self.std) - std_normal_cdf(self.alpha)) / self.z
    }

    fn inv(&self, p: f64) -> f64 {
        let u = std_normal_cdf(self.alpha) + p.clamp(0.0, 1.0) * self.z;
        (self.mean + self.std * std_normal_inv(u)).clamp(self.min, self.max)
    }

    fn mean(&self) -> f64 {
        self.mean + self.std * (std_normal_pdf(self.alpha) - std_normal_pdf(self.beta)) / self.z
    }

    fn mode(&self) -> f64 {
        self.mean.clamp(self.min, self.max)
    }

    fn variance(&self) -> f64 {
        let (pa, pb) = (std_normal_pdf(self.alpha), std_normal_pdf(self.beta));
        let shift = (pa - pb) / self.z;
        self.std * self.std * (1.0 + (self.alpha * pa - self.beta * pb) / self.z - shift * shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_rejects_bad_std() {
        assert_eq!(
            Normal::new(0.0, 0.0).unwrap_err(),
            DistributionError::NonPositiveStd(0.0)
        );
        assert!(Normal::new(0.0, -1.0).is_err());
        assert!(Normal::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_lognormal_moments() {
        let d = LogNormal::new(0.0, 1.0).unwrap();
        assert!((d.median() - 1.0).abs() < 1e-12);
        assert!((d.mean() - 0.5f64.exp()).abs() < 1e-12);
        assert!((d.mode() - (-1.0f64).exp()).abs() < 1e-12);
        assert_eq!(d.pdf(-1.0), 0.0);
    }

    #[test]
    fn test_truncated_normal_symmetric_window() {
        let d = TruncatedNormal::new(0.0, 1.0, -1.0, 1.0).unwrap();
        assert!(d.mean().abs() < 1e-12);
        assert!((d.cdf(0.0) - 0.5).abs() < 1e-12);
        assert!(d.variance() < 1.0);
        assert_eq!(d.pdf(2.0), 0.0);
        assert!((d.cdf(d.inv(0.8)) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_truncated_normal_mode_clamps() {
        let d = TruncatedNormal::new(5.0, 1.0, 0.0, 2.0).unwrap();
        assert_eq!(d.mode(), 2.0);
        assert!(TruncatedNormal::new(0.0, 1.0, 2.0, 2.0).is_err());
    }
}
