//! Mapping from a validated DIST line to a distribution and its plotting domain.

use crate::distribution::{
    Dirac, DiscreteErrorSkewedNormal, DiscreteUniform, Distribution, ErrorSkewedNormal, LogNormal,
    LogUniform, Normal, Triangular, TruncatedNormal, Uniform,
};
use crate::error::DistributionError;
use ert_editor_lang::{Token, TokenKind, validate_dist_line};
use serde::Serialize;

/// The family a preview was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Family {
    Normal,
    LogNormal,
    TruncatedNormal,
    Uniform,
    LogUniform,
    Dirac,
    DiscreteUniform,
    ErrorSkewedNormal,
    DiscreteErrorSkewedNormal,
    Triangular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    Linear,
    Log,
}

/// Where the density is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Sampling {
    /// Evenly spaced samples across the domain (log-spaced on a log axis).
    Continuous,
    /// The support points of a discrete distribution.
    Points(Vec<f64>),
}

/// Everything needed to plot a DIST prior.
#[derive(Debug)]
pub struct DistributionPreview {
    pub keyword: &'static str,
    pub family: Family,
    pub distribution: Box<dyn Distribution>,
    /// Plotted x range, `domain.0 < domain.1`.
    pub domain: (f64, f64),
    pub scale: AxisScale,
    pub sampling: Sampling,
}

/// Outcome of building a preview.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewError {
    /// The line is not a complete DIST definition.
    Invalid,
    /// `RAW` has nothing to plot.
    NotPlottable(&'static str),
    Distribution(DistributionError),
}

impl From<DistributionError> for PreviewError {
    fn from(err: DistributionError) -> Self {
        Self::Distribution(err)
    }
}

/// Build a preview from a tokenized DIST line.
pub fn preview_for_tokens(tokens: &[Token]) -> Result<DistributionPreview, PreviewError> {
    if !validate_dist_line(tokens) {
        return Err(PreviewError::Invalid);
    }
    let keyword = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Keyword)
        .and_then(|t| t.keyword)
        .ok_or(PreviewError::Invalid)?;
    let params: Vec<f64> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Number)
        .map(|t| t.text().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| PreviewError::Invalid)?;

    build(keyword.label, &params)
}

fn preview(
    keyword: &'static str,
    family: Family,
    distribution: impl Distribution + 'static,
    domain: (f64, f64),
) -> DistributionPreview {
    DistributionPreview {
        keyword,
        family,
        distribution: Box::new(distribution),
        domain,
        scale: AxisScale::Linear,
        sampling: Sampling::Continuous,
    }
}

fn build(keyword: &'static str, p: &[f64]) -> Result<DistributionPreview, PreviewError> {
    let arg = |idx: usize| p.get(idx).copied().ok_or(PreviewError::Invalid);

    let built = match keyword {
        "NORMAL" => {
            let (mean, std) = (arg(0)?, arg(1)?);
            let d = Normal::new(mean, std)?;
            preview(keyword, Family::Normal, d, (mean - 6.0 * std, mean + 6.0 * std))
        }
        "LOGNORMAL" => {
            let d = LogNormal::new(arg(0)?, arg(1)?)?;
            let domain = (d.inv(0.001), d.inv(0.999));
            DistributionPreview {
                scale: AxisScale::Log,
                ..preview(keyword, Family::LogNormal, d, domain)
            }
        }
        "TRUNCATED_NORMAL" => {
            let (min, max) = (arg(2)?, arg(3)?);
            let d = TruncatedNormal::new(arg(0)?, arg(1)?, min, max)?;
            preview(keyword, Family::TruncatedNormal, d, (min, max))
        }
        "UNIFORM" => {
            let (min, max) = (arg(0)?, arg(1)?);
            preview(keyword, Family::Uniform, Uniform::new(min, max)?, (min, max))
        }
        "LOGUNIF" => {
            let (min, max) = (arg(0)?, arg(1)?);
            DistributionPreview {
                scale: AxisScale::Log,
                ..preview(keyword, Family::LogUniform, LogUniform::new(min, max)?, (min, max))
            }
        }
        "CONST" => {
            let value = arg(0)?;
            let half_width = if value == 0.0 { 0.001 } else { value.abs() / 100.0 };
            DistributionPreview {
                sampling: Sampling::Points(vec![value]),
                ..preview(
                    keyword,
                    Family::Dirac,
                    Dirac::new(value)?,
                    (value - half_width, value + half_width),
                )
            }
        }
        "DUNIF" => {
            let (nbins, min, max) = (arg(0)?, arg(1)?, arg(2)?);
            if nbins == 1.0 {
                // A single bin has no step; plot the continuous range instead.
                preview(keyword, Family::Uniform, Uniform::new(min, max)?, (min, max))
            } else {
                let d = DiscreteUniform::new(nbins, min, max)?;
                let points = d.values().to_vec();
                DistributionPreview {
                    sampling: Sampling::Points(points),
                    ..preview(keyword, Family::DiscreteUniform, d, (min, max))
                }
            }
        }
        "ERRF" => {
            let (min, max) = (arg(0)?, arg(1)?);
            let d = ErrorSkewedNormal::new(min, max, arg(2)?, arg(3)?)?;
            preview(keyword, Family::ErrorSkewedNormal, d, (min, max))
        }
        "DERRF" => {
            let (min, max) = (arg(1)?, arg(2)?);
            let d = DiscreteErrorSkewedNormal::new(arg(0)?, min, max, arg(3)?, arg(4)?)?;
            let points = d.values().to_vec();
            DistributionPreview {
                sampling: Sampling::Points(points),
                ..preview(keyword, Family::DiscreteErrorSkewedNormal, d, (min, max))
            }
        }
        "TRIANGULAR" => {
            let (min, max) = (arg(0)?, arg(2)?);
            let d = Triangular::new(min, arg(1)?, max)?;
            preview(keyword, Family::Triangular, d, (min, max))
        }
        _ => return Err(PreviewError::NotPlottable(keyword)),
    };
    Ok(built)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ert_editor_lang::{Language, tokenize};

    fn preview_line(line: &str) -> Result<DistributionPreview, PreviewError> {
        preview_for_tokens(&tokenize(Language::Dist, line))
    }

    #[test]
    fn test_normal_domain_is_six_sigma() {
        let p = preview_line("PORO NORMAL 0.3 0.05").unwrap();
        assert_eq!(p.family, Family::Normal);
        assert!((p.distribution.mean() - 0.3).abs() < 1e-12);
        assert!((p.distribution.std() - 0.05).abs() < 1e-12);
        assert!(p.domain.0.abs() < 1e-12);
        assert!((p.domain.1 - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_dunif_single_bin_is_continuous() {
        let p = preview_line("X DUNIF 1 0 10").unwrap();
        assert_eq!(p.family, Family::Uniform);
        assert_eq!(p.sampling, Sampling::Continuous);
        assert_eq!(p.domain, (0.0, 10.0));

        let p = preview_line("X DUNIF 3 0 10").unwrap();
        assert_eq!(p.family, Family::DiscreteUniform);
        assert_eq!(p.sampling, Sampling::Points(vec![0.0, 5.0, 10.0]));
    }

    #[test]
    fn test_const_domain() {
        let p = preview_line("X CONST 200").unwrap();
        assert_eq!(p.domain, (198.0, 202.0));
        let p = preview_line("X CONST 0").unwrap();
        assert_eq!(p.domain, (-0.001, 0.001));
        let p = preview_line("X CONST -50").unwrap();
        assert_eq!(p.domain, (-50.5, -49.5));
    }

    #[test]
    fn test_log_scaled_families() {
        assert_eq!(preview_line("X LOGUNIF 0.1 10").unwrap().scale, AxisScale::Log);
        let p = preview_line("X LOGNORMAL 0 1").unwrap();
        assert_eq!(p.scale, AxisScale::Log);
        assert!(p.domain.0 > 0.0 && p.domain.0 < p.domain.1);
    }

    #[test]
    fn test_lognormal_domain_spans_inner_quantiles() {
        // Log-space parameters; the axis covers the 0.1% to 99.9% quantiles.
        let z = 3.090_232_306_167_813;
        let p = preview_line("X LOGNORMAL 1 0.5").unwrap();
        let (lo, hi) = ((1.0f64 - 0.5 * z).exp(), (1.0f64 + 0.5 * z).exp());
        assert!((p.domain.0 - lo).abs() / lo < 1e-6, "{:?}", p.domain);
        assert!((p.domain.1 - hi).abs() / hi < 1e-6, "{:?}", p.domain);
        assert_ne!(p.domain, (1.0, 0.5));
    }

    #[test]
    fn test_failures() {
        assert_eq!(preview_line("X NORMAL 1").unwrap_err(), PreviewError::Invalid);
        assert_eq!(
            preview_line("X RAW").unwrap_err(),
            PreviewError::NotPlottable("RAW")
        );
        assert!(matches!(
            preview_line("X UNIFORM 5 3").unwrap_err(),
            PreviewError::Distribution(DistributionError::EmptyRange { .. })
        ));
    }
}
