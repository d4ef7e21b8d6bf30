use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
/// Invalid parameters for a distribution constructor.
pub enum DistributionError {
    #[error("standard deviation must be positive, got {0}")]
    NonPositiveStd(f64),

    #[error("empty range: min {min} must be less than max {max}")]
    EmptyRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    #[error("width must be positive, got {0}")]
    NonPositiveWidth(f64),

    #[error("number of bins must be an integer of at least 2, got {0}")]
    TooFewBins(f64),

    #[error("bounds of a log-scaled distribution must be positive, got {0}")]
    NonPositiveBound(f64),

    #[error("mode {mode} lies outside [{min}, {max}]")]
    ModeOutOfRange {
        /// Lower bound.
        min: f64,
        /// Requested mode.
        mode: f64,
        /// Upper bound.
        max: f64,
    },

    #[error("parameter `{0}` is not a finite number")]
    NonFiniteParameter(&'static str),
}
