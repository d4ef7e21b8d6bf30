//! DIST keyword table.
//!
//! A DIST line assigns a prior to a named parameter: `NAME KEYWORD arg1 arg2 ...`.

use super::Keyword;

pub static DIST_KEYWORDS: &[Keyword] = &[
    Keyword::new(
        "NORMAL",
        "mean std",
        "Normal distribution with the given mean and standard deviation.\n\n\
         `std` must be strictly positive.",
    )
    .count(2),
    Keyword::new(
        "LOGNORMAL",
        "mean std",
        "Log-normal distribution: the logarithm of the value is normally distributed with \
         mean `mean` and standard deviation `std`.",
    )
    .count(2),
    Keyword::new(
        "TRUNCATED_NORMAL",
        "mean std min max",
        "Normal distribution truncated to the interval `[min, max]`.",
    )
    .count(4),
    Keyword::new(
        "UNIFORM",
        "min max",
        "Uniform distribution on `[min, max]`. Requires `min < max`.",
    )
    .count(2),
    Keyword::new(
        "LOGUNIF",
        "min max",
        "Log-uniform distribution: the logarithm of the value is uniform on \
         `[ln(min), ln(max)]`. Both bounds must be positive.",
    )
    .count(2),
    Keyword::new(
        "CONST",
        "value",
        "A constant; every realization gets exactly `value`.",
    )
    .count(1),
    Keyword::new(
        "DUNIF",
        "nbins min max",
        "Discrete uniform distribution over `nbins` equally spaced values from `min` to `max`.",
    )
    .count(3),
    Keyword::new(
        "ERRF",
        "min max skewness width",
        "Error-function transformed normal on `(min, max)`. `skewness` shifts the mass \
         towards one of the bounds, `width` controls the peakedness and must be positive.",
    )
    .count(4),
    Keyword::new(
        "DERRF",
        "nbins min max skewness width",
        "Discrete variant of `ERRF` with `nbins` equally spaced values.",
    )
    .count(5),
    Keyword::new(
        "TRIANGULAR",
        "min mode max",
        "Triangular distribution with lower bound `min`, peak `mode` and upper bound `max`.",
    )
    .count(3),
    Keyword::new(
        "RAW",
        "",
        "The value is sampled by an external process; no prior is applied.",
    )
    .count(0),
];
