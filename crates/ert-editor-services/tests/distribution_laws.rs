use ert_editor_services::distribution::{
    ErrorSkewedNormal, LogNormal, LogUniform, Normal, Pert, Triangular, TruncatedNormal, Uniform,
};
use ert_editor_services::{Distribution, DistributionError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sample_probabilities(seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..100).map(|_| rng.gen_range(1e-6..1.0 - 1e-6)).collect()
}

fn assert_inverse_law(name: &str, d: &dyn Distribution) {
    for p in sample_probabilities(0x5eed) {
        let round_trip = d.cdf(d.inv(p));
        assert!(
            (round_trip - p).abs() < 1e-6,
            "{name}: cdf(inv({p})) = {round_trip}"
        );
    }
}

#[test]
fn test_cdf_inverts_inv_for_reference_families() {
    assert_inverse_law("uniform", &Uniform::new(0.0, 1.0).unwrap());
    assert_inverse_law("normal", &Normal::new(0.0, 1.0).unwrap());
    assert_inverse_law("lognormal", &LogNormal::new(0.0, 1.0).unwrap());
    assert_inverse_law("triangular", &Triangular::new(0.0, 0.5, 1.0).unwrap());
}

#[test]
fn test_cdf_inverts_inv_for_remaining_continuous_families() {
    assert_inverse_law(
        "truncated normal",
        &TruncatedNormal::new(1.0, 2.0, -1.0, 4.0).unwrap(),
    );
    assert_inverse_law("log-uniform", &LogUniform::new(0.01, 100.0).unwrap());
    assert_inverse_law(
        "error-skewed normal",
        &ErrorSkewedNormal::new(-2.0, 3.0, 0.5, 1.5).unwrap(),
    );
    assert_inverse_law("pert", &Pert::new(0.0, 3.0, 10.0).unwrap());
}

#[test]
fn test_invalid_parameters_are_rejected() {
    assert!(Uniform::new(5.0, 5.0).is_err());
    assert!(Uniform::new(5.0, 3.0).is_err());
    assert_eq!(
        Normal::new(0.0, 0.0).unwrap_err(),
        DistributionError::NonPositiveStd(0.0)
    );
    assert_eq!(
        Normal::new(0.0, -1.0).unwrap_err(),
        DistributionError::NonPositiveStd(-1.0)
    );
    assert_eq!(
        ErrorSkewedNormal::new(0.0, 1.0, 0.0, 0.0).unwrap_err(),
        DistributionError::NonPositiveWidth(0.0)
    );
}

#[test]
fn test_summary_statistics_match_closed_forms() {
    let n = Normal::new(0.3, 0.05).unwrap();
    assert_eq!(n.mean(), 0.3);
    assert_eq!(n.median(), 0.3);
    assert_eq!(n.mode(), 0.3);
    assert!((n.variance() - 0.0025).abs() < 1e-15);

    let u = Uniform::new(2.0, 6.0).unwrap();
    assert_eq!(u.mean(), 4.0);
    assert_eq!(u.median(), 4.0);
    assert!((u.std() - 4.0 / 12f64.sqrt()).abs() < 1e-12);

    let t = Triangular::new(0.0, 1.0, 4.0).unwrap();
    assert!((t.mean() - 5.0 / 3.0).abs() < 1e-12);
    assert_eq!(t.mode(), 1.0);
    // The median lies on the longer right leg: 4 - sqrt(4 * 3 / 2).
    assert!((t.median() - (4.0 - 6f64.sqrt())).abs() < 1e-12);
}
