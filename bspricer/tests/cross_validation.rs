//! Cross-validation of the three pricing methods against each other.
//!
//! The closed-form price is ground truth; the Monte Carlo and
//! finite-difference prices must converge to it within tolerance.

use approx::assert_abs_diff_eq;
use bspricer::core::Error;
use bspricer::engines::{black_scholes_price, fdm_price, mc_price};
use bspricer::instruments::{EuropeanOption, OptionType};
use bspricer::math::comparison::relative_error;

#[test]
fn three_methods_agree_for_call_and_put() {
    for option_type in [OptionType::Call, OptionType::Put] {
        let opt = EuropeanOption::new(option_type, 100.0, 100.0, 0.05, 0.20, 1.0).unwrap();
        let bs = black_scholes_price(&opt);
        let mc = mc_price(&opt, 200_000, 50);
        let fdm = fdm_price(&opt, 400, 800);
        assert!(
            relative_error(mc, bs) < 0.02,
            "{option_type}: MC = {mc:.4}, BS = {bs:.4}"
        );
        assert!(
            relative_error(fdm, bs) < 0.02,
            "{option_type}: FDM = {fdm:.4}, BS = {bs:.4}"
        );
    }
}

#[test]
fn parity_holds_for_the_analytic_method() {
    let call = EuropeanOption::call(100.0, 100.0, 0.05, 0.20, 1.0).unwrap();
    let put = EuropeanOption::put(100.0, 100.0, 0.05, 0.20, 1.0).unwrap();
    let parity = black_scholes_price(&call) - black_scholes_price(&put);
    assert_abs_diff_eq!(
        parity,
        100.0 - 100.0 * (-0.05_f64).exp(),
        epsilon = 1e-10
    );
}

#[test]
fn configuration_errors_surface_before_any_numerics() {
    let err = EuropeanOption::call(-100.0, 100.0, 0.05, 0.2, 1.0).unwrap_err();
    assert!(matches!(err, Error::Precondition(_)));
    assert!(err.to_string().contains("spot"), "message: {err}");
}
