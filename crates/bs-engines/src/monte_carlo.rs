//! Monte Carlo pricing by risk-neutral terminal sampling.
//!
//! Under the risk-neutral measure the terminal price of a geometric Brownian
//! motion is log-normal:
//!
//! `S_T = S₀ · exp((r − σ²/2)T + σ√T·Z)`, `Z ~ N(0, 1)`,
//!
//! so a European payoff can be sampled in a single exact step — no path
//! discretisation. The price is the discounted sample mean of the payoff.
//! Used as a secondary correctness reference for the grid solver.

use bs_core::{Real, Size};
use bs_instruments::EuropeanOption;
use bs_math::random_numbers::InverseCumulativeNormalRng;
use bs_math::statistics::Statistics;

/// Monte Carlo price with a standard-error estimate.
///
/// Draws `n_samples` terminal prices with a generator seeded from `seed` and
/// returns `(mean, std_error)` of the discounted payoff. The generator is a
/// local instance; repeated calls with the same seed reproduce the same
/// price exactly.
pub fn mc_price_with_error(opt: &EuropeanOption, n_samples: Size, seed: u64) -> (Real, Real) {
    let drift = (opt.rate() - 0.5 * opt.volatility() * opt.volatility()) * opt.maturity();
    let vol_sqrt_t = opt.volatility() * opt.maturity().sqrt();
    let discount = (-opt.rate() * opt.maturity()).exp();

    let mut rng = InverseCumulativeNormalRng::new(seed);
    let mut stats = Statistics::new();
    for _ in 0..n_samples {
        let z = rng.next_real();
        let terminal = opt.spot() * (drift + vol_sqrt_t * z).exp();
        stats.add(discount * opt.payoff(terminal));
    }

    (
        stats.mean().unwrap_or(0.0),
        stats.error_estimate().unwrap_or(0.0),
    )
}

/// Monte Carlo price of the contract.
pub fn mc_price(opt: &EuropeanOption, n_samples: Size, seed: u64) -> Real {
    mc_price_with_error(opt, n_samples, seed).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closed_form::black_scholes_price;
    use bs_math::comparison::relative_error;

    #[test]
    fn mc_call_matches_closed_form() {
        let opt = EuropeanOption::call(100.0, 120.0, 0.04, 0.2, 2.0).unwrap();
        let bs = black_scholes_price(&opt);
        let mc = mc_price(&opt, 200_000, 123);
        assert!(
            relative_error(mc, bs) < 0.02,
            "MC call = {mc:.4}, BS = {bs:.4}"
        );
    }

    #[test]
    fn mc_put_matches_closed_form() {
        let opt = EuropeanOption::put(100.0, 120.0, 0.04, 0.2, 2.0).unwrap();
        let bs = black_scholes_price(&opt);
        let mc = mc_price(&opt, 200_000, 456);
        assert!(
            relative_error(mc, bs) < 0.02,
            "MC put = {mc:.4}, BS = {bs:.4}"
        );
    }

    #[test]
    fn mc_is_monotone_in_spot_with_common_seed() {
        let lo = EuropeanOption::call(90.0, 100.0, 0.03, 0.2, 1.5).unwrap();
        let hi = EuropeanOption::call(110.0, 100.0, 0.03, 0.2, 1.5).unwrap();
        let v_lo = mc_price(&lo, 80_000, 11);
        let v_hi = mc_price(&hi, 80_000, 11);
        assert!(v_hi >= v_lo, "v_hi = {v_hi}, v_lo = {v_lo}");
    }

    #[test]
    fn mc_is_reproducible_for_a_fixed_seed() {
        let opt = EuropeanOption::call(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
        assert_eq!(mc_price(&opt, 10_000, 42), mc_price(&opt, 10_000, 42));
        assert_ne!(mc_price(&opt, 10_000, 42), mc_price(&opt, 10_000, 43));
    }

    #[test]
    fn mc_error_estimate_brackets_the_truth() {
        let opt = EuropeanOption::call(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
        let bs = black_scholes_price(&opt);
        let (mc, stderr) = mc_price_with_error(&opt, 100_000, 42);
        assert!(stderr > 0.0);
        assert!(
            (mc - bs).abs() < 3.0 * stderr + 0.5,
            "MC = {mc:.4} ± {stderr:.4}, BS = {bs:.4}"
        );
    }
}
