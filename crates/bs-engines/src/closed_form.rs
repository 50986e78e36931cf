//! Closed-form Black–Scholes pricing.
//!
//! Prices European vanilla options with the analytic log-normal formula:
//!
//! $$C = S\,N(d_1) - K e^{-rT} N(d_2)$$
//! $$P = K e^{-rT} N(-d_2) - S\,N(-d_1)$$
//!
//! where $d_{1,2} = \frac{\ln(S/K) + (r \pm \sigma^2/2)T}{\sigma\sqrt{T}}$.
//!
//! This is the reference oracle against which the Monte Carlo and
//! finite-difference engines are validated.

use bs_core::Real;
use bs_instruments::EuropeanOption;
use bs_math::distributions::{normal_cdf, normal_pdf};

/// First- and second-order sensitivities of a European vanilla option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S².
    pub gamma: Real,
    /// ∂V/∂σ (per 1.0 absolute vol, not per 1 %).
    pub vega: Real,
    /// ∂V/∂t (per year).
    pub theta: Real,
    /// ∂V/∂r (per 1.0 rate shift).
    pub rho: Real,
}

/// `(d1, d2)` for the contract, guarded against a vanishing `σ√T`.
fn d_plus_minus(opt: &EuropeanOption) -> (Real, Real) {
    let std_dev = opt.volatility() * opt.maturity().sqrt();
    if std_dev > 1e-15 {
        let d1 = ((opt.spot() / opt.strike()).ln()
            + (opt.rate() + 0.5 * opt.volatility() * opt.volatility()) * opt.maturity())
            / std_dev;
        (d1, d1 - std_dev)
    } else {
        let fwd = opt.spot() * (opt.rate() * opt.maturity()).exp();
        let big = if fwd > opt.strike() { 1e15 } else { -1e15 };
        (big, big)
    }
}

/// The analytic Black–Scholes price of the contract.
pub fn black_scholes_price(opt: &EuropeanOption) -> Real {
    let phi = opt.option_type().sign();
    let (d1, d2) = d_plus_minus(opt);
    let df = (-opt.rate() * opt.maturity()).exp();
    phi * (opt.spot() * normal_cdf(phi * d1) - opt.strike() * df * normal_cdf(phi * d2))
}

/// The analytic Greeks of the contract.
pub fn black_scholes_greeks(opt: &EuropeanOption) -> Greeks {
    let phi = opt.option_type().sign();
    let (d1, d2) = d_plus_minus(opt);
    let sqrt_t = opt.maturity().sqrt();
    let std_dev = opt.volatility() * sqrt_t;
    let df = (-opt.rate() * opt.maturity()).exp();

    let nd1 = normal_cdf(phi * d1);
    let nd2 = normal_cdf(phi * d2);
    let npd1 = normal_pdf(d1);

    Greeks {
        delta: phi * nd1,
        gamma: npd1 / (opt.spot() * std_dev),
        vega: opt.spot() * npd1 * sqrt_t,
        theta: -(opt.spot() * npd1 * opt.volatility()) / (2.0 * sqrt_t)
            - phi * opt.rate() * opt.strike() * df * nd2,
        rho: phi * opt.strike() * opt.maturity() * df * nd2,
    }
}
