//! The European vanilla option contract.

use crate::payoff::{vanilla_payoff, OptionType};
use bs_core::{ensure, errors::Result, Rate, Real, Time, Volatility};

/// An immutable European vanilla option contract.
///
/// Bundles the market and contract parameters every pricing method needs:
/// spot, strike, risk-free rate, volatility, and maturity, plus the call/put
/// variant selected at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuropeanOption {
    option_type: OptionType,
    spot: Real,
    strike: Real,
    rate: Rate,
    volatility: Volatility,
    maturity: Time,
}

impl EuropeanOption {
    /// Create a new contract.
    ///
    /// Spot, strike, volatility, and maturity must all be strictly positive;
    /// the rate may be any real number (negative rates are legitimate).
    /// Violations are configuration errors reported as
    /// [`Error::Precondition`](bs_core::Error::Precondition), never deferred
    /// to the numerical methods.
    pub fn new(
        option_type: OptionType,
        spot: Real,
        strike: Real,
        rate: Rate,
        volatility: Volatility,
        maturity: Time,
    ) -> Result<Self> {
        ensure!(spot > 0.0, "spot must be positive, got {spot}");
        ensure!(strike > 0.0, "strike must be positive, got {strike}");
        ensure!(
            volatility > 0.0,
            "volatility must be positive, got {volatility}"
        );
        ensure!(maturity > 0.0, "maturity must be positive, got {maturity}");
        Ok(Self {
            option_type,
            spot,
            strike,
            rate,
            volatility,
            maturity,
        })
    }

    /// Convenience: a call with the given parameters.
    pub fn call(spot: Real, strike: Real, rate: Rate, volatility: Volatility, maturity: Time) -> Result<Self> {
        Self::new(OptionType::Call, spot, strike, rate, volatility, maturity)
    }

    /// Convenience: a put with the given parameters.
    pub fn put(spot: Real, strike: Real, rate: Rate, volatility: Volatility, maturity: Time) -> Result<Self> {
        Self::new(OptionType::Put, spot, strike, rate, volatility, maturity)
    }

    /// The call/put variant.
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Spot price of the underlying.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// Strike price.
    pub fn strike(&self) -> Real {
        self.strike
    }

    /// Continuously-compounded risk-free rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Volatility of the underlying.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// Time to maturity in years.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Terminal payoff at the given underlying price.
    pub fn payoff(&self, terminal_price: Real) -> Real {
        vanilla_payoff(self.option_type, terminal_price, self.strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bs_core::Error;

    #[test]
    fn valid_contract() {
        let opt = EuropeanOption::call(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
        assert_eq!(opt.option_type(), OptionType::Call);
        assert_eq!(opt.spot(), 100.0);
        assert_eq!(opt.strike(), 100.0);
        assert_eq!(opt.rate(), 0.05);
        assert_eq!(opt.volatility(), 0.2);
        assert_eq!(opt.maturity(), 1.0);
    }

    #[test]
    fn rejects_non_positive_parameters() {
        for (s, k, sigma, t) in [
            (0.0, 100.0, 0.2, 1.0),
            (-100.0, 100.0, 0.2, 1.0),
            (100.0, 0.0, 0.2, 1.0),
            (100.0, -5.0, 0.2, 1.0),
            (100.0, 100.0, 0.0, 1.0),
            (100.0, 100.0, -0.2, 1.0),
            (100.0, 100.0, 0.2, 0.0),
            (100.0, 100.0, 0.2, -1.0),
        ] {
            let res = EuropeanOption::call(s, k, 0.05, sigma, t);
            assert!(
                matches!(res, Err(Error::Precondition(_))),
                "expected precondition error for (S0={s}, K={k}, sigma={sigma}, T={t})"
            );
        }
    }

    #[test]
    fn rate_may_be_zero_or_negative() {
        assert!(EuropeanOption::call(100.0, 100.0, 0.0, 0.2, 1.0).is_ok());
        assert!(EuropeanOption::put(100.0, 100.0, -0.01, 0.2, 1.0).is_ok());
    }

    #[test]
    fn payoff_dispatches_through_variant() {
        let call = EuropeanOption::call(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
        let put = EuropeanOption::put(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
        assert_eq!(call.payoff(120.0), 20.0);
        assert_eq!(call.payoff(80.0), 0.0);
        assert_eq!(put.payoff(80.0), 20.0);
        assert_eq!(put.payoff(120.0), 0.0);
    }
}
