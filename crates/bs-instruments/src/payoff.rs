//! Option type and terminal payoff.
//!
//! The call/put variant is a plain tag carried on the contract; pricing code
//! receives it explicitly and never infers the variant by probing the payoff
//! function.

use bs_core::Real;
use std::fmt;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// The plain vanilla European payoff at expiry.
///
/// `max(φ·(S_T − K), 0)` where `φ = +1` for a call, `−1` for a put.
#[inline]
pub fn vanilla_payoff(option_type: OptionType, terminal_price: Real, strike: Real) -> Real {
    (option_type.sign() * (terminal_price - strike)).max(0.0)
}
