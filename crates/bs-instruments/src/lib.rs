//! # bs-instruments
//!
//! The contract model: the call/put variant tag, the vanilla payoff
//! function, and the immutable `EuropeanOption` contract.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod option;
pub mod payoff;

pub use option::EuropeanOption;
pub use payoff::{vanilla_payoff, OptionType};
