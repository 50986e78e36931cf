//! # bs-engines
//!
//! Three independent pricing methods for European vanilla options:
//!
//! * [`closed_form`] — the analytic Black–Scholes formula, used as ground
//!   truth for the other two methods
//! * [`monte_carlo`] — risk-neutral log-normal terminal sampling
//! * [`finite_differences`] — the grid-based PDE solver: exponentially-fitted
//!   spatial discretisation with Crank–Nicolson time stepping
//!
//! All three take the same immutable [`EuropeanOption`] contract and return a
//! present-value price at the contract's spot, so their outputs can be
//! cross-validated against each other.
//!
//! [`EuropeanOption`]: bs_instruments::EuropeanOption

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod closed_form;
pub mod finite_differences;
pub mod monte_carlo;

pub use closed_form::{black_scholes_greeks, black_scholes_price, Greeks};
pub use finite_differences::{fdm_price, interpolate_at, FittedFdmSolver, TridiagonalOperator};
pub use monte_carlo::{mc_price, mc_price_with_error};
