//! # bspricer
//!
//! European vanilla option pricing under the Black–Scholes model with three
//! independent, cross-validated numerical methods: a closed-form analytic
//! formula, a Monte Carlo sampler, and a finite-difference PDE solver.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this crate
//! rather than the individual `bs-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use bspricer::engines::{black_scholes_price, fdm_price};
//! use bspricer::instruments::EuropeanOption;
//!
//! let opt = EuropeanOption::call(100.0, 100.0, 0.05, 0.20, 1.0).unwrap();
//! let analytic = black_scholes_price(&opt);
//! let grid = fdm_price(&opt, 400, 800);
//! assert!((analytic - 10.4506).abs() < 1e-3);
//! assert!((grid - analytic).abs() / analytic < 0.02);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use bs_core as core;

/// The three pricing engines: closed form, Monte Carlo, finite differences.
pub use bs_engines as engines;

/// Contract definitions.
pub use bs_instruments as instruments;

/// Mathematical utilities: distributions, RNG, statistics.
pub use bs_math as math;
