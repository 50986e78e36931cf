//! Probability distributions.
//!
//! Only the standard normal distribution is needed here: the analytic
//! Black–Scholes formula consumes the CDF, and the random number generators
//! consume the inverse CDF.

pub mod normal;

pub use normal::{normal_cdf, normal_cdf_inverse, normal_pdf};
