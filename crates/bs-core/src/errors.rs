//! Error types for bspricer.
//!
//! All fallible operations in the workspace report through a single
//! `thiserror`-derived enum. Contract validation uses the `ensure!` macro so
//! that malformed parameters are rejected at construction, before any
//! numerical work starts.

use thiserror::Error;

/// The top-level error type used throughout bspricer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (e.g. a non-positive contract parameter).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument (e.g. unparseable user input).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout bspricer.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a precondition, returning `Err(Error::Precondition(...))` if `$cond`
/// is false.
///
/// # Example
/// ```
/// use bs_core::ensure;
/// fn positive(x: f64) -> bs_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use bs_core::fail;
/// fn always_err() -> bs_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guarded(x: f64) -> Result<f64> {
        crate::ensure!(x > 0.0, "x must be positive, got {x}");
        Ok(x.sqrt())
    }

    #[test]
    fn ensure_passes_and_fails() {
        assert_eq!(guarded(4.0), Ok(2.0));
        assert_eq!(
            guarded(-1.0),
            Err(Error::Precondition("x must be positive, got -1".into()))
        );
    }

    #[test]
    fn fail_produces_runtime_error() {
        fn boom() -> Result<()> {
            crate::fail!("bad state: {}", 42);
        }
        assert_eq!(boom(), Err(Error::Runtime("bad state: 42".into())));
    }

    #[test]
    fn errors_display() {
        let e = Error::Precondition("spot must be positive".into());
        assert_eq!(
            e.to_string(),
            "precondition not satisfied: spot must be positive"
        );
        let e = Error::InvalidArgument("expected a number".into());
        assert_eq!(e.to_string(), "invalid argument: expected a number");
    }
}
