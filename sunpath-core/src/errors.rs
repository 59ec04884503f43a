//! Error types for solar position calculations.
//!
//! The calculator is pure computation, so failures are only ever input-contract
//! violations, never environmental. Two variants cover the whole workspace:
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`InvalidArgument`](SolarError::InvalidArgument) | Non-finite timestamp or other unusable numeric input |
//! | [`Parse`](SolarError::Parse) | Malformed ISO-8601 datetime text |
//!
//! Extreme-but-finite inputs (polar latitudes, dates centuries away, degenerate
//! direction vectors) never error; they take defined fallback values instead.
//!
//! # Usage
//!
//! Most fallible functions return [`SolarResult<T>`], which is
//! `Result<T, SolarError>`. Use the constructor methods for consistent
//! error creation:
//!
//! ```
//! use sunpath_core::{SolarError, SolarResult};
//!
//! fn checked_millis(ms: f64) -> SolarResult<f64> {
//!     if !ms.is_finite() {
//!         return Err(SolarError::invalid_argument(
//!             "instant",
//!             "timestamp must be finite",
//!         ));
//!     }
//!     Ok(ms)
//! }
//!
//! assert!(checked_millis(f64::NAN).is_err());
//! ```

use thiserror::Error;

/// Unified error type for the sunpath workspace.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolarError {
    /// An argument cannot be interpreted (e.g. a NaN or infinite timestamp).
    ///
    /// This is a hard stop: the calculator never clamps or recovers invalid
    /// instants. Validate upstream instead of retrying.
    #[error("Invalid argument {argument}: {message}")]
    InvalidArgument { argument: String, message: String },

    /// Datetime text could not be parsed as ISO-8601.
    #[error("Parse error: {message}")]
    Parse { message: String },
}

/// Convenience alias for `Result<T, SolarError>`.
pub type SolarResult<T> = Result<T, SolarError>;

impl SolarError {
    /// Creates an [`InvalidArgument`](Self::InvalidArgument) error.
    pub fn invalid_argument(argument: &str, message: &str) -> Self {
        Self::InvalidArgument {
            argument: argument.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a [`Parse`](Self::Parse) error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Returns `true` for input-contract violations on numeric arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = SolarError::invalid_argument("instant", "timestamp must be finite");
        assert_eq!(
            err.to_string(),
            "Invalid argument instant: timestamp must be finite"
        );
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_parse_display() {
        let err = SolarError::parse("missing 'T' separator");
        assert!(err.to_string().contains("missing 'T' separator"));
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<SolarError>();
        _assert_sync::<SolarError>();
    }
}
