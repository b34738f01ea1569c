//! Error types for ksrs-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised at the boundary where untyped input becomes core types.
///
/// The scheduling, matching and scoring functions themselves are total.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid rating {0}: expected a value from 1 to 4")]
    InvalidRating(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rating_display() {
        let error = CoreError::InvalidRating(7);
        assert_eq!(error.to_string(), "invalid rating 7: expected a value from 1 to 4");
    }
}
