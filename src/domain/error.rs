//! Domain validation errors for stake evaluation.
//!
//! This module defines errors that occur when stake inputs violate domain
//! invariants. These errors are returned by `try_new` constructors and by
//! [`crate::domain::kelly::evaluate`]. Every invalid input path is one of
//! three kinds; odds carry a finer-grained reason.
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use stakelord::domain::error::{DomainError, OddsError};
//! use stakelord::domain::odds::Odds;
//! use rust_decimal::Decimal;
//!
//! // Decimal odds at or below even money fail normalization
//! let result = Odds::decimal(Decimal::ONE).quote();
//!
//! assert!(matches!(
//!     result,
//!     Err(DomainError::InvalidOdds(OddsError::NotAboveEven))
//! ));
//! ```

use thiserror::Error;

/// Errors that occur when stake inputs violate domain rules.
///
/// There are exactly three kinds, matching the three inputs that can be
/// rejected. Each evaluation is all-or-nothing: an error means no partial
/// numeric results were produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// Win probability missing, unparseable, or outside [0, 100] percent.
    #[error("win probability must be between 0% and 100%")]
    InvalidProbability,

    /// Bankroll missing, unparseable, or not strictly positive.
    #[error("bankroll must be a positive number")]
    InvalidBankroll,

    /// Odds rejected during parsing or normalization.
    #[error("{0}")]
    InvalidOdds(#[from] OddsError),
}

/// Reasons an odds quotation is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OddsError {
    /// The odds field did not parse as a number.
    #[error("odds must be a valid number")]
    NotANumber,

    /// Decimal-format odds must exceed 1.0 (the stake itself).
    #[error("decimal odds must be greater than 1.0")]
    NotAboveEven,

    /// Normalization produced net odds at or below zero.
    #[error("net odds must be positive")]
    NonPositiveNet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        assert_eq!(
            DomainError::InvalidProbability.to_string(),
            "win probability must be between 0% and 100%"
        );
        assert_eq!(
            DomainError::InvalidBankroll.to_string(),
            "bankroll must be a positive number"
        );
        assert_eq!(
            DomainError::InvalidOdds(OddsError::NotANumber).to_string(),
            "odds must be a valid number"
        );
        assert_eq!(
            DomainError::InvalidOdds(OddsError::NotAboveEven).to_string(),
            "decimal odds must be greater than 1.0"
        );
        assert_eq!(
            DomainError::InvalidOdds(OddsError::NonPositiveNet).to_string(),
            "net odds must be positive"
        );
    }

    #[test]
    fn odds_error_converts_into_domain_error() {
        let err: DomainError = OddsError::NotAboveEven.into();
        assert_eq!(err, DomainError::InvalidOdds(OddsError::NotAboveEven));
    }
}
