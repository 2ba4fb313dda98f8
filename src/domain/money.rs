//! Monetary types for bankroll and stake representation.

use rust_decimal::Decimal;

use super::error::DomainError;

/// A stake amount represented as a Decimal for precision.
pub type Stake = Decimal;

/// A bettor's total available funds.
///
/// Validated at construction: a bankroll must be strictly positive. The inner
/// amount is a Decimal so that the stake identities (`full = bankroll * f`,
/// `half = full / 2`) hold exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll(Decimal);

impl Bankroll {
    /// Create a bankroll with domain invariant validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBankroll` if `amount <= 0`.
    pub fn try_new(amount: Decimal) -> Result<Self, DomainError> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::InvalidBankroll);
        }
        Ok(Self(amount))
    }

    /// Get the bankroll amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for Bankroll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
