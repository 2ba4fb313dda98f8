//! Win probability estimates.

use rust_decimal::Decimal;

use super::error::DomainError;

/// A bettor's estimated chance of winning, in percent.
///
/// Validated at construction to lie within [0, 100]. The Kelly evaluator
/// works with the fraction form (`p` and its complement `q = 1 - p`); the
/// percent form is kept for edge arithmetic and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinProbability(Decimal);

impl WinProbability {
    /// Create a win probability from a percent value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProbability` if `percent` is outside
    /// [0, 100].
    pub fn try_new(percent: Decimal) -> Result<Self, DomainError> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(DomainError::InvalidProbability);
        }
        Ok(Self(percent))
    }

    /// Get the probability in percent (0-100).
    #[must_use]
    pub const fn percent(&self) -> Decimal {
        self.0
    }

    /// Get the probability as a fraction `p` in [0, 1].
    #[must_use]
    pub fn fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// Get the losing fraction `q = 1 - p`.
    #[must_use]
    pub fn complement(&self) -> Decimal {
        Decimal::ONE - self.fraction()
    }
}

impl std::fmt::Display for WinProbability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accepts_values_within_range() {
        let p = WinProbability::try_new(dec!(55)).unwrap();
        assert_eq!(p.percent(), dec!(55));
        assert_eq!(p.fraction(), dec!(0.55));
        assert_eq!(p.complement(), dec!(0.45));
    }

    #[test]
    fn accepts_boundaries() {
        assert!(WinProbability::try_new(Decimal::ZERO).is_ok());
        assert!(WinProbability::try_new(dec!(100)).is_ok());
    }

    #[test]
    fn rejects_values_outside_range() {
        assert_eq!(
            WinProbability::try_new(dec!(-0.1)),
            Err(DomainError::InvalidProbability)
        );
        assert_eq!(
            WinProbability::try_new(dec!(100.1)),
            Err(DomainError::InvalidProbability)
        );
    }

    #[test]
    fn fraction_and_complement_sum_to_one() {
        let p = WinProbability::try_new(dec!(37.5)).unwrap();
        assert_eq!(p.fraction() + p.complement(), Decimal::ONE);
    }
}
