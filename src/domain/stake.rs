//! Stake inputs: raw form fields and their validated form.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::{DomainError, OddsError};
use super::money::Bankroll;
use super::odds::{Odds, OddsFormat};
use super::probability::WinProbability;

/// Raw text fields exactly as received from a form or command line.
///
/// Fields stay as strings until [`StakeForm::parse`] so that an empty or
/// malformed entry is a validation error rather than being coerced to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeForm {
    /// Total available betting funds.
    pub bankroll: String,
    /// Odds quotation in the selected format.
    pub odds: String,
    /// Quotation style for the odds field.
    pub odds_format: OddsFormat,
    /// Estimated chance of winning, in percent.
    pub win_probability: String,
}

impl StakeForm {
    /// Validate the raw fields into a typed [`StakeInput`].
    ///
    /// Fields are checked in a fixed order: win probability, then bankroll,
    /// then odds. The first failure wins; nothing is partially constructed.
    ///
    /// # Errors
    ///
    /// Returns the `DomainError` for the first invalid field.
    pub fn parse(&self) -> Result<StakeInput, DomainError> {
        let probability = parse_field(&self.win_probability)
            .ok_or(DomainError::InvalidProbability)
            .and_then(WinProbability::try_new)?;

        let bankroll = parse_field(&self.bankroll)
            .ok_or(DomainError::InvalidBankroll)
            .and_then(Bankroll::try_new)?;

        let odds_value = parse_field(&self.odds).ok_or(OddsError::NotANumber)?;
        let odds = Odds::new(self.odds_format, odds_value);

        Ok(StakeInput::new(bankroll, odds, probability))
    }
}

/// Parse one numeric field, tolerating surrounding whitespace and an
/// explicit leading `+` (moneyline quoting convention).
fn parse_field(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if unsigned.is_empty() {
        return None;
    }
    Decimal::from_str(unsigned).ok()
}

/// Validated inputs for one stake evaluation.
///
/// Constructed fresh per evaluation and immutable; the evaluator never
/// mutates or caches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeInput {
    bankroll: Bankroll,
    odds: Odds,
    win_probability: WinProbability,
}

impl StakeInput {
    /// Create a stake input from already-validated parts.
    #[must_use]
    pub const fn new(bankroll: Bankroll, odds: Odds, win_probability: WinProbability) -> Self {
        Self {
            bankroll,
            odds,
            win_probability,
        }
    }

    /// Get the bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> Bankroll {
        self.bankroll
    }

    /// Get the odds quotation.
    #[must_use]
    pub const fn odds(&self) -> Odds {
        self.odds
    }

    /// Get the win probability estimate.
    #[must_use]
    pub const fn win_probability(&self) -> WinProbability {
        self.win_probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn form(bankroll: &str, odds: &str, format: OddsFormat, probability: &str) -> StakeForm {
        StakeForm {
            bankroll: bankroll.to_string(),
            odds: odds.to_string(),
            odds_format: format,
            win_probability: probability.to_string(),
        }
    }

    #[test]
    fn parses_valid_american_form() {
        let input = form("1000", "+200", OddsFormat::American, "55")
            .parse()
            .unwrap();

        assert_eq!(input.bankroll().amount(), dec!(1000));
        assert_eq!(input.odds().value(), dec!(200));
        assert_eq!(input.odds().format(), OddsFormat::American);
        assert_eq!(input.win_probability().percent(), dec!(55));
    }

    #[test]
    fn strips_leading_plus_from_moneyline() {
        let input = form("500", "+150", OddsFormat::American, "50")
            .parse()
            .unwrap();
        assert_eq!(input.odds().value(), dec!(150));
    }

    #[test]
    fn keeps_negative_moneylines() {
        let input = form("500", "-150", OddsFormat::American, "50")
            .parse()
            .unwrap();
        assert_eq!(input.odds().value(), dec!(-150));
    }

    #[test]
    fn empty_probability_is_invalid() {
        assert_eq!(
            form("1000", "200", OddsFormat::American, "").parse(),
            Err(DomainError::InvalidProbability)
        );
    }

    #[test]
    fn garbage_probability_is_invalid() {
        assert_eq!(
            form("1000", "200", OddsFormat::American, "fifty").parse(),
            Err(DomainError::InvalidProbability)
        );
    }

    #[test]
    fn out_of_range_probability_is_invalid() {
        assert_eq!(
            form("1000", "200", OddsFormat::American, "101").parse(),
            Err(DomainError::InvalidProbability)
        );
    }

    #[test]
    fn non_positive_bankroll_is_invalid() {
        assert_eq!(
            form("0", "200", OddsFormat::American, "55").parse(),
            Err(DomainError::InvalidBankroll)
        );
    }

    #[test]
    fn garbage_odds_are_invalid() {
        assert_eq!(
            form("1000", "evens", OddsFormat::American, "55").parse(),
            Err(DomainError::InvalidOdds(OddsError::NotANumber))
        );
    }

    #[test]
    fn probability_is_checked_before_bankroll_and_odds() {
        // Everything is wrong; the probability error must win
        assert_eq!(
            form("", "", OddsFormat::American, "150").parse(),
            Err(DomainError::InvalidProbability)
        );
    }

    #[test]
    fn bankroll_is_checked_before_odds() {
        assert_eq!(
            form("-10", "", OddsFormat::American, "55").parse(),
            Err(DomainError::InvalidBankroll)
        );
    }

    #[test]
    fn whitespace_is_tolerated() {
        let input = form(" 1000 ", " +200 ", OddsFormat::American, " 55 ")
            .parse()
            .unwrap();
        assert_eq!(input.bankroll().amount(), dec!(1000));
    }
}
