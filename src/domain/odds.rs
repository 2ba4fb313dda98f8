//! Odds quotations and normalization.
//!
//! Sportsbooks quote the same price two ways:
//!
//! - **American** moneyline: `+200` pays 2-to-1 profit, `-150` requires
//!   risking 150 to win 100.
//! - **Decimal**: total return per unit staked, e.g. `3.00` returns the
//!   stake plus twice the stake in profit.
//!
//! [`Odds::quote`] normalizes either form into an [`OddsQuote`] carrying the
//! decimal odds, the implied probability (the market's break-even win rate if
//! it had zero margin), and the net odds `b = decimal - 1` the Kelly formula
//! works with.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{DomainError, OddsError};

/// Quotation style for an odds value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OddsFormat {
    /// American moneyline (+/-).
    #[default]
    American,
    /// Decimal (total return per unit staked).
    Decimal,
}

impl std::fmt::Display for OddsFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::American => write!(f, "american"),
            Self::Decimal => write!(f, "decimal"),
        }
    }
}

/// An odds value together with its quotation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Odds {
    format: OddsFormat,
    value: Decimal,
}

impl Odds {
    /// Create odds in the given format.
    #[must_use]
    pub const fn new(format: OddsFormat, value: Decimal) -> Self {
        Self { format, value }
    }

    /// Create American moneyline odds.
    #[must_use]
    pub const fn american(value: Decimal) -> Self {
        Self::new(OddsFormat::American, value)
    }

    /// Create decimal odds.
    #[must_use]
    pub const fn decimal(value: Decimal) -> Self {
        Self::new(OddsFormat::Decimal, value)
    }

    /// Get the quotation style.
    #[must_use]
    pub const fn format(&self) -> OddsFormat {
        self.format
    }

    /// Get the quoted value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// Normalize the quotation into decimal odds, implied probability, and
    /// net odds.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidOdds` when decimal-format odds are at or
    /// below 1.0, or when normalization yields non-positive net odds.
    pub fn quote(&self) -> Result<OddsQuote, DomainError> {
        let (decimal, implied) = match self.format {
            OddsFormat::American => american_to_quote(self.value),
            OddsFormat::Decimal => {
                if self.value <= Decimal::ONE {
                    return Err(OddsError::NotAboveEven.into());
                }
                (self.value, Decimal::ONE_HUNDRED / self.value)
            }
        };

        let net = decimal - Decimal::ONE;
        if net <= Decimal::ZERO {
            return Err(OddsError::NonPositiveNet.into());
        }

        Ok(OddsQuote {
            decimal,
            implied_probability: implied,
            net,
        })
    }
}

/// Convert an American moneyline value into (decimal odds, implied percent).
///
/// A zero moneyline is treated as even money.
fn american_to_quote(value: Decimal) -> (Decimal, Decimal) {
    if value > Decimal::ZERO {
        let decimal = value / Decimal::ONE_HUNDRED + Decimal::ONE;
        let implied = Decimal::ONE_HUNDRED / (value + Decimal::ONE_HUNDRED) * Decimal::ONE_HUNDRED;
        (decimal, implied)
    } else if value < Decimal::ZERO {
        let risk = -value;
        let decimal = Decimal::ONE_HUNDRED / risk + Decimal::ONE;
        let implied = risk / (risk + Decimal::ONE_HUNDRED) * Decimal::ONE_HUNDRED;
        (decimal, implied)
    } else {
        (Decimal::TWO, Decimal::from(50))
    }
}

/// A normalized odds quotation.
///
/// Produced by [`Odds::quote`]; all fields are derived and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OddsQuote {
    decimal: Decimal,
    implied_probability: Decimal,
    net: Decimal,
}

impl OddsQuote {
    /// Get the decimal odds (total return per unit staked).
    #[must_use]
    pub const fn decimal(&self) -> Decimal {
        self.decimal
    }

    /// Get the implied probability in percent.
    #[must_use]
    pub const fn implied_probability(&self) -> Decimal {
        self.implied_probability
    }

    /// Get the net odds `b = decimal - 1` (profit multiple per unit staked).
    #[must_use]
    pub const fn net(&self) -> Decimal {
        self.net
    }
}
