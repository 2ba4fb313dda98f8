//! Kelly criterion stake evaluation.
//!
//! The Kelly criterion sizes a bet to maximize long-run logarithmic bankroll
//! growth:
//!
//! ```text
//! f* = (b*p - q) / b
//! ```
//!
//! where `b` is the net odds (profit multiple per unit staked), `p` the
//! estimated win probability, and `q = 1 - p`. A negative `f*` means the bet
//! has no edge; it is clamped to zero rather than interpreted as a lay.
//!
//! [`evaluate`] is the whole core of this crate: a single-pass, synchronous,
//! side-effect-free function from validated inputs to a recommendation. The
//! presentation layer re-invokes it on every input change; no memoization is
//! needed because each call is cheap and deterministic.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::DomainError;
use super::stake::{StakeForm, StakeInput};

/// A stake sizing recommendation derived from one [`StakeInput`].
///
/// All fields are computed in [`evaluate`]; there is no other constructor.
/// Monetary fields satisfy `full_stake = bankroll * kelly_fraction` and
/// `half_stake = full_stake / 2` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StakeRecommendation {
    kelly_fraction: Decimal,
    full_stake: Decimal,
    half_stake: Decimal,
    implied_probability: Decimal,
    net_odds: Decimal,
    edge: Decimal,
    positive_edge: bool,
}

impl StakeRecommendation {
    /// Get the clamped Kelly fraction `f* = max(0, (b*p - q) / b)`.
    #[must_use]
    pub const fn kelly_fraction(&self) -> Decimal {
        self.kelly_fraction
    }

    /// Get the full Kelly stake (`bankroll * f*`).
    #[must_use]
    pub const fn full_stake(&self) -> Decimal {
        self.full_stake
    }

    /// Get the half Kelly stake (`full_stake / 2`).
    #[must_use]
    pub const fn half_stake(&self) -> Decimal {
        self.half_stake
    }

    /// Get the market's implied probability in percent.
    #[must_use]
    pub const fn implied_probability(&self) -> Decimal {
        self.implied_probability
    }

    /// Get the net odds `b` used in the formula.
    #[must_use]
    pub const fn net_odds(&self) -> Decimal {
        self.net_odds
    }

    /// Get the edge in percentage points (estimate minus implied).
    #[must_use]
    pub const fn edge(&self) -> Decimal {
        self.edge
    }

    /// Whether the bet has a positive edge (`edge > 0` and `f* > 0`).
    #[must_use]
    pub const fn positive_edge(&self) -> bool {
        self.positive_edge
    }

    /// Full stake for display: zero whenever the edge is not positive.
    ///
    /// Rendering contract for presentation layers; the raw value stays
    /// available through [`Self::full_stake`].
    #[must_use]
    pub fn display_full_stake(&self) -> Decimal {
        if self.positive_edge {
            self.full_stake
        } else {
            Decimal::ZERO
        }
    }

    /// Half stake for display: zero whenever the edge is not positive.
    #[must_use]
    pub fn display_half_stake(&self) -> Decimal {
        if self.positive_edge {
            self.half_stake
        } else {
            Decimal::ZERO
        }
    }
}

/// Evaluate a validated stake input into a recommendation.
///
/// # Errors
///
/// Returns `DomainError::InvalidOdds` when the odds quotation does not
/// normalize (decimal odds at or below 1.0, or non-positive net odds).
pub fn evaluate(input: &StakeInput) -> Result<StakeRecommendation, DomainError> {
    let quote = input.odds().quote()?;

    let p = input.win_probability().fraction();
    let q = input.win_probability().complement();
    let b = quote.net();

    let raw_fraction = (b * p - q) / b;
    let kelly_fraction = raw_fraction.max(Decimal::ZERO);

    let full_stake = input.bankroll().amount() * kelly_fraction;
    let half_stake = full_stake / Decimal::TWO;

    let edge = input.win_probability().percent() - quote.implied_probability();
    let positive_edge = edge > Decimal::ZERO && kelly_fraction > Decimal::ZERO;

    Ok(StakeRecommendation {
        kelly_fraction,
        full_stake,
        half_stake,
        implied_probability: quote.implied_probability(),
        net_odds: b,
        edge,
        positive_edge,
    })
}

/// Parse and evaluate raw form fields in one call.
///
/// # Errors
///
/// Returns the `DomainError` for the first invalid field, or an odds
/// normalization failure.
pub fn evaluate_form(form: &StakeForm) -> Result<StakeRecommendation, DomainError> {
    evaluate(&form.parse()?)
}
