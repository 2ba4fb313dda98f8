//! Presentation-agnostic stake sizing logic.

pub mod error;
pub mod kelly;
pub mod money;
pub mod odds;
pub mod probability;
pub mod stake;

// Core domain types
pub use error::{DomainError, OddsError};
pub use kelly::{evaluate, evaluate_form, StakeRecommendation};
pub use money::{Bankroll, Stake};
pub use odds::{Odds, OddsFormat, OddsQuote};
pub use probability::WinProbability;
pub use stake::{StakeForm, StakeInput};
