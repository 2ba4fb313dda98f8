//! Stakelord - Kelly criterion stake sizing.
//!
//! This crate computes how much of a bankroll to stake on a bet, given an
//! odds quotation and the bettor's own win probability estimate, using the
//! Kelly criterion.
//!
//! # Architecture
//!
//! The calculation core is a pure function over validated inputs:
//!
//! - **`domain::odds`** - Odds normalization (American moneyline or decimal
//!   into decimal odds, implied probability, and net odds)
//! - **`domain::stake`** - Raw form fields and their validated form
//! - **`domain::kelly`** - The evaluator: `f* = (b*p - q) / b`, clamped at
//!   zero, with full- and half-Kelly stakes
//!
//! Everything else is presentation: the `cli` module renders
//! recommendations, runs the interactive form, and manages configuration.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files (form defaults,
//!   logging)
//! - [`domain`] - Validated input types, odds normalization, the evaluator
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line interface and output rendering
//!
//! # Example
//!
//! ```
//! use stakelord::domain::{evaluate_form, OddsFormat, StakeForm};
//!
//! let form = StakeForm {
//!     bankroll: "1000".into(),
//!     odds: "+200".into(),
//!     odds_format: OddsFormat::American,
//!     win_probability: "55".into(),
//! };
//!
//! let rec = evaluate_form(&form).unwrap();
//! assert!(rec.positive_edge());
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
