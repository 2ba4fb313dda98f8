//! Miette-based error diagnostics for beautiful CLI errors.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::domain::error::{DomainError, OddsError};
use crate::error::{ConfigError, Error};

use super::output;

/// Stake input error with help text.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(stakelord::input))]
pub struct InputError {
    pub message: String,

    #[help]
    pub help: Option<String>,
}

/// Configuration error with source location.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(stakelord::config))]
pub struct ConfigParseError {
    pub message: String,

    #[source_code]
    pub src: String,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

/// Render a top-level error once.
///
/// The single rendering point for `main`: domain errors get help text,
/// config parse errors get a source-span label, and JSON mode degrades to
/// structured error lines.
pub fn report(err: &Error) {
    if output::is_json() {
        output::error(&err.to_string());
        return;
    }

    match err {
        Error::Domain(domain) => emit(InputError {
            message: domain.to_string(),
            help: help_for(domain),
        }),
        Error::Config(ConfigError::Parse { source, src }) => match source.span() {
            Some(range) => emit(ConfigParseError {
                message: source.message().to_string(),
                src: src.clone(),
                span: (range.start, range.end.saturating_sub(range.start)).into(),
                help: None,
            }),
            None => output::error(&err.to_string()),
        },
        other => output::error(&other.to_string()),
    }
}

/// Print a diagnostic with miette's fancy renderer.
fn emit(diag: impl Diagnostic + Send + Sync + 'static) {
    eprintln!("{:?}", miette::Report::new(diag));
}

/// Help text shown under each input validation failure.
pub(crate) fn help_for(err: &DomainError) -> Option<String> {
    let help = match err {
        DomainError::InvalidProbability => {
            "enter your estimated chance of winning as a percentage, e.g. 55"
        }
        DomainError::InvalidBankroll => "enter the total funds you can stake, e.g. 1000",
        DomainError::InvalidOdds(OddsError::NotANumber) => {
            "quote moneyline odds like +200 or -150, decimal odds like 2.50"
        }
        DomainError::InvalidOdds(OddsError::NotAboveEven) => {
            "decimal odds include the returned stake, so 1.0 or less pays nothing"
        }
        DomainError::InvalidOdds(OddsError::NonPositiveNet) => {
            "the quote implies no profit on a win; check the odds format"
        }
    };
    Some(help.to_string())
}
