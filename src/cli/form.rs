//! Interactive stake form.
//!
//! The terminal rendition of the calculator form: prompt for each field,
//! evaluate, render the analysis, and offer to adjust. Every pass re-runs
//! the evaluator from scratch; there is no cached state beyond the previous
//! field values used as prompt defaults.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tracing::debug;

use crate::config::Config;
use crate::domain::kelly::evaluate_form;
use crate::domain::odds::OddsFormat;
use crate::domain::stake::StakeForm;
use crate::error::{ConfigError, Result};

use super::command::FormArgs;
use super::{banner, diagnostic, output, stake};

/// Run the interactive form.
pub fn execute(args: &FormArgs) -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "`stakelord form` is interactive; use `stakelord stake --json` for scripting"
                .to_string(),
        }
        .into());
    }

    let config = Config::load_or_default(&args.config)?;
    config.init_logging();

    if !args.no_banner && !output::is_quiet() {
        banner::print_banner();
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::note("Kelly criterion calculator. Size your stake from the edge.");

    let theme = ColorfulTheme::default();
    let defaults = &config.defaults;
    let mut form = StakeForm {
        bankroll: defaults.bankroll.to_string(),
        odds: defaults.odds.to_string(),
        odds_format: defaults.odds_format,
        win_probability: defaults.win_probability.to_string(),
    };

    loop {
        form = prompt_pass(&theme, &form)?;

        debug!(odds = %form.odds, format = %form.odds_format, "form pass complete");

        match evaluate_form(&form) {
            Ok(rec) => stake::render_analysis(&rec),
            Err(err) => {
                println!();
                output::error(&err.to_string());
                if let Some(help) = diagnostic::help_for(&err) {
                    output::hint(&help);
                }
            }
        }

        println!();
        let again = Confirm::with_theme(&theme)
            .with_prompt("Adjust inputs?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }

    Ok(())
}

/// Prompt for one complete set of form fields.
fn prompt_pass(theme: &ColorfulTheme, previous: &StakeForm) -> Result<StakeForm> {
    output::section("Inputs");

    let bankroll: String = Input::with_theme(theme)
        .with_prompt("Total bankroll ($)")
        .default(previous.bankroll.clone())
        .interact_text()?;

    let formats = &["American (+/-)", "Decimal"];
    let selected = Select::with_theme(theme)
        .with_prompt("Odds format")
        .items(formats)
        .default(match previous.odds_format {
            OddsFormat::American => 0,
            OddsFormat::Decimal => 1,
        })
        .interact()?;
    let odds_format = if selected == 0 {
        OddsFormat::American
    } else {
        OddsFormat::Decimal
    };

    let odds: String = Input::with_theme(theme)
        .with_prompt("Odds")
        .default(previous.odds.clone())
        .interact_text()?;

    let win_probability: String = Input::with_theme(theme)
        .with_prompt("Your win probability (%)")
        .default(previous.win_probability.clone())
        .interact_text()?;

    Ok(StakeForm {
        bankroll,
        odds,
        odds_format,
        win_probability,
    })
}
