//! Handler for the `stake` command.

use rust_decimal::Decimal;
use serde_json::json;
use tracing::debug;

use crate::config::Config;
use crate::domain::kelly::{evaluate_form, StakeRecommendation};
use crate::domain::stake::StakeForm;
use crate::error::Result;

use super::command::StakeArgs;
use super::output;

/// Execute the stake command.
pub fn execute(args: &StakeArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    config.init_logging();

    let form = build_form(args, &config);

    debug!(
        bankroll = %form.bankroll,
        odds = %form.odds,
        format = %form.odds_format,
        win_probability = %form.win_probability,
        "evaluating stake form"
    );

    let rec = evaluate_form(&form)?;

    if output::is_json() {
        output::json_output(recommendation_json(&rec));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Bankroll", format!("${}", form.bankroll.trim()));
    output::field(
        "Odds",
        format!("{} ({})", form.odds, output::muted(form.odds_format)),
    );
    output::field("Win estimate", format!("{}%", form.win_probability));

    render_analysis(&rec);
    Ok(())
}

/// Merge CLI flags over the configured form defaults.
fn build_form(args: &StakeArgs, config: &Config) -> StakeForm {
    let defaults = &config.defaults;
    StakeForm {
        bankroll: args
            .bankroll
            .clone()
            .unwrap_or_else(|| defaults.bankroll.to_string()),
        odds: args.odds.clone().unwrap_or_else(|| defaults.odds.to_string()),
        odds_format: args.format.unwrap_or(defaults.odds_format),
        win_probability: args
            .win_probability
            .clone()
            .unwrap_or_else(|| defaults.win_probability.to_string()),
    }
}

/// Render the analysis panel for a recommendation.
///
/// Stakes follow the display contract: both print as $0.00 whenever the
/// edge is not positive.
pub fn render_analysis(rec: &StakeRecommendation) {
    output::section("Analysis");

    let edge = output::signed_percent(rec.edge());
    let edge_display = if rec.positive_edge() {
        output::positive(edge)
    } else {
        output::negative(edge)
    };
    output::field("Edge", edge_display);
    output::field("Implied prob", output::percent(rec.implied_probability()));
    output::field("Net odds (b)", format!("{:.2}", rec.net_odds().round_dp(2)));
    if output::verbosity() > 0 {
        output::field(
            "Kelly f*",
            format!("{:.4}", rec.kelly_fraction().round_dp(4)),
        );
    }

    output::section("Recommended stake");

    let full_note = if rec.positive_edge() {
        format!(
            "({} of bankroll)",
            output::percent(rec.kelly_fraction() * Decimal::ONE_HUNDRED)
        )
    } else {
        "(no positive edge found)".to_string()
    };
    output::field(
        "Full Kelly",
        format!(
            "{} {}",
            output::currency(rec.display_full_stake()),
            output::muted(full_note)
        ),
    );

    let half_note = if rec.positive_edge() {
        format!(
            "({} of bankroll)",
            output::percent(rec.kelly_fraction() / Decimal::TWO * Decimal::ONE_HUNDRED)
        )
    } else {
        "(conservative staking)".to_string()
    };
    output::field(
        "Half Kelly",
        format!(
            "{} {}",
            output::currency(rec.display_half_stake()),
            output::muted(half_note)
        ),
    );

    if !rec.positive_edge() {
        println!();
        output::warning("Expected value is negative. Kelly recommends no bet.");
    }
}

/// Build the machine-readable recommendation document.
fn recommendation_json(rec: &StakeRecommendation) -> serde_json::Value {
    json!({
        "type": "recommendation",
        "payload": {
            "kelly_fraction": rec.kelly_fraction(),
            "full_stake": rec.full_stake(),
            "half_stake": rec.half_stake(),
            "display_full_stake": rec.display_full_stake(),
            "display_half_stake": rec.display_half_stake(),
            "implied_probability": rec.implied_probability(),
            "net_odds": rec.net_odds(),
            "edge": rec.edge(),
            "positive_edge": rec.positive_edge(),
        }
    })
}
