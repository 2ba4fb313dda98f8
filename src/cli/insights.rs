//! Static market insights panel.
//!
//! A placeholder: no live market data is wired in. The panel renders a
//! canned sample so the surrounding layout can be exercised.

use crate::error::Result;

use super::output;

/// Render the insights panel.
pub fn execute() -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section("AI Market Insights");
    output::note("Identifying market inefficiency.");
    println!();
    println!("  {}", output::highlight("Sample Prediction"));
    output::note("This demo runs simulated market analysis based on bookmaker disagreement.");
    println!();
    output::hint("live market feeds are not connected; insights are illustrative only");

    Ok(())
}
