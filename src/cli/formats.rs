//! Odds format listing and explanation.

use tabled::{Table, Tabled};

use crate::error::Result;

use super::output;

#[derive(Tabled)]
struct FormatRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Quote")]
    quote: &'static str,
    #[tabled(rename = "Example")]
    example: &'static str,
    #[tabled(rename = "Decimal")]
    decimal: &'static str,
    #[tabled(rename = "Implied")]
    implied: &'static str,
}

/// List supported odds formats.
pub fn list() -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Supported odds formats");
    println!();

    let formats = vec![
        FormatRow {
            name: "american",
            quote: "+/- moneyline",
            example: "+200",
            decimal: "3.00",
            implied: "33.33%",
        },
        FormatRow {
            name: "decimal",
            quote: "total return per unit",
            example: "2.50",
            decimal: "2.50",
            implied: "40.00%",
        },
    ];

    let table = Table::new(formats).to_string();
    for line in table.lines() {
        println!("  {}", line);
    }

    println!();
    println!(
        "  Run {} for details",
        output::highlight("stakelord formats explain <name>")
    );
    println!();

    Ok(())
}

/// Explain a specific odds format.
pub fn explain(name: &str) -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));

    match name {
        "american" => explain_american(),
        "decimal" => explain_decimal(),
        _ => {
            output::error(&format!("Unknown format: {}", name));
            println!();
            println!("  Available: american, decimal");
            return Ok(());
        }
    }

    Ok(())
}

fn explain_american() {
    output::section("american");
    println!();
    println!("  Moneyline quotes profit relative to a 100-unit reference:");
    println!("    +200 wins $200 profit per $100 staked");
    println!("    -150 requires $150 staked to win $100 profit");
    println!();
    println!("  Normalization:");
    println!("    +200  ->  decimal 3.00, net odds b = 2.00, implied 33.33%");
    println!("    -150  ->  decimal 1.67, net odds b = 0.67, implied 60.00%");
    println!("       0  ->  treated as even money (decimal 2.00, implied 50%)");
    println!();
}

fn explain_decimal() {
    output::section("decimal");
    println!();
    println!("  Decimal odds quote the total return per unit staked,");
    println!("  stake included. They must be greater than 1.00.");
    println!();
    println!("  Normalization:");
    println!("    2.50  ->  net odds b = 1.50, implied 40.00%");
    println!("    1.00  ->  rejected (returns only the stake)");
    println!();
}
