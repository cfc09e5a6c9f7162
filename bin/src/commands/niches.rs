//! Niches command implementation.

use anyhow::Result;
use ytincome_lib::{Niche, format_currency};

/// List the rate presets of every content niche.
pub(crate) fn list_niches() -> Result<()> {
    println!("{:<15} {:>8} {:>12}", "NICHE", "CPM", "MONETIZED");
    println!("{}", "-".repeat(37));

    for niche in Niche::all() {
        let rates = niche.rates();
        println!(
            "{:<15} {:>8} {:>11.0}%",
            niche.as_str(),
            format_currency(rates.cost_per_thousand_views),
            rates.monetized_percent()
        );
    }

    println!("\nUse --niche NAME, or --cpm and --monetization for custom rates.");
    Ok(())
}
