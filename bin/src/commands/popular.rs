//! Popular command implementation.

use anyhow::Result;
use ytincome_lib::POPULAR_CHANNELS;

/// List well-known channels that make good first lookups.
pub(crate) fn list_popular() -> Result<()> {
    println!("{:<15} {:<18} {:<15}", "NAME", "HANDLE", "CATEGORY");
    println!("{}", "-".repeat(48));

    for channel in POPULAR_CHANNELS {
        println!(
            "{:<15} {:<18} {:<15}",
            channel.name, channel.handle, channel.category
        );
    }

    if let Some(first) = POPULAR_CHANNELS.first() {
        println!("\nTry: ytincome estimate {}", first.handle);
    }
    Ok(())
}
