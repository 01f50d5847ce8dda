//! List categories command implementation.

use anyhow::Result;
use class_order_core::{RankTable, ALL_CATEGORIES};

use crate::config_resolver::ConfigSource;

/// Runs the list-categories command.
///
/// Prints the category vocabulary together with the weights of the
/// table the resolved configuration would activate. Categories sharing
/// a weight have no ordering constraint between them.
pub fn run(source: &ConfigSource) -> Result<()> {
    let config = super::check::load_config(source)?;
    let (table, warnings) = RankTable::build(&config.order);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let mode = if config.order.custom_order.is_some() {
        "custom"
    } else if config.order.strict_mode {
        "strict"
    } else {
        "relaxed"
    };

    println!("Active ordering ({mode}):\n");
    println!("{:<6} Category", "Rank");
    println!("{}", "-".repeat(40));

    for (tag, rank) in table.entries() {
        println!("{rank:<6} {tag}");
    }

    let unranked: Vec<&str> = ALL_CATEGORIES
        .iter()
        .filter(|tag| table.rank(**tag).is_none())
        .map(|tag| tag.name())
        .collect();

    if !unranked.is_empty() {
        println!("\nExcluded from ordering checks:");
        for name in unranked {
            println!("  {name}");
        }
    }

    Ok(())
}
