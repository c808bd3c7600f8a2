//! Strategies command implementation.

use super::{banner, parse_profile};
use crate::data;
use anyhow::Result;
use smartbeta_traits::RiskProfile;
use std::path::Path;

/// List catalog strategies, optionally for one profile.
pub(crate) fn list_strategies(profile: Option<&str>, catalog: Option<&Path>) -> Result<()> {
    banner("Strategy Catalog");

    let catalog = data::load_catalog(catalog)?;
    let profiles = match profile {
        Some(name) => vec![parse_profile(name)?],
        None => RiskProfile::ALL.to_vec(),
    };

    for profile in profiles {
        println!("{profile}:");
        println!("{}", "-".repeat(60));

        let mut any = false;
        for strategy in catalog.for_profile(profile) {
            any = true;
            let factors: Vec<&str> = strategy.factors.iter().map(|f| f.as_str()).collect();
            println!(
                "  {:18} {:>5.1}% return  {:>5.1}% vol  [{}]",
                strategy.name,
                strategy.expected_return,
                strategy.expected_volatility,
                factors.join(", ")
            );
            if !strategy.description.is_empty() {
                println!("  {:18} {}", "", strategy.description);
            }
        }
        if !any {
            println!("  (none)");
        }
        println!();
    }

    Ok(())
}
