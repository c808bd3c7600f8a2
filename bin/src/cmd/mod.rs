//! CLI subcommand modules.
//!
//! This module contains the implementations for all smartbeta CLI subcommands.

use anyhow::Result;
use smartbeta_traits::RiskProfile;

pub(crate) mod assess;
pub(crate) mod factors;
pub(crate) mod narrate;
pub(crate) mod rank;
pub(crate) mod strategies;

/// Print a boxed section title.
pub(crate) fn banner(title: &str) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{title:^62}║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
}

/// Parse a profile name given on the command line.
pub(crate) fn parse_profile(name: &str) -> Result<RiskProfile> {
    name.parse::<RiskProfile>().map_err(|e| {
        anyhow::anyhow!("{e}. Expected one of: conservative, moderate, aggressive")
    })
}
