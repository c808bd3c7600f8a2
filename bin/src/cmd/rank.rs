//! Rank command implementation.

use super::{banner, parse_profile};
use crate::data::{self, UniverseSource};
use anyhow::{Result, bail};
use smartbeta_assess::{Answers, assess};
use smartbeta_rank::{ScoredRecommendation, rank};
use smartbeta_traits::RiskProfile;
use std::path::Path;

/// Rank a universe and print the recommendations.
pub(crate) fn show_ranking(
    profile: Option<&str>,
    answers: &[u8],
    limit: usize,
    catalog: Option<&Path>,
    source: &UniverseSource,
    format: &str,
) -> Result<()> {
    if format != "text" && format != "json" {
        bail!("Unknown format '{format}'. Use 'text' or 'json'.");
    }

    let profile = resolve_profile(profile, answers)?;
    let catalog = data::load_catalog(catalog)?;
    let universe = data::load_universe(source)?;

    let ranked = rank(universe.stocks(), catalog.strategies(), profile, limit)?;

    if format == "json" {
        let json = serde_json::to_string_pretty(&ranked)?;
        println!("{json}");
        return Ok(());
    }

    banner("Smart Beta Ranking");
    println!("Profile:   {profile}");
    println!("Universe:  {}", source.describe());
    println!("Limit:     {limit}");
    println!();
    print_table(&ranked);

    Ok(())
}

/// An explicit profile, or the one implied by questionnaire answers.
pub(crate) fn resolve_profile(profile: Option<&str>, answers: &[u8]) -> Result<RiskProfile> {
    match profile {
        Some(name) => parse_profile(name),
        None => Ok(assess(&Answers::from_points(answers)?)?.profile),
    }
}

pub(crate) fn print_table(ranked: &[ScoredRecommendation<'_>]) {
    if ranked.is_empty() {
        println!("No recommendations: no strategy matches this profile or the universe is empty.\n");
        return;
    }

    println!(
        "{:>4}  {:8} {:20} {:18} {:>7}  {:>6} {:>6} {:>6}",
        "Rank", "Symbol", "Name", "Strategy", "Score", "ROE%", "P/E", "Vol%"
    );
    println!("{}", "-".repeat(86));
    for (i, rec) in ranked.iter().enumerate() {
        let stock = rec.stock;
        println!(
            "{:>4}  {:8} {:20} {:18} {:>7.2}  {:>6.1} {:>6.1} {:>6.1}",
            i + 1,
            stock.symbol,
            truncate(&stock.name, 20),
            rec.strategy,
            rec.score,
            stock.roe,
            stock.pe_ratio,
            stock.volatility
        );
    }
    println!();
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
