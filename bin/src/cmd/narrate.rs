//! Narrate command implementation.

use super::banner;
use crate::data::{self, UniverseSource};
use anyhow::Result;
use chrono::Utc;
use smartbeta_assess::{Answers, InvestorProfile};
use smartbeta_gemini::{GeminiClient, NarrativeRequest, build_prompt, shortlist};
use smartbeta_rank::rank;
use std::path::PathBuf;
use tracing::info;

/// Options for the narrate command.
#[derive(Debug, Clone)]
pub(crate) struct NarrateOptions {
    pub(crate) shortlist: usize,
    pub(crate) limit: usize,
    pub(crate) catalog: Option<PathBuf>,
    pub(crate) technicals: Option<PathBuf>,
    pub(crate) universe: UniverseSource,
    pub(crate) dry_run: bool,
}

/// Build the narrative prompt and either print it or send it to Gemini.
pub(crate) async fn narrate(points: &[u8], options: &NarrateOptions) -> Result<()> {
    let prompt = prepare_prompt(points, options)?;

    if options.dry_run {
        println!("{prompt}");
        return Ok(());
    }

    let client = GeminiClient::from_env()?;
    info!(model = %client.config().model, "requesting narrative");

    banner("AI Recommendation");
    let text = client.generate(&prompt).await?;
    println!("{text}");

    Ok(())
}

fn prepare_prompt(points: &[u8], options: &NarrateOptions) -> Result<String> {
    let investor = InvestorProfile::from_answers(&Answers::from_points(points)?)?;
    let catalog = data::load_catalog(options.catalog.as_deref())?;
    let universe = data::load_universe(&options.universe)?;
    let ranked = rank(
        universe.stocks(),
        catalog.strategies(),
        investor.risk_profile,
        options.limit,
    )?;

    let technicals = match options.technicals.as_deref() {
        Some(path) => shortlist(
            &data::load_technicals(Some(path))?,
            investor.risk_profile,
            options.shortlist,
        ),
        None => data::load_technicals(None)?
            .into_iter()
            .take(options.shortlist)
            .collect(),
    };

    Ok(build_prompt(&NarrativeRequest {
        investor: &investor,
        technicals: &technicals,
        recommendations: &ranked,
        as_of: Utc::now().date_naive(),
    }))
}
