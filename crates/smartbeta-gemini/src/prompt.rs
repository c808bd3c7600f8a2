//! Prompt assembly for narrative recommendations.

use std::fmt::Write as _;

use smartbeta_assess::InvestorProfile;
use smartbeta_rank::ScoredRecommendation;
use smartbeta_traits::Date;

use crate::TechnicalSnapshot;

/// Everything the narrative is written from.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeRequest<'a> {
    /// The investor being advised.
    pub investor: &'a InvestorProfile,
    /// Shortlisted technical snapshots, strongest first.
    pub technicals: &'a [TechnicalSnapshot],
    /// Smart beta ranking for the investor's profile.
    pub recommendations: &'a [ScoredRecommendation<'a>],
    /// Date the analysis refers to.
    pub as_of: Date,
}

/// Render the prompt text for a narrative request.
#[must_use]
pub fn build_prompt(request: &NarrativeRequest<'_>) -> String {
    let investor = request.investor;
    let mut prompt = String::with_capacity(4096);

    let _ = writeln!(
        prompt,
        "You are an Islamic finance specialist managing a Shariah-compliant equity fund. \
         Review the following KMI-30 constituents for a {} investor as of {}.",
        investor.risk_profile, request.as_of
    );

    prompt.push_str("\nInvestor profile:\n");
    let _ = writeln!(prompt, "- Risk profile: {} ({} points)", investor.risk_profile, investor.total_points);
    let _ = writeln!(prompt, "- Goal: {}", investor.goal);
    let _ = writeln!(prompt, "- Horizon: {}", investor.horizon);
    let _ = writeln!(prompt, "- Risk tolerance: {}", investor.risk_tolerance);
    let _ = writeln!(prompt, "- Experience: {}", investor.experience);
    let _ = writeln!(prompt, "- Capacity: {}", investor.capacity);

    let _ = writeln!(prompt, "\nTechnical shortlist ({} stocks):", request.technicals.len());
    if request.technicals.is_empty() {
        prompt.push_str("No stock currently carries a rating suited to this profile.\n");
    }
    for snapshot in request.technicals {
        let _ = writeln!(
            prompt,
            "- {}: price {}, rating {}, RSI {}, MACD {} (signal {}), ADX {}, volume {}",
            snapshot.ticker,
            indicator(snapshot.price),
            snapshot.rating.map_or("N/A", |r| r.as_str()),
            indicator(snapshot.rsi),
            indicator(snapshot.macd),
            indicator(snapshot.macd_signal),
            indicator(snapshot.adx),
            indicator(snapshot.volume),
        );
    }

    let _ = writeln!(
        prompt,
        "\nSmart beta ranking ({} stocks, composite score 0-100):",
        request.recommendations.len()
    );
    for (i, rec) in request.recommendations.iter().enumerate() {
        let stock = rec.stock;
        let _ = writeln!(
            prompt,
            "{}. {} ({}): {:.1} via {} | ROE {:.1}%, P/E {:.1}, P/B {:.2}, growth {:.1}%, momentum {:.1}%, volatility {:.1}%",
            i + 1,
            stock.symbol,
            stock.name,
            rec.score,
            rec.strategy,
            stock.roe,
            stock.pe_ratio,
            stock.pb_ratio,
            stock.revenue_growth,
            stock.momentum,
            stock.volatility,
        );
    }

    prompt.push_str(GUIDELINES);
    prompt
}

fn indicator(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"))
}

const GUIDELINES: &str = "
Answer in English, then give the same advice in Urdu. Apply these rules:

Shariah screening
- Exclude businesses in prohibited activities.
- Debt to total assets and interest-bearing cash plus securities to total assets must each stay below 33%.
- Non-permissible income must stay below 5% of revenue.

Factor view
- Value: low P/E or P/B. Quality: high ROE and margins with low leverage.
- Momentum: persistent recent price strength. Low volatility: small price swings or low beta.
- Size: take market capitalisation into account.

Portfolio construction
- Spread holdings across sectors and cap any single position.
- Weigh market cap, P/E, dividend yield, ROE, beta and volume.
- Start from factor weights of value 30%, quality 30%, momentum 20%, low volatility 20%.

Rebalancing
- Review quarterly, and earlier when a weight drifts more than 10% from target, a holding loses compliance, or its factor scores move materially.
- Account for transaction costs.

Structure the reply as:
1. Market overview
2. Shariah compliance check
3. Three stock picks, each with factor analysis, technical reading, risk assessment and suggested weight
4. Diversification plan
5. Rebalancing plan
6. Risk management advice
";
