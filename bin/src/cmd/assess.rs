//! Assess command implementation.

use super::banner;
use anyhow::Result;
use smartbeta_assess::{Answers, InvestorProfile, QUESTIONS};

/// Score questionnaire answers and describe the investor.
pub(crate) fn show_assessment(points: &[u8]) -> Result<()> {
    banner("Risk Assessment");

    let answers = Answers::from_points(points)?;
    let investor = InvestorProfile::from_answers(&answers)?;

    for question in &QUESTIONS {
        let chosen = answers
            .get(question.id)
            .and_then(|p| question.options.iter().find(|o| o.points == p));
        println!("  {}. {}", question.id, question.prompt);
        if let Some(option) = chosen {
            println!("     -> {} ({} pts)", option.label, option.points);
        }
    }

    println!();
    println!("Total points:    {}", investor.total_points);
    println!("Risk profile:    {}", investor.risk_profile);
    println!();
    println!("Goal:            {}", investor.goal);
    println!("Horizon:         {}", investor.horizon);
    println!("Risk tolerance:  {}", investor.risk_tolerance);
    println!("Experience:      {}", investor.experience);
    println!("Capacity:        {}", investor.capacity);
    println!();

    Ok(())
}
