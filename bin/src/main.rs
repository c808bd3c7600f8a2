//! smartbeta CLI binary.
//!
//! Ranks a stock universe for an investor's risk profile and, optionally,
//! asks Gemini for a written recommendation.

mod cmd;
mod data;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "smartbeta")]
#[command(about = "Smart beta stock recommendations by risk profile", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the stock universe comes from.
#[derive(Args, Debug, Clone)]
struct UniverseArgs {
    /// Universe file (.csv or .json)
    #[arg(short, long, conflicts_with = "mock")]
    universe: Option<PathBuf>,

    /// Number of randomly generated stocks when no universe file is given
    #[arg(long, default_value = "20")]
    mock: usize,

    /// Seed for the generated universe
    #[arg(long, default_value = "42")]
    seed: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// List available factors
    Factors {
        /// Show inputs and formulas
        #[arg(short, long)]
        verbose: bool,
    },

    /// List strategies in the catalog
    Strategies {
        /// Only strategies for this risk profile
        #[arg(short, long)]
        profile: Option<String>,

        /// Strategy catalog file (JSON)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Score the risk questionnaire
    Assess {
        /// Points for questions 1-5, each 1-4
        #[arg(short, long, value_delimiter = ',', required = true)]
        answers: Vec<u8>,
    },

    /// Rank a universe for a risk profile
    Rank {
        /// Risk profile (conservative, moderate, aggressive)
        #[arg(short, long, required_unless_present = "answers", conflicts_with = "answers")]
        profile: Option<String>,

        /// Questionnaire points instead of an explicit profile
        #[arg(short, long, value_delimiter = ',')]
        answers: Vec<u8>,

        /// Maximum number of recommendations
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Strategy catalog file (JSON)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        #[command(flatten)]
        universe: UniverseArgs,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Build a narrative recommendation with Gemini
    Narrate {
        /// Questionnaire points for questions 1-5
        #[arg(short, long, value_delimiter = ',', required = true)]
        answers: Vec<u8>,

        /// Technical indicator snapshots (JSON array)
        #[arg(short, long)]
        technicals: Option<PathBuf>,

        /// Number of technical snapshots to include
        #[arg(short, long, default_value = "5")]
        shortlist: usize,

        /// Maximum number of smart beta recommendations
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Strategy catalog file (JSON)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        #[command(flatten)]
        universe: UniverseArgs,

        /// Print the prompt instead of calling Gemini
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Factors { verbose } => {
            cmd::factors::list_factors(verbose);
        }
        Commands::Strategies { profile, catalog } => {
            cmd::strategies::list_strategies(profile.as_deref(), catalog.as_deref())?;
        }
        Commands::Assess { answers } => {
            cmd::assess::show_assessment(&answers)?;
        }
        Commands::Rank {
            profile,
            answers,
            limit,
            catalog,
            universe,
            format,
        } => {
            let source = universe.source();
            cmd::rank::show_ranking(
                profile.as_deref(),
                &answers,
                limit,
                catalog.as_deref(),
                &source,
                &format,
            )?;
        }
        Commands::Narrate {
            answers,
            technicals,
            shortlist,
            limit,
            catalog,
            universe,
            dry_run,
        } => {
            let options = cmd::narrate::NarrateOptions {
                shortlist,
                limit,
                catalog,
                technicals,
                universe: universe.source(),
                dry_run,
            };
            cmd::narrate::narrate(&answers, &options).await?;
        }
    }

    Ok(())
}

impl UniverseArgs {
    fn source(&self) -> data::UniverseSource {
        match &self.universe {
            Some(path) => data::UniverseSource::File(path.clone()),
            None => data::UniverseSource::Mock {
                count: self.mock,
                seed: self.seed,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rank_requires_profile_or_answers() {
        assert!(Cli::try_parse_from(["smartbeta", "rank"]).is_err());
        assert!(
            Cli::try_parse_from(["smartbeta", "rank", "-p", "moderate", "-a", "1,1,1,1,1"])
                .is_err()
        );

        let cli = Cli::try_parse_from(["smartbeta", "rank", "--answers", "4,4,3,3,2"]).unwrap();
        match cli.command {
            Commands::Rank { answers, limit, .. } => {
                assert_eq!(answers, vec![4, 4, 3, 3, 2]);
                assert_eq!(limit, 10);
            }
            _ => panic!("expected rank"),
        }
    }

    #[test]
    fn test_universe_source() {
        let cli = Cli::try_parse_from(["smartbeta", "rank", "-p", "aggressive", "--mock", "5"])
            .unwrap();
        let Commands::Rank { universe, .. } = cli.command else {
            panic!("expected rank");
        };
        assert!(matches!(
            universe.source(),
            data::UniverseSource::Mock { count: 5, seed: 42 }
        ));
    }
}
