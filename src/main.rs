//! character-ter: character-level translation edit rate
//!
//! Command-line front end for scoring MT hypothesis files against reference
//! files with the CharacTER metric.

use anyhow::Result;
use character_ter::{
    cli,
    config::{BehaviorConfig, OutputConfig, ScoreConfig, ScorePaths, ScoringConfig},
    pipeline::{exit_codes, ReportFormat},
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "character-ter")]
#[command(version)]
#[command(about = "CharacTER: character-level translation edit rate", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Corpus scored successfully
    1  Hypothesis and reference files do not line up
    2  Error occurred

EXAMPLES:
    # Corpus mean on stdout
    character-ter score --hyp hyp.txt --ref ref.txt

    # Per-sentence scores as well
    character-ter score --hyp hyp.txt --ref ref.txt --per-sentence

    # Full JSON report to a file
    character-ter score --hyp hyp.txt --ref ref.txt -o json -O report.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Hypothesis file, one sentence per line
    #[arg(long = "hyp", value_name = "PATH")]
    hypothesis: PathBuf,

    /// Reference file, one sentence per line
    #[arg(long = "ref", value_name = "PATH")]
    reference: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Print the score of every sentence
    #[arg(long)]
    per_sentence: bool,

    /// Cap the number of shifts applied per sentence (unlimited if not set)
    #[arg(long, env = "CHARACTER_TER_MAX_SHIFTS")]
    max_shift_iterations: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a hypothesis file against a reference file
    Score(ScoreArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Score(args) => {
            let config = ScoreConfig {
                paths: ScorePaths {
                    hypothesis: args.hypothesis,
                    reference: args.reference,
                },
                scoring: ScoringConfig {
                    max_shift_iterations: args.max_shift_iterations,
                },
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                },
                behavior: BehaviorConfig {
                    per_sentence: args.per_sentence,
                    quiet: cli.quiet,
                },
            };

            match cli::run_score(config) {
                Ok(exit_codes::SUCCESS) => Ok(()),
                Ok(exit_code) => std::process::exit(exit_code),
                Err(err) => {
                    tracing::error!("{err:#}");
                    std::process::exit(exit_codes::ERROR);
                }
            }
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "character-ter", &mut io::stdout());
            Ok(())
        }
    }
}
