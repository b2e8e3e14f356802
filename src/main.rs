//! Codenames Solver - CLI
//!
//! Suggests Codenames clues from word embeddings: solve a given board, deal a random
//! one, or check how a specific clue would fare.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codenames_solver::{
    commands::{SolveConfig, analyze_clue, deal_board, solve_board},
    core::ThresholdStrategy,
    embeddings::{EmbeddingFormatType, Embeddings, loader::load_from_file_with_progress},
    output::{print_analysis_result, print_board, print_solve_result},
    solver::{AlgorithmType, ScoreMetric, SolverBuilder, SolverError},
    wordlists::{BOARD_WORDS, loader::words_from_slice},
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "codenames_solver",
    about = "Codenames clue generator using word embeddings",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Embedding file (whitespace-separated text vectors)
    #[arg(short, long)]
    embeddings: PathBuf,

    /// Embedding file format: glove (default), postspec, word2vec
    #[arg(short, long, global = true, default_value = "glove")]
    format: String,

    /// Threshold strategy: risky, moderate (default), conservative, or a number
    #[arg(short, long, global = true, default_value = "moderate")]
    strategy: String,

    /// Candidate generator: nearest-neighbor-sum (default) or best-average-angle
    #[arg(short, long, global = true, default_value = "nearest-neighbor-sum")]
    algorithm: String,

    /// Rank by the generator's secondary score instead of its primary one
    #[arg(long, global = true)]
    secondary: bool,

    /// Only consider the first N embedding words as clues
    #[arg(long, global = true)]
    vocab_limit: Option<usize>,

    /// File of candidate clue words, one per line (replaces the embedding vocabulary)
    #[arg(long, global = true)]
    vocabulary: Option<PathBuf>,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest clues for a board
    Solve {
        /// Words the clue should link, comma-separated
        #[arg(long, value_delimiter = ',', required = true)]
        hit: Vec<String>,

        /// Words the clue must stay away from, comma-separated
        #[arg(long, value_delimiter = ',')]
        avoid: Vec<String>,

        /// Number of clues to show
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Deal a random board and suggest clues for it
    Random {
        /// Seed for a reproducible board
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value = "8")]
        hit_count: usize,

        #[arg(long, default_value = "16")]
        avoid_count: usize,

        /// Number of clues to show
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,

        /// Board word list, one per line (default: built-in Codenames words)
        #[arg(short, long)]
        words: Option<PathBuf>,
    },

    /// Show how a clue relates to every board word
    Analyze {
        /// Clue to analyze
        clue: String,

        #[arg(long, value_delimiter = ',', required = true)]
        hit: Vec<String>,

        #[arg(long, value_delimiter = ',')]
        avoid: Vec<String>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load embeddings behind a spinner
fn load_embeddings(path: &Path, format_name: &str) -> Result<Embeddings> {
    let format = EmbeddingFormatType::from_name(format_name)
        .with_context(|| format!("unknown embedding format '{format_name}'"))?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner().template("{spinner:.green} {msg} ({pos} lines)")?,
    );
    spinner.set_message(format!("Loading {}", path.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = load_from_file_with_progress(path, &format, &spinner);
    spinner.finish_and_clear();

    result.with_context(|| format!("failed to load embeddings from {}", path.display()))
}

fn load_vocabulary(path: Option<&Path>) -> Result<Option<Vec<String>>> {
    use codenames_solver::wordlists::loader::load_from_file;

    path.map(|path| {
        load_from_file(path)
            .with_context(|| format!("failed to read vocabulary from {}", path.display()))
    })
    .transpose()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Validate names before the (slow) embedding load
    let algorithm = AlgorithmType::from_name(&cli.algorithm)?;
    if ThresholdStrategy::from_name(&cli.strategy).is_none() {
        return Err(SolverError::UnknownThreshold(cli.strategy.clone()).into());
    }
    let metric = if cli.secondary {
        ScoreMetric::SecondaryScore
    } else {
        ScoreMetric::SimilarityScore
    };
    let vocabulary = load_vocabulary(cli.vocabulary.as_deref())?;
    let embeddings = load_embeddings(&cli.embeddings, &cli.format)?;

    let make_config = |hit: Vec<String>, avoid: Vec<String>, n: usize| SolveConfig {
        n,
        strategy: cli.strategy.clone(),
        algorithm,
        metric,
        vocab_limit: cli.vocab_limit,
        ..SolveConfig::new(hit, avoid)
    };

    match cli.command {
        Commands::Solve { hit, avoid, count } => {
            let result = solve_board(
                make_config(hit, avoid, count),
                &embeddings,
                vocabulary.as_deref(),
            )?;
            print_solve_result(&result, cli.verbose > 0);
        }
        Commands::Random {
            seed,
            hit_count,
            avoid_count,
            count,
            words,
        } => {
            let words = match words {
                Some(path) => codenames_solver::wordlists::loader::load_from_file(&path)
                    .with_context(|| format!("failed to read board words from {}", path.display()))?,
                None => words_from_slice(BOARD_WORDS),
            };
            let seed = seed.unwrap_or_else(rand::random);
            tracing::info!(seed, "Dealing random board");

            let mut rng = StdRng::seed_from_u64(seed);
            let board = deal_board(&words, hit_count, avoid_count, &mut rng)?;
            print_board(&board);
            println!("   Seed:  {seed}");

            let result = solve_board(
                make_config(board.words_to_hit, board.words_to_avoid, count),
                &embeddings,
                vocabulary.as_deref(),
            )?;
            print_solve_result(&result, cli.verbose > 0);
        }
        Commands::Analyze { clue, hit, avoid } => {
            let solver = SolverBuilder::new(hit, avoid)
                .strategy(cli.strategy.clone())
                .metric(metric)
                .build(&embeddings)?;

            let result = analyze_clue(&clue, &solver)?;
            print_analysis_result(&result);
        }
    }

    Ok(())
}
