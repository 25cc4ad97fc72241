//! Non-Attacking Arrangement Counter
//!
//! For every square board in a size range, enumerates candidate placements of
//! N pieces on an N x N board and counts how many are non-attacking for
//! bishops, rooks, and queens. The queen solutions are also reduced to the
//! fundamental ones, distinct under rotation and reflection of the board.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::info;

use nonattacking::report::format_solutions;
use nonattacking::solver::{self, count_board, Metrics};
use nonattacking::{Board, RunConfig, Strategy};

/// Counts non-attacking arrangements of chess pieces on small boards.
#[derive(Parser)]
#[command(name = "nonattacking")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

/// Inclusive range of square board sizes.
#[derive(Args)]
struct SizeRange {
    /// Smallest board size.
    #[arg(long, default_value_t = 1)]
    from: usize,
    /// Largest board size [default: 10 for queens, 8 for pieces]
    #[arg(long)]
    to: Option<usize>,
}

impl SizeRange {
    fn into_config(self, strategy: Strategy) -> RunConfig {
        let mut config = RunConfig::new(strategy);
        config.from = self.from;
        if let Some(to) = self.to {
            config.to = to;
        }
        config
    }
}

#[derive(Subcommand)]
enum Command {
    /// Count queen solutions with one queen per row, plus fundamental solutions (default).
    Queens {
        #[command(flatten)]
        range: SizeRange,
        /// Also count bishop-free permutations.
        #[arg(long)]
        bishops: bool,
        /// Also count rook-free permutations.
        #[arg(long)]
        rooks: bool,
    },
    /// Count bishop, rook, and queen arrangements over every choice of cells.
    Pieces {
        #[command(flatten)]
        range: SizeRange,
        /// Also count fundamental queen solutions.
        #[arg(long)]
        fundamental: bool,
    },
    /// Count arrangements of K pieces on one M x N board.
    Board {
        /// Number of rows (M).
        #[arg(long)]
        rows: usize,
        /// Number of columns (N).
        #[arg(long)]
        cols: usize,
        /// Number of pieces (K).
        #[arg(long)]
        pieces: usize,
    },
    /// Print the fundamental queen solutions for one board size.
    Show {
        /// Board size.
        #[arg(long)]
        size: usize,
    },
}

fn main() -> Result<()> {
    // defaults to RUST_LOG if set, otherwise INFO; logs go to stderr.
    // try_init only fails when a logger is already installed, which is fine to keep.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Queens {
            range,
            bishops,
            rooks,
        }) => {
            let mut config = range.into_config(Strategy::Permutation);
            config.metrics.bishops = bishops;
            config.metrics.rooks = rooks;
            run_sizes(&config)
        }
        Some(Command::Pieces { range, fundamental }) => {
            let mut config = range.into_config(Strategy::Combination);
            config.metrics.fundamental = fundamental;
            run_sizes(&config)
        }
        Some(Command::Board { rows, cols, pieces }) => run_board(rows, cols, pieces),
        Some(Command::Show { size }) => run_show(size),
        None => run_sizes(&RunConfig::new(Strategy::Permutation)),
    }
}

/// Counts every size in the range, printing each report as soon as it is done.
fn run_sizes(config: &RunConfig) -> Result<()> {
    info!(
        "Sizes {}..={} with the {} strategy",
        config.from, config.to, config.strategy
    );
    for report in solver::run(config)? {
        println!("{}", report?);
    }
    Ok(())
}

/// Counts one rectangular board with the combination strategy.
fn run_board(rows: usize, cols: usize, pieces: usize) -> Result<()> {
    let board = Board::new(rows, cols, pieces)?;
    let report = count_board(
        Strategy::Combination,
        board,
        Metrics::for_strategy(Strategy::Combination),
    )?;
    println!("{report}");
    Ok(())
}

/// Prints each fundamental solution as a grid.
fn run_show(size: usize) -> Result<()> {
    let solutions = solver::fundamental_solutions(size)?;
    print!("{}", format_solutions(size, &solutions));
    Ok(())
}
