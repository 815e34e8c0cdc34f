//! Graph Search Runner
//!
//! Runs depth-first or breadth-first search over one of the bundled sample
//! problems and prints the path it finds. Set `RUST_LOG=graphsearch=debug`
//! (or `trace`) to follow the search as it runs.

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use rustc_hash::FxHashSet;
use tracing_subscriber::EnvFilter;

use graphsearch::problems::{Cell, CycleGrid, Lattice, LinearChain, Ring, Slot};
use graphsearch::reconstruct::format_trace;
use graphsearch::{GraphSearch, Problem, SearchError, Strategy};

/// Searches sample state graphs and prints the path to a goal.
#[derive(Parser)]
#[command(name = "graphsearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Exploration order.
    #[arg(long, short, value_enum, global = true, default_value_t = StrategyArg::BreadthFirst)]
    strategy: StrategyArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum StrategyArg {
    DepthFirst,
    BreadthFirst,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::DepthFirst => Strategy::DepthFirst,
            StrategyArg::BreadthFirst => Strategy::BreadthFirst,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Search the chain 1 - 2 - ... - LENGTH.
    Chain {
        #[arg(long, default_value_t = 5)]
        length: i32,
        /// Initial state.
        #[arg(long)]
        from: i32,
        /// Goal state; repeat for several.
        #[arg(long = "goal")]
        goals: Vec<i32>,
    },
    /// Search the eleven-state grid with cycles.
    Grid {
        /// Initial state.
        #[arg(long)]
        from: i32,
        /// Goal state; repeat for several.
        #[arg(long = "goal")]
        goals: Vec<i32>,
    },
    /// Search a ring of SIZE slots that wraps around.
    Ring {
        #[arg(long, default_value_t = 5)]
        size: i32,
        /// Initial slot.
        #[arg(long)]
        from: i32,
        /// Goal slot; repeat for several.
        #[arg(long = "goal")]
        goals: Vec<i32>,
    },
    /// Search an open WIDTH x HEIGHT lattice of "column,row" cells.
    Lattice {
        #[arg(long, default_value_t = 8)]
        width: i32,
        #[arg(long, default_value_t = 8)]
        height: i32,
        /// Initial cell.
        #[arg(long, value_parser = parse_cell)]
        from: Cell,
        /// Goal cell; repeat for several.
        #[arg(long = "goal", value_parser = parse_cell)]
        goals: Vec<Cell>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let strategy = Strategy::from(cli.strategy);

    let outcome = match cli.command {
        Command::Chain {
            length,
            from,
            goals,
        } => run(LinearChain::new(length), strategy, from, goals),
        Command::Grid { from, goals } => run(CycleGrid, strategy, from, goals),
        Command::Ring { size, from, goals } => run(
            Ring::new(size),
            strategy,
            Slot(from),
            goals.into_iter().map(Slot).collect(),
        ),
        Command::Lattice {
            width,
            height,
            from,
            goals,
        } => run(Lattice::new(width, height), strategy, from, goals),
    };

    match outcome {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Search failed: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one search and describes its outcome.
fn run<P: Problem>(
    problem: P,
    strategy: Strategy,
    from: P::State,
    goals: Vec<P::State>,
) -> Result<String, SearchError> {
    let goal_states: FxHashSet<P::State> = goals.into_iter().collect();
    let mut engine = GraphSearch::new(problem);

    let found = engine.search_with(strategy, from, &goal_states)?;
    let expanded = engine.stats().expanded;
    if !found {
        return Ok(format!("No goal reachable after expanding {expanded} nodes."));
    }

    let solution = engine.solution()?;
    let path = engine.path()?;
    Ok(format!(
        "Found a path of {} steps after expanding {} nodes:\n{}",
        solution.len(),
        expanded,
        format_trace(&path, &solution)
    ))
}

/// Parses a lattice cell written as `column,row`.
fn parse_cell(text: &str) -> Result<Cell, String> {
    let (column, row) = text
        .split_once(',')
        .ok_or_else(|| format!("expected COLUMN,ROW but got {text:?}"))?;
    let column = column.trim().parse().map_err(|e| format!("bad column: {e}"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row: {e}"))?;
    Ok((column, row))
}
