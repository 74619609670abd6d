//! Command-line sudoku solver.
//!
//! Reads a puzzle from a text file (81 cells in row-major order, digits
//! `1`-`9` for givens and `0`, `.`, or `_` for empty cells, whitespace
//! ignored), solves it by backtracking, and prints the completed grid as
//! 9 lines of 9 digits.
//!
//! # Usage
//!
//! ```sh
//! solvoku puzzle.txt
//! ```
//!
//! Write the solution to a file instead of standard output:
//!
//! ```sh
//! solvoku puzzle.txt --output solution.txt
//! ```
//!
//! # Exit status
//!
//! - `0`: a solution was found and printed
//! - `1`: the puzzle has no solution
//! - `2`: the file could not be read, was not a valid puzzle, or the
//!   arguments were invalid

use std::{fs, path::PathBuf, process};

use clap::Parser;
use solvoku_core::{Grid, ParseGridError};
use solvoku_solver::{BacktrackSolver, SolverError};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the puzzle file (81 cells; 0, '.', or '_' mark empty cells).
    #[arg(value_name = "PUZZLE")]
    path: PathBuf,

    /// Write the solved grid to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum AppError {
    #[display("{_0}")]
    Io(std::io::Error),
    #[display("invalid puzzle: {_0}")]
    Parse(ParseGridError),
    #[display("{_0}")]
    Solver(SolverError),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("no solution found");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{}: {err}", args.path.display());
            process::exit(2);
        }
    }
}

/// Solves the puzzle named by `args`.
///
/// Returns `Ok(true)` once the solution has been emitted, `Ok(false)` if
/// the puzzle has no solution, and an error for I/O or format problems.
fn run(args: &Args) -> Result<bool, AppError> {
    let input = fs::read_to_string(&args.path)?;
    let mut grid: Grid = input.parse()?;
    log::info!(
        "parsed puzzle with {} givens, {} empty cells",
        grid.filled_count(),
        grid.empty_count()
    );
    log::debug!("puzzle:\n{grid}");

    let (solved, stats) = BacktrackSolver::new().solve(&mut grid)?;
    if !solved {
        return Ok(false);
    }
    log::info!(
        "solved after {} placements, {} backtracks",
        stats.placements(),
        stats.backtracks()
    );

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{grid}\n"))?;
            log::info!("solution written to {}", path.display());
        }
        None => println!("{grid}"),
    }
    Ok(true)
}
