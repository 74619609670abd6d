//! Backtracking solver for 9x9 sudoku grids.
//!
//! The solver fills the empty cells of a [`solvoku_core::Grid`] by
//! depth-first search with exact undo, visiting cells in row-major order and
//! trying digits in ascending order. An unsolvable puzzle is a normal
//! outcome, reported through the success flag rather than an error; the grid
//! is left exactly as it was handed in.
//!
//! # Examples
//!
//! ```
//! use solvoku_core::Grid;
//! use solvoku_solver::BacktrackSolver;
//!
//! let mut grid = Grid::new();
//! let (solved, stats) = BacktrackSolver::new().solve(&mut grid)?;
//!
//! assert!(solved);
//! assert!(grid.is_complete());
//! println!("solved in {} steps", stats.steps());
//! # Ok::<(), solvoku_solver::SolverError>(())
//! ```

pub use self::{backtrack::*, error::*};

mod backtrack;
mod error;
