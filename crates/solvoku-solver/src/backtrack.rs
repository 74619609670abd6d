//! Depth-first backtracking search over a [`Grid`].

use solvoku_core::{Digit, Grid};

use crate::SolverError;

/// Statistics collected during a backtracking solve.
///
/// # Examples
///
/// ```
/// use solvoku_core::Grid;
/// use solvoku_solver::BacktrackSolver;
///
/// let mut grid = Grid::new();
/// let (solved, stats) = BacktrackSolver::new().solve(&mut grid)?;
/// assert!(solved);
/// assert!(stats.placements() >= 81);
/// # Ok::<(), solvoku_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BacktrackStats {
    placements: usize,
    backtracks: usize,
}

impl BacktrackStats {
    /// Creates a new empty statistics object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of trial placements made.
    #[must_use]
    pub fn placements(&self) -> usize {
        self.placements
    }

    /// Returns the number of placements that were undone.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns the total number of search steps (placements plus
    /// backtracks). This is the quantity bounded by
    /// [`BacktrackSolver::with_step_limit`].
    #[must_use]
    pub fn steps(&self) -> usize {
        self.placements + self.backtracks
    }
}

/// A solver that completes a sudoku grid by depth-first backtracking.
///
/// The search visits empty cells in row-major order ([`Grid::find_empty`])
/// and tries candidate digits in ascending order ([`Digit::ALL`]). Both
/// orders are fixed, so for a given input the solver always produces the
/// same completion: the lexicographically first one. Trial placements that
/// lead to a dead end are undone exactly, so on failure the grid is
/// restored to its input state, and cells that were filled at entry are
/// never touched.
///
/// # Examples
///
/// ```
/// use solvoku_core::Grid;
/// use solvoku_solver::BacktrackSolver;
///
/// let mut grid: Grid = "
///     530 070 000
///     600 195 000
///     098 000 060
///     800 060 003
///     400 803 001
///     700 020 006
///     060 000 280
///     000 419 005
///     000 080 079
/// "
/// .parse()
/// .unwrap();
///
/// let (solved, _stats) = BacktrackSolver::new().solve(&mut grid)?;
/// assert!(solved);
/// assert!(grid.is_complete() && grid.is_consistent());
/// # Ok::<(), solvoku_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackSolver {
    step_limit: Option<usize>,
}

impl BacktrackSolver {
    /// Creates a solver with no step budget.
    #[must_use]
    pub const fn new() -> Self {
        Self { step_limit: None }
    }

    /// Creates a solver that gives up with
    /// [`SolverError::StepLimitExceeded`] once the search has taken `limit`
    /// steps.
    ///
    /// Any valid 9x9 puzzle finishes quickly without a budget; the limit is
    /// a guard for callers feeding the solver untrusted input in bulk.
    #[must_use]
    pub const fn with_step_limit(limit: usize) -> Self {
        Self {
            step_limit: Some(limit),
        }
    }

    /// Solves the grid in place.
    ///
    /// Returns `(true, stats)` with the grid completed if a solution exists,
    /// or `(false, stats)` with the grid unchanged if none does. A grid
    /// whose filled cells already conflict is reported as having no
    /// solution without entering the search.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::StepLimitExceeded`] if a step limit was
    /// configured and the search exhausts it. The grid is restored to its
    /// input state before the error is returned.
    pub fn solve(&self, grid: &mut Grid) -> Result<(bool, BacktrackStats), SolverError> {
        let mut stats = BacktrackStats::new();
        if !grid.is_consistent() {
            return Ok((false, stats));
        }
        let solved = self.search(grid, &mut stats)?;
        Ok((solved, stats))
    }

    fn search(&self, grid: &mut Grid, stats: &mut BacktrackStats) -> Result<bool, SolverError> {
        let Some(pos) = grid.find_empty() else {
            // No empty cell left; every placement was checked for legality
            return Ok(true);
        };

        for digit in Digit::ALL {
            if !grid.is_legal(pos, digit) {
                continue;
            }
            if let Some(limit) = self.step_limit {
                if stats.steps() >= limit {
                    return Err(SolverError::StepLimitExceeded { limit });
                }
            }

            grid.set(pos, Some(digit));
            stats.placements += 1;
            match self.search(grid, stats) {
                Ok(true) => return Ok(true),
                Ok(false) => {
                    grid.set(pos, None);
                    stats.backtracks += 1;
                }
                Err(err) => {
                    grid.set(pos, None);
                    return Err(err);
                }
            }
        }

        Ok(false)
    }
}
