//! Solver error types.

/// Errors produced by the backtracking solver.
///
/// An unsolvable puzzle is not an error; it is reported through the solver's
/// success flag. The only error condition is exhausting a step budget the
/// caller explicitly configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The configured step budget was exhausted before the search finished.
    #[display("search exceeded the step limit of {limit}")]
    StepLimitExceeded {
        /// The configured step limit.
        limit: usize,
    },
}
