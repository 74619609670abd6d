//! Core data structures for the solvoku sudoku solver.
//!
//! This crate provides the board model shared by the solver and the
//! command-line application:
//!
//! - [`digit`]: type-safe representation of sudoku digits 1-9
//! - [`position`]: board cell coordinates and box arithmetic
//! - [`grid`]: the 9x9 grid with constraint queries and its textual format
//!
//! The grid answers questions (is this placement legal? where is the next
//! empty cell?) but makes no placement decisions; search strategy lives in
//! the `solvoku-solver` crate.
//!
//! # Examples
//!
//! ```
//! use solvoku_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! let pos = Position::new(4, 4);
//!
//! assert!(grid.is_legal(pos, Digit::D5));
//! grid.set(pos, Some(Digit::D5));
//!
//! // 5 is now taken in the center row, column, and box
//! assert!(!grid.is_legal(Position::new(4, 0), Digit::D5));
//! assert_eq!(grid.find_empty(), Some(Position::new(0, 0)));
//! ```

pub mod digit;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    grid::{Grid, ParseGridError},
    position::Position,
};
