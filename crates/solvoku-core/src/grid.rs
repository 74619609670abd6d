//! The 9x9 sudoku grid and its constraint queries.
//!
//! [`Grid`] stores cell values and answers legality questions about them; it
//! never decides what to place. Placement decisions belong to the solver,
//! which is expected to check [`Grid::is_legal`] before writing a cell.
//!
//! # Textual format
//!
//! A grid parses from 81 cells in row-major order. Digits `1`-`9` are filled
//! cells; `0`, `.`, and `_` are empty cells; whitespace is ignored. A grid
//! displays as 9 lines of 9 characters with `0` marking empty cells, so a
//! completed grid prints as 9 lines of 9 digits.
//!
//! # Examples
//!
//! ```
//! use solvoku_core::{Digit, Grid, Position};
//!
//! let grid: Grid = "
//!     530 070 000
//!     600 195 000
//!     098 000 060
//!     800 060 003
//!     400 803 001
//!     700 020 006
//!     060 000 280
//!     000 419 005
//!     000 080 079
//! "
//! .parse()?;
//!
//! assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
//! assert!(grid.is_legal(Position::new(2, 0), Digit::D4));
//! assert!(!grid.is_legal(Position::new(2, 0), Digit::D3));
//! # Ok::<(), solvoku_core::ParseGridError>(())
//! ```

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{digit::Digit, position::Position};

/// A 9x9 sudoku grid.
///
/// Each cell holds `Option<Digit>`: `None` is an empty cell, `Some(digit)` a
/// filled one. Cells are addressed by [`Position`] through [`Index`] /
/// [`IndexMut`] or the [`get`](Grid::get) / [`set`](Grid::set) methods.
///
/// Mutation performs no constraint checking. Callers that care about sudoku
/// legality check [`is_legal`](Grid::is_legal) before writing, which keeps
/// writes O(1) and lets the solver undo trial placements exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    fn offset(pos: Position) -> usize {
        usize::from(pos.y()) * 9 + usize::from(pos.x())
    }

    /// Returns the value of the cell at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[Self::offset(pos)]
    }

    /// Sets the cell at `pos` to `value` (`None` clears the cell).
    ///
    /// No legality check is performed; see [`is_legal`](Grid::is_legal).
    pub fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[Self::offset(pos)] = value;
    }

    /// Returns `true` if no other cell in the same row, column, or box as
    /// `pos` holds `digit`.
    ///
    /// The cell at `pos` itself is ignored, so the query can be used both
    /// before a trial placement and to validate an already-filled cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use solvoku_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::new();
    /// grid.set(Position::new(0, 0), Some(Digit::D5));
    ///
    /// assert!(!grid.is_legal(Position::new(8, 0), Digit::D5)); // same row
    /// assert!(!grid.is_legal(Position::new(0, 8), Digit::D5)); // same column
    /// assert!(!grid.is_legal(Position::new(1, 1), Digit::D5)); // same box
    /// assert!(grid.is_legal(Position::new(8, 8), Digit::D5));
    /// ```
    #[must_use]
    pub fn is_legal(&self, pos: Position, digit: Digit) -> bool {
        for x in 0..9 {
            let peer = Position::new(x, pos.y());
            if peer != pos && self[peer] == Some(digit) {
                return false;
            }
        }
        for y in 0..9 {
            let peer = Position::new(pos.x(), y);
            if peer != pos && self[peer] == Some(digit) {
                return false;
            }
        }
        for i in 0..9 {
            let peer = Position::from_box(pos.box_index(), i);
            if peer != pos && self[peer] == Some(digit) {
                return false;
            }
        }
        true
    }

    /// Returns the first empty cell in row-major order, or `None` if the
    /// grid is full.
    ///
    /// The scan order is fixed ([`Position::ALL`]), which makes the solver's
    /// cell selection, and therefore its output, deterministic.
    #[must_use]
    pub fn find_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self[pos].is_none())
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.find_empty().is_none()
    }

    /// Returns `true` if every filled cell is legal with respect to its row,
    /// column, and box peers.
    ///
    /// Unlike [`is_complete`](Grid::is_complete), this does not require the
    /// grid to be full; it detects contradictions among the cells that are
    /// filled, including conflicting givens in a freshly parsed puzzle.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        Position::ALL.into_iter().all(|pos| match self[pos] {
            Some(digit) => self.is_legal(pos, digit),
            None => true,
        })
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        81 - self.filled_count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[Self::offset(pos)]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[Self::offset(pos)]
    }
}

/// Errors produced when parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input contains a character that is neither a digit, an empty-cell
    /// marker (`0`, `.`, `_`), nor whitespace.
    #[display("invalid character {ch:?} in grid")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
    /// The input does not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut count = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let cell = match ch {
                '0' | '.' | '_' => None,
                _ => {
                    let digit = ch
                        .to_digit(10)
                        .and_then(|value| u8::try_from(value).ok())
                        .and_then(Digit::try_from_value)
                        .ok_or(ParseGridError::InvalidCharacter { ch })?;
                    Some(digit)
                }
            };
            if count < 81 {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(Self { cells })
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..9 {
                match self[Position::new(x, y)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str("0")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const PUZZLE: &str = "
        530070000
        600195000
        098000060
        800060003
        400803001
        700020006
        060000280
        000419005
        000080079
    ";

    #[test]
    fn test_parse_puzzle() {
        let grid: Grid = PUZZLE.parse().unwrap();
        assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
        assert_eq!(grid[Position::new(1, 0)], Some(Digit::D3));
        assert_eq!(grid[Position::new(2, 0)], None);
        assert_eq!(grid[Position::new(8, 8)], Some(Digit::D9));
        assert!(grid.is_consistent());
        assert!(!grid.is_complete());
    }

    #[test]
    fn test_parse_accepts_alternate_empty_markers() {
        let with_zeros: Grid = PUZZLE.parse().unwrap();
        let with_dots: Grid = PUZZLE.replace('0', ".").parse().unwrap();
        let with_underscores: Grid = PUZZLE.replace('0', "_").parse().unwrap();
        assert_eq!(with_zeros, with_dots);
        assert_eq!(with_zeros, with_underscores);
    }

    #[test]
    fn test_parse_ignores_whitespace() {
        let spaced = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        ";
        let grid: Grid = spaced.parse().unwrap();
        assert_eq!(grid, PUZZLE.parse().unwrap());
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        let input = PUZZLE.replace('5', "x");
        assert_eq!(
            input.parse::<Grid>(),
            Err(ParseGridError::InvalidCharacter { ch: 'x' })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_cell_count() {
        assert_eq!(
            "123".parse::<Grid>(),
            Err(ParseGridError::WrongCellCount { count: 3 })
        );

        let long = format!("{PUZZLE}0");
        assert_eq!(
            long.parse::<Grid>(),
            Err(ParseGridError::WrongCellCount { count: 82 })
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseGridError::InvalidCharacter { ch: 'x' };
        assert_eq!(err.to_string(), "invalid character 'x' in grid");

        let err = ParseGridError::WrongCellCount { count: 80 };
        assert_eq!(err.to_string(), "expected 81 cells, found 80");
    }

    #[test]
    fn test_display_matches_input_layout() {
        let grid: Grid = PUZZLE.parse().unwrap();
        let expected = "530070000\n\
                        600195000\n\
                        098000060\n\
                        800060003\n\
                        400803001\n\
                        700020006\n\
                        060000280\n\
                        000419005\n\
                        000080079";
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn test_is_legal_detects_row_conflict() {
        let grid: Grid = PUZZLE.parse().unwrap();
        // Row 0 already holds 5, 3, and 7
        let pos = Position::new(2, 0);
        assert!(!grid.is_legal(pos, Digit::D5));
        assert!(!grid.is_legal(pos, Digit::D3));
        assert!(!grid.is_legal(pos, Digit::D7));
    }

    #[test]
    fn test_is_legal_detects_column_conflict() {
        let grid: Grid = PUZZLE.parse().unwrap();
        // Column 0 already holds 5, 6, 8, 4, and 7
        let pos = Position::new(0, 2);
        assert!(!grid.is_legal(pos, Digit::D5));
        assert!(!grid.is_legal(pos, Digit::D4));
        assert!(grid.is_legal(pos, Digit::D1));
    }

    #[test]
    fn test_is_legal_detects_box_conflict() {
        let grid: Grid = PUZZLE.parse().unwrap();
        // Box 1 (top middle) holds 7, 1, 9, and 5; neither 7 nor 5 appears
        // in row 2 or column 3, so only the box rules them out at (3, 2)
        let pos = Position::new(3, 2);
        assert!(!grid.is_legal(pos, Digit::D7));
        assert!(!grid.is_legal(pos, Digit::D5));
        assert!(grid.is_legal(pos, Digit::D2));
    }

    #[test]
    fn test_is_legal_ignores_own_cell() {
        let grid: Grid = PUZZLE.parse().unwrap();
        // (0, 0) holds 5; validating the cell against its peers succeeds
        assert!(grid.is_legal(Position::new(0, 0), Digit::D5));
    }

    #[test]
    fn test_find_empty_is_row_major() {
        let mut grid = Grid::new();
        assert_eq!(grid.find_empty(), Some(Position::new(0, 0)));

        grid.set(Position::new(0, 0), Some(Digit::D1));
        assert_eq!(grid.find_empty(), Some(Position::new(1, 0)));

        for x in 0..9 {
            grid.set(Position::new(x, 0), Some(Digit::from_value(x + 1)));
        }
        assert_eq!(grid.find_empty(), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_find_empty_on_full_grid() {
        let mut grid = Grid::new();
        for pos in Position::ALL {
            grid.set(pos, Some(Digit::D1));
        }
        assert_eq!(grid.find_empty(), None);
        assert!(grid.is_complete());
    }

    #[test]
    fn test_is_consistent_detects_duplicate_givens() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(Digit::D5));
        assert!(grid.is_consistent());

        grid.set(Position::new(8, 0), Some(Digit::D5));
        assert!(!grid.is_consistent());
    }

    #[test]
    fn test_counts() {
        let grid: Grid = PUZZLE.parse().unwrap();
        assert_eq!(grid.filled_count() + grid.empty_count(), 81);
        assert_eq!(grid.filled_count(), 30);

        assert_eq!(Grid::new().filled_count(), 0);
        assert_eq!(Grid::new().empty_count(), 81);
    }

    #[test]
    fn test_index_mut() {
        let mut grid = Grid::new();
        grid[Position::new(3, 4)] = Some(Digit::D8);
        assert_eq!(grid.get(Position::new(3, 4)), Some(Digit::D8));

        grid[Position::new(3, 4)] = None;
        assert_eq!(grid.get(Position::new(3, 4)), None);
    }

    fn position_strategy() -> impl Strategy<Value = Position> {
        (0..9u8, 0..9u8).prop_map(|(x, y)| Position::new(x, y))
    }

    fn digit_strategy() -> impl Strategy<Value = Digit> {
        (1..=9u8).prop_map(Digit::from_value)
    }

    proptest! {
        #[test]
        fn prop_any_digit_is_legal_on_empty_grid(
            pos in position_strategy(),
            digit in digit_strategy(),
        ) {
            let grid = Grid::new();
            prop_assert!(grid.is_legal(pos, digit));
        }

        #[test]
        fn prop_set_then_clear_restores_grid(
            pos in position_strategy(),
            digit in digit_strategy(),
        ) {
            let original: Grid = PUZZLE.parse().unwrap();
            let mut grid = original.clone();
            let previous = grid[pos];

            grid.set(pos, Some(digit));
            grid.set(pos, previous);
            prop_assert_eq!(grid, original);
        }

        #[test]
        fn prop_is_legal_iff_no_peer_holds_digit(
            pos in position_strategy(),
            peer in position_strategy(),
            digit in digit_strategy(),
        ) {
            let mut grid = Grid::new();
            grid.set(peer, Some(digit));

            let shares_house = peer != pos
                && (peer.x() == pos.x()
                    || peer.y() == pos.y()
                    || peer.box_index() == pos.box_index());
            prop_assert_eq!(grid.is_legal(pos, digit), !shares_house);
        }
    }
}
