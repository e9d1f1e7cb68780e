// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a solver for classic 9x9 Sudoku which treats the
//! puzzle as a constraint satisfaction problem. It supports the following
//! key features:
//!
//! * Parsing and printing Sudoku grids
//! * Solving Sudoku by a backtracking search whose branching is guided by
//! the most-constrained-variable and least-constraining-value heuristics
//! * Pruning the search with AC-3-style arc-consistency propagation after
//! every assignment
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code. It is
//! deliberately forgiving: any text which contains exactly 81 digits in
//! reading order is accepted, so most common one-line and one-row-per-line
//! notations parse as-is.
//!
//! ```
//! use sudoku_csp::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("
//!     000081000
//!     002007800
//!     053000170
//!     370000000
//!     600000003
//!     000000024
//!     069000230
//!     005900400
//!     000650000").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving Sudoku
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! solve Sudoku. The provided implementation is the
//! [CspSolver](solver::CspSolver), which finds a solution to every solvable
//! puzzle and reports unsolvable ones as such. As it is a zero-sized
//! struct, no instantiation is required.
//!
//! ```
//! use sudoku_csp::SudokuGrid;
//! use sudoku_csp::solver::{CspSolver, Solution, Solver};
//!
//! let grid = SudokuGrid::parse("
//!     000081000
//!     002007800
//!     053000170
//!     370000000
//!     600000003
//!     000000024
//!     069000230
//!     005900400
//!     000650000").unwrap();
//!
//! match CspSolver.solve(&grid) {
//!     Solution::Solved(solved) => assert!(solved.is_full()),
//!     Solution::Impossible => panic!("this puzzle is solvable")
//! }
//! ```
//!
//! Solving a contradictory or unsolvable grid is not an error, it yields
//! [Solution::Impossible](solver::Solution::Impossible).

pub mod constraint;
pub mod domain;
pub mod error;
pub mod solver;
pub mod util;


use error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of a Sudoku grid.
pub const GRID_SIZE: usize = 9;

/// The number of rows and columns of one 3x3 block of the grid.
pub const BLOCK_SIZE: usize = 3;

const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * GRID_SIZE + column
}

/// A 9x9 Sudoku grid, composed of 81 cells that are organized into 9 blocks
/// of 3x3 cells. Each cell may or may not be occupied by a digit from 1 to
/// 9. This type only stores the numbers; checking and solving are the
/// business of the [solver] module.
///
/// `SudokuGrid` implements `Display` for a pretty print:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ 7 │ 4 │ 6 ║ 2 │ 8 │ 1 ║ 3 │ 5 │ 9 ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ...
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char,
        newline: bool) -> String {
    let mut result = String::new();

    for x in 0..GRID_SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.cells[index(x, y)]), ' ', '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..GRID_SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

impl SudokuGrid {

    /// Creates a new, empty Sudoku grid in which every cell is blank.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; CELL_COUNT]
        }
    }

    /// Creates a grid from a 9x9 matrix of numbers, where 0 represents a
    /// blank cell and 1 to 9 are clues. The outer slice contains the rows
    /// from top to bottom, each row the cells from left to right.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidDimensions` If the matrix does not consist of
    /// exactly 9 rows of exactly 9 cells each.
    /// * `SudokuError::InvalidNumber` If any cell contains a number greater
    /// than 9.
    pub fn from_rows(rows: &[Vec<usize>]) -> SudokuResult<SudokuGrid> {
        if rows.len() != GRID_SIZE ||
                rows.iter().any(|row| row.len() != GRID_SIZE) {
            return Err(SudokuError::InvalidDimensions);
        }

        let mut grid = SudokuGrid::new();

        for (row, row_cells) in rows.iter().enumerate() {
            for (column, &number) in row_cells.iter().enumerate() {
                if number > GRID_SIZE {
                    return Err(SudokuError::InvalidNumber);
                }

                if number != 0 {
                    grid.cells[index(column, row)] = Some(number);
                }
            }
        }

        Ok(grid)
    }

    /// Converts the grid into a 9x9 matrix of numbers in the same format
    /// that [SudokuGrid::from_rows] accepts: rows from top to bottom, cells
    /// from left to right, blanks as 0.
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        (0..GRID_SIZE)
            .map(|row| (0..GRID_SIZE)
                .map(|column| self.cells[index(column, row)].unwrap_or(0))
                .collect())
            .collect()
    }

    /// Parses a code encoding a Sudoku grid. The code must contain exactly
    /// 81 digit characters, which are assigned left-to-right,
    /// top-to-bottom, where each row is completed before the next one is
    /// started. A `'0'` denotes a blank cell. All non-digit characters are
    /// ignored, so line breaks, spaces, and separators may be used freely
    /// for formatting.
    ///
    /// As an example, the codes `"530070000600195000..."` and
    ///
    /// ```text
    /// 5 3 0 | 0 7 0 | 0 0 0
    /// 6 0 0 | 1 9 5 | 0 0 0
    /// ...
    /// ```
    ///
    /// both denote grids whose first row starts with 5 and 3.
    ///
    /// # Errors
    ///
    /// `SudokuParseError::WrongNumberOfCells` if the input does not contain
    /// exactly 81 digit characters.
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let digits: Vec<usize> = code.chars()
            .filter_map(|c| c.to_digit(10))
            .map(|digit| digit as usize)
            .collect();

        if digits.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let cells = digits.into_iter()
            .map(|digit| if digit == 0 { None } else { Some(digit) })
            .collect();

        Ok(SudokuGrid {
            cells
        })
    }

    /// Converts the grid into a `String` of 81 digit characters in a way
    /// that is consistent with [SudokuGrid::parse]. That is, a grid that is
    /// converted to a code and parsed again will not change.
    ///
    /// ```
    /// use sudoku_csp::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    /// grid.set_cell(1, 0, 4).unwrap();
    ///
    /// let code = grid.to_code();
    /// assert!(code.starts_with("04"));
    /// assert_eq!(grid, SudokuGrid::parse(code.as_str()).unwrap());
    /// ```
    pub fn to_code(&self) -> String {
        self.cells.iter()
            .map(|cell| to_char(Some(cell.unwrap_or(0))))
            .collect()
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is blank.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is in the specified cell.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not blank, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `digit` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, digit: usize)
            -> SudokuResult<()> {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if digit == 0 || digit > GRID_SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(digit);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is,
    /// if it contains a digit, that digit is removed. If the cell is
    /// already blank, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-blank cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with
    /// a digit.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another
    /// one. That is, all cells filled in this grid with some digit must be
    /// filled in `other` with the same digit. If this condition is met,
    /// `true` is returned, and `false` otherwise.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(number) => other_cell == &Some(*number),
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some digit
    /// must be filled in this one with the same digit. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_code()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(code: String) -> SudokuParseResult<SudokuGrid> {
        SudokuGrid::parse(code.as_str())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let mut code = String::from("100200304");
        code.push_str(&"0".repeat(72));
        let grid = SudokuGrid::parse(code.as_str())
            .expect("parsing valid grid failed");

        assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
        assert_eq!(None, grid.get_cell(1, 0).unwrap());
        assert_eq!(Some(2), grid.get_cell(3, 0).unwrap());
        assert_eq!(Some(3), grid.get_cell(6, 0).unwrap());
        assert_eq!(Some(4), grid.get_cell(8, 0).unwrap());
        assert_eq!(None, grid.get_cell(4, 4).unwrap());
    }

    #[test]
    fn parse_ignores_non_digit_characters() {
        let mut code = String::from("5 3 0 | 0 7 0 | 0 0 0\n");
        code.push_str(&"0 0 0 | 0 0 0 | 0 0 0\n".repeat(8));
        let grid = SudokuGrid::parse(code.as_str()).unwrap();

        assert_eq!(Some(5), grid.get_cell(0, 0).unwrap());
        assert_eq!(Some(3), grid.get_cell(1, 0).unwrap());
        assert_eq!(Some(7), grid.get_cell(4, 0).unwrap());
        assert_eq!(3, grid.count_clues());
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse(&"0".repeat(80)));
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse(&"0".repeat(82)));
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse("no digits at all"));
    }

    #[test]
    fn from_rows_ok() {
        let mut rows = vec![vec![0usize; 9]; 9];
        rows[0][0] = 1;
        rows[8][8] = 9;
        let grid = SudokuGrid::from_rows(&rows).unwrap();

        assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
        assert_eq!(Some(9), grid.get_cell(8, 8).unwrap());
        assert_eq!(2, grid.count_clues());
    }

    #[test]
    fn from_rows_invalid_dimensions() {
        let too_few_rows = vec![vec![0usize; 9]; 8];
        assert_eq!(Err(SudokuError::InvalidDimensions),
            SudokuGrid::from_rows(&too_few_rows));

        let mut ragged = vec![vec![0usize; 9]; 9];
        ragged[3].push(0);
        assert_eq!(Err(SudokuError::InvalidDimensions),
            SudokuGrid::from_rows(&ragged));
    }

    #[test]
    fn from_rows_invalid_number() {
        let mut rows = vec![vec![0usize; 9]; 9];
        rows[2][5] = 10;
        assert_eq!(Err(SudokuError::InvalidNumber),
            SudokuGrid::from_rows(&rows));
    }

    #[test]
    fn row_round_trip() {
        let mut rows = vec![vec![0usize; 9]; 9];
        rows[1][2] = 3;
        rows[7][6] = 5;
        let grid = SudokuGrid::from_rows(&rows).unwrap();

        assert_eq!(rows, grid.to_rows());
    }

    #[test]
    fn code_round_trip() {
        let mut code = "174583926".repeat(9);
        code.replace_range(40..41, "0");
        let grid = SudokuGrid::parse(code.as_str()).unwrap();

        assert_eq!(code, grid.to_code());
    }

    #[test]
    fn cell_bounds_are_checked() {
        let mut grid = SudokuGrid::new();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(0, 9, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear_cell(10, 10));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 10));
    }

    #[test]
    fn cell_manipulation() {
        let mut grid = SudokuGrid::new();
        assert!(grid.is_empty());
        assert!(!grid.is_full());

        grid.set_cell(4, 2, 8).unwrap();
        assert!(grid.has_number(4, 2, 8).unwrap());
        assert!(!grid.has_number(4, 2, 7).unwrap());
        assert!(!grid.has_number(0, 0, 8).unwrap());
        assert_eq!(1, grid.count_clues());
        assert!(!grid.is_empty());

        grid.clear_cell(4, 2).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn full_grid_is_full() {
        let grid = SudokuGrid::parse(&"174583926".repeat(9)).unwrap();
        assert!(grid.is_full());
        assert_eq!(81, grid.count_clues());
    }

    #[test]
    fn subset_relations() {
        let empty = SudokuGrid::new();
        let mut partial = SudokuGrid::new();
        partial.set_cell(0, 0, 1).unwrap();
        let mut larger = partial.clone();
        larger.set_cell(5, 5, 2).unwrap();
        let mut conflicting = SudokuGrid::new();
        conflicting.set_cell(0, 0, 2).unwrap();

        assert!(empty.is_subset(&partial));
        assert!(partial.is_subset(&partial));
        assert!(partial.is_subset(&larger));
        assert!(larger.is_superset(&partial));
        assert!(!larger.is_subset(&partial));
        assert!(!partial.is_subset(&conflicting));
    }

    #[test]
    fn serde_round_trip() {
        let mut code = "174583926".repeat(9);
        code.replace_range(13..14, "0");
        let grid = SudokuGrid::parse(code.as_str()).unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(format!("\"{}\"", code), json);

        let deserialized: SudokuGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, deserialized);
    }

    #[test]
    fn deserializing_garbage_fails() {
        let result: Result<SudokuGrid, _> =
            serde_json::from_str("\"12345\"");
        assert!(result.is_err());
    }
}
