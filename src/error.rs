//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing grids, see [SudokuParseError](enum.SudokuParseError.html) for
/// that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that a matrix provided as a grid does not have exactly 9
    /// rows of exactly 9 cells each.
    InvalidDimensions,

    /// Indicates that some number is invalid for a grid cell. This is the
    /// case if it is greater than 9 where a clue or blank (0) is expected, or
    /// 0 where a digit is required.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the grid. This is the case if they are greater than or equal to 9.
    OutOfBounds
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a
/// [SudokuGrid](../struct.SudokuGrid.html) from text.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of digit characters found in the input does
    /// not equal the 81 cells of a 9x9 grid. All non-digit characters are
    /// ignored, so this is the only way a textual grid can be malformed.
    WrongNumberOfCells
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "the input does not contain exactly 81 digits")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
