//! Code for working with [`Location`]s in board notation ("A1", "h8").

use std::fmt::{self, Display, Formatter};

/// Column letters, left to right.
pub const COLUMN_LABELS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A location on the board in row/column form.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Location {
    row: usize,
    col: usize,
}

impl Location {
    /// Convert from zero-based row and column coordinates.
    pub fn from_coords(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Get the zero-based row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Convert from a row-major cell index on a board `edge_length` wide.
    pub fn from_index(index: usize, edge_length: usize) -> Self {
        Self::from_coords(index / edge_length, index % edge_length)
    }

    /// Convert into a row-major cell index, or `None` if this location is
    /// off a board `edge_length` wide.
    pub fn to_index(self, edge_length: usize) -> Option<usize> {
        if self.row < edge_length && self.col < edge_length {
            Some(self.row * edge_length + self.col)
        } else {
            None
        }
    }
}

/// Convert this [`Location`] into string notation ("A4").
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = COLUMN_LABELS.chars().nth(self.col).ok_or(fmt::Error)?;
        write!(f, "{}{}", col_str, self.row + 1)
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseLocationError;

impl Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid location string")
    }
}

impl std::error::Error for ParseLocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

/// Build a [`Location`] from a 1-indexed string notation ("A4", "c12").
/// Whether the location fits on a particular board is checked by [`Location::to_index`].
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_LABELS.find(col_str).ok_or(ParseLocationError)?;

        let row_str = chars.as_str();
        if row_str.is_empty() || !row_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseLocationError);
        }
        let row: usize = row_str.parse().or(Err(ParseLocationError))?;
        if row == 0 {
            return Err(ParseLocationError);
        }

        Ok(Self::from_coords(row - 1, col))
    }
}
