//! The board as a flat, row-major array of [`Cell`]s, plus the players and
//! the running piece counts.

use crate::{GameError, DEFAULT_EDGE_LENGTH, MAX_EDGE_LENGTH, MIN_EDGE_LENGTH};
use derive_more::{Display, Error};
use std::ops::Index;

/// One of the two players in a game. Black always moves first.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// The contents of a single space on the board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl Cell {
    /// The player whose piece occupies this cell, if any.
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Running piece counts for both players.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Counts {
    pub black: usize,
    pub white: usize,
}

impl Counts {
    #[inline]
    pub fn of(self, player: Player) -> usize {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Total pieces on the board.
    #[inline]
    pub fn total(self) -> usize {
        self.black + self.white
    }

    pub(crate) fn add(&mut self, player: Player, pieces: usize) {
        *self.slot(player) += pieces;
    }

    pub(crate) fn remove(&mut self, player: Player, pieces: usize) {
        *self.slot(player) -= pieces;
    }

    fn slot(&mut self, player: Player) -> &mut usize {
        match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        }
    }
}

/// Returns whether `edge_length` is a supported board size.
pub fn is_valid_edge_length(edge_length: usize) -> bool {
    edge_length % 2 == 0 && (MIN_EDGE_LENGTH..=MAX_EDGE_LENGTH).contains(&edge_length)
}

fn check_edge_length(edge_length: usize) -> Result<(), GameError> {
    if is_valid_edge_length(edge_length) {
        Ok(())
    } else {
        Err(GameError::InvalidBoardSize { edge_length })
    }
}

/// A square Othello board stored in row-major order: cell `row * edge_length + col`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    edge_length: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    /// The standard 8×8 starting position.
    fn default() -> Self {
        Self::starting(DEFAULT_EDGE_LENGTH)
    }
}

impl Board {
    /// Construct a board with no pieces on it.
    pub fn empty(edge_length: usize) -> Result<Self, GameError> {
        check_edge_length(edge_length)?;
        Ok(Self {
            edge_length,
            cells: vec![Cell::Empty; edge_length * edge_length],
        })
    }

    /// Construct the starting position: a 2×2 center block with each player
    /// holding one diagonal, White on the upper-left to lower-right diagonal.
    pub fn new(edge_length: usize) -> Result<Self, GameError> {
        check_edge_length(edge_length)?;
        Ok(Self::starting(edge_length))
    }

    pub(crate) fn starting(edge_length: usize) -> Self {
        let mut cells = vec![Cell::Empty; edge_length * edge_length];
        let upper = (edge_length / 2 - 1) * (edge_length + 1);
        let lower = (edge_length / 2) * (edge_length + 1);

        cells[upper] = Cell::White;
        cells[lower] = Cell::White;
        cells[upper + 1] = Cell::Black;
        cells[lower - 1] = Cell::Black;

        Self { edge_length, cells }
    }

    #[inline]
    pub fn edge_length(&self) -> usize {
        self.edge_length
    }

    #[inline]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `index`, or `None` if it is off the board.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Overwrite the cell at `index`. Panics if `index` is off the board.
    #[inline]
    pub fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Indices of every cell holding one of `player`'s pieces, in ascending order.
    pub fn owned_by(&self, player: Player) -> impl Iterator<Item = usize> + '_ {
        let piece = Cell::from(player);
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == piece)
            .map(|(index, _)| index)
    }

    pub fn count(&self, player: Player) -> usize {
        self.owned_by(player).count()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Count both players' pieces from scratch.
    pub fn counts(&self) -> Counts {
        Counts {
            black: self.count(Player::Black),
            white: self.count(Player::White),
        }
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "unknown board symbol '{}'", symbol)]
    UnknownSymbol { symbol: char },

    #[display(fmt = "{} cells do not form a square board", cells)]
    NotSquare { cells: usize },

    #[display(fmt = "unsupported board edge length {}", edge_length)]
    InvalidBoardSize { edge_length: usize },
}

/// Parse a board from one symbol per cell in row-major order, ignoring whitespace:
/// `.` is empty, `X`, `#` or `B` is Black, `O` or `W` is White.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|symbol| match symbol {
                '.' => Ok(Cell::Empty),
                'X' | '#' | 'B' => Ok(Cell::Black),
                'O' | 'W' => Ok(Cell::White),
                _ => Err(ParseBoardError::UnknownSymbol { symbol }),
            })
            .collect::<Result<Vec<Cell>, _>>()?;

        let edge_length = (0..=cells.len())
            .find(|n| n * n >= cells.len())
            .unwrap_or_default();
        if edge_length * edge_length != cells.len() {
            return Err(ParseBoardError::NotSquare { cells: cells.len() });
        }
        if !is_valid_edge_length(edge_length) {
            return Err(ParseBoardError::InvalidBoardSize { edge_length });
        }

        Ok(Self { edge_length, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_not() {
        assert_eq!(!Player::Black, Player::White);
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(Player::default(), Player::Black);
    }

    #[test]
    fn starting_position_8x8() {
        let board = Board::new(8).unwrap();
        assert_eq!(board[27], Cell::White);
        assert_eq!(board[36], Cell::White);
        assert_eq!(board[28], Cell::Black);
        assert_eq!(board[35], Cell::Black);
        assert_eq!(board.counts(), Counts { black: 2, white: 2 });
        assert_eq!(board.count_empty(), 60);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn starting_position_6x6() {
        let board = Board::new(6).unwrap();
        assert_eq!(board[14], Cell::White);
        assert_eq!(board[21], Cell::White);
        assert_eq!(board[15], Cell::Black);
        assert_eq!(board[20], Cell::Black);
    }

    #[test]
    fn rejects_bad_sizes() {
        for &n in &[0, 2, 3, 5, 7, 28] {
            assert_eq!(
                Board::new(n),
                Err(GameError::InvalidBoardSize { edge_length: n })
            );
        }
        assert!(Board::new(4).is_ok());
        assert!(Board::new(26).is_ok());
    }

    #[test]
    fn counts_track_players() {
        let mut counts = Counts::default();
        counts.add(Player::Black, 5);
        counts.add(Player::White, 2);
        counts.remove(Player::Black, 1);
        assert_eq!(counts.of(Player::Black), 4);
        assert_eq!(counts.of(Player::White), 2);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn parse_board() {
        let board: Board = "
            . . . .
            . O X .
            . X W .
            . . . #
        "
        .parse()
        .unwrap();
        assert_eq!(board.edge_length(), 4);
        assert_eq!(board[5], Cell::White);
        assert_eq!(board[6], Cell::Black);
        assert_eq!(board[10], Cell::White);
        assert_eq!(board[15], Cell::Black);
        assert_eq!(board.owned_by(Player::Black).collect::<Vec<_>>(), vec![6, 9, 15]);
    }

    #[test]
    fn parse_board_fail() {
        assert_eq!(
            "....Z...........".parse::<Board>(),
            Err(ParseBoardError::UnknownSymbol { symbol: 'Z' })
        );
        assert_eq!(
            "..........".parse::<Board>(),
            Err(ParseBoardError::NotSquare { cells: 10 })
        );
        assert_eq!(
            ".........".parse::<Board>(),
            Err(ParseBoardError::InvalidBoardSize { edge_length: 3 })
        );
        assert_eq!(
            "".parse::<Board>(),
            Err(ParseBoardError::InvalidBoardSize { edge_length: 0 })
        );
    }
}
