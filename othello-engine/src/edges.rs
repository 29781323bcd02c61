//! Board geometry: the eight directions a capture can run in, and the
//! per-cell [`EdgeMap`] of directions that leave the board.
//!
//! The edge map is built once per board size and never changes, so move
//! generation can walk a line with [`EdgeMap::step`] without any
//! row/column arithmetic of its own.

use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// One of the eight straight lines out of a cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Every direction, in scan order.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// The singleton set containing this direction.
    #[inline]
    pub fn bit(self) -> DirectionSet {
        DirectionSet(1 << self as u8)
    }

    /// The primitive directions (Right, Left, Up, Down) this direction combines.
    pub fn components(self) -> DirectionSet {
        match self {
            Direction::UpLeft => Direction::Up.bit() | Direction::Left.bit(),
            Direction::UpRight => Direction::Up.bit() | Direction::Right.bit(),
            Direction::DownLeft => Direction::Down.bit() | Direction::Left.bit(),
            Direction::DownRight => Direction::Down.bit() | Direction::Right.bit(),
            primitive => primitive.bit(),
        }
    }

    /// The signed change in cell index for one step on a board `edge_length` wide.
    pub fn delta(self, edge_length: usize) -> isize {
        let row = edge_length as isize;
        match self {
            Direction::Right => 1,
            Direction::Left => -1,
            Direction::Up => -row,
            Direction::Down => row,
            Direction::UpLeft => -row - 1,
            Direction::UpRight => -row + 1,
            Direction::DownLeft => row - 1,
            Direction::DownRight => row + 1,
        }
    }
}

/// A set of [`Direction`]s packed into one bit per direction.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    Not,
)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(0xFF);

    #[inline]
    pub fn contains(self, direction: Direction) -> bool {
        !(self & direction.bit()).is_empty()
    }

    #[inline]
    pub fn intersects(self, other: DirectionSet) -> bool {
        !(self & other).is_empty()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over the members of this set in [`Direction::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.contains(direction))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, |set, direction| set | direction.bit())
    }
}

/// For every cell of an `edge_length`×`edge_length` board, the directions that exit the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EdgeMap {
    edge_length: usize,
    exits: Vec<DirectionSet>,
}

impl EdgeMap {
    /// Build the map for a square board with `edge_length` cells per side.
    pub fn new(edge_length: usize) -> Self {
        let num_cells = edge_length * edge_length;

        // Mark the primitive direction that leaves each border line.
        let mut borders = vec![DirectionSet::EMPTY; num_cells];
        for i in 0..edge_length {
            borders[i] |= Direction::Up.bit();
            borders[num_cells - edge_length + i] |= Direction::Down.bit();
            borders[i * edge_length] |= Direction::Left.bit();
            borders[i * edge_length + edge_length - 1] |= Direction::Right.bit();
        }

        // A diagonal exits wherever either of its components does.
        let exits = borders
            .into_iter()
            .map(|border| {
                Direction::ALL
                    .iter()
                    .copied()
                    .filter(|direction| direction.components().intersects(border))
                    .collect()
            })
            .collect();

        Self { edge_length, exits }
    }

    #[inline]
    pub fn edge_length(&self) -> usize {
        self.edge_length
    }

    /// The directions that leave the board from `index`.
    #[inline]
    pub fn exits(&self, index: usize) -> DirectionSet {
        self.exits[index]
    }

    /// The directions that stay on the board for at least one step from `index`.
    #[inline]
    pub fn usable(&self, index: usize) -> DirectionSet {
        !self.exits[index]
    }

    /// The neighbour of `index` in `direction`, or `None` if that step leaves the board.
    #[inline]
    pub fn step(&self, index: usize, direction: Direction) -> Option<usize> {
        if self.exits[index].contains(direction) {
            return None;
        }
        Some((index as isize + direction.delta(self.edge_length)) as usize)
    }
}
