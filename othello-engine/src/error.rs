use derive_more::{Display, Error};

/// A recoverable error returned to the caller of a [`Game`](crate::Game) operation.
/// The game state is unchanged whenever one of these is returned.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum GameError {
    /// The requested cell is not in the current legal-move set.
    #[display(fmt = "cell {} is not a legal move", index)]
    InvalidMove { index: usize },

    /// There is no recorded move to reverse.
    #[display(fmt = "no move available to undo")]
    NoUndoAvailable,

    /// Boards must have an even edge length between 4 and 26.
    #[display(fmt = "unsupported board edge length {}", edge_length)]
    InvalidBoardSize { edge_length: usize },
}
