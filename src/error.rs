use thiserror::Error;

/// Sometimes, bad stuff happens.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A square was requested outside the 8x8 grid
    #[error("square ({row}, {col}) is outside the 8x8 board")]
    OutOfBounds { row: i8, col: i8 },

    /// A move query or relocation was attempted for a piece the board does not hold
    #[error("the piece is not on the board")]
    PieceNotOnBoard,

    /// The FEN placement string is invalid
    #[error("Invalid FEN placement string: {fen}")]
    InvalidFen { fen: String },

    /// An attempt was made to create a square from an invalid string
    #[error("The string specified does not contain a valid algebraic notation square")]
    InvalidSquare,
}
