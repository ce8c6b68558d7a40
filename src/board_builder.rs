use crate::board::Board;
use crate::error::Error;
use crate::piece::{Piece, PieceKind};
use crate::player::Player;
use crate::square::{Square, NUM_SQUARES};

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Represents a chess position under construction.
///
/// This structure is useful in the following cases:
/// * You are trying to set up a board manually in code.
/// * You want to convert between a position and its FEN placement field.
/// * You want to display a position.
///
/// Nothing is validated here; a builder holds piece values only and hands
/// out no [`crate::PieceId`]s. Converting into a [`Board`] places the pieces
/// and mints their ids.
///
/// ```
/// use mailbox_chess::{Board, BoardBuilder, PieceKind, Player, Square};
///
/// let mut position = BoardBuilder::new();
/// position.piece(Square::at(0, 0).unwrap(), PieceKind::King, Player::White);
/// position.piece(Square::at(7, 0).unwrap(), PieceKind::King, Player::Black);
///
/// // You can index the position by the square:
/// assert_eq!(
///     position[Square::at(0, 0).unwrap()],
///     Some(PieceKind::King.into_piece(Player::White)),
/// );
///
/// // One liners are possible with the builder pattern.
/// let board: Board = BoardBuilder::new()
///     .piece(Square::at(0, 0).unwrap(), PieceKind::King, Player::White)
///     .piece(Square::at(7, 0).unwrap(), PieceKind::King, Player::Black)
///     .into();
/// ```
#[derive(Copy, Clone)]
pub struct BoardBuilder {
    pieces: [Option<Piece>; NUM_SQUARES],
}

impl BoardBuilder {
    /// Construct a new, empty, BoardBuilder. No pieces are on the board.
    pub fn new() -> BoardBuilder {
        BoardBuilder {
            pieces: [None; NUM_SQUARES],
        }
    }

    /// Set up a board with everything pre-loaded.
    ///
    /// ```
    /// use mailbox_chess::{Board, BoardBuilder, PieceKind, Player, Square};
    ///
    /// let board: Board = BoardBuilder::setup(&[
    ///     (Square::at(0, 0).unwrap(), PieceKind::King, Player::White),
    ///     (Square::at(7, 7).unwrap(), PieceKind::King, Player::Black),
    /// ])
    /// .into();
    /// ```
    pub fn setup<'a>(
        pieces: impl IntoIterator<Item = &'a (Square, PieceKind, Player)>,
    ) -> BoardBuilder {
        let mut result = BoardBuilder::new();
        for &(square, kind, player) in pieces.into_iter() {
            result.pieces[square.to_index()] = Some(Piece::new(kind, player));
        }
        result
    }

    /// Set a piece on a square.
    ///
    /// Note that this can and will overwrite another piece on the square if
    /// need be.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn piece(&mut self, square: Square, kind: PieceKind, player: Player) -> &mut Self {
        self[square] = Some(Piece::new(kind, player));
        self
    }

    /// Clear a square on the board.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn clear_square(&mut self, square: Square) -> &mut Self {
        self[square] = None;
        self
    }
}

impl Index<Square> for BoardBuilder {
    type Output = Option<Piece>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.pieces[index.to_index()]
    }
}

impl IndexMut<Square> for BoardBuilder {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.pieces[index.to_index()]
    }
}

impl fmt::Display for BoardBuilder {
    /// Format as the FEN piece-placement field, rank 8 first.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in (0..8u8).rev() {
            let mut count = 0;
            for col in 0..8u8 {
                let index = row as usize * 8 + col as usize;
                match self.pieces[index] {
                    Some(piece) => {
                        if count != 0 {
                            write!(f, "{}", count)?;
                            count = 0;
                        }
                        write!(f, "{}", piece.to_char())?;
                    }
                    None => count += 1,
                }
            }
            if count != 0 {
                write!(f, "{}", count)?;
            }
            if row != 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl Default for BoardBuilder {
    fn default() -> BoardBuilder {
        BoardBuilder::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap()
    }
}

impl FromStr for BoardBuilder {
    type Err = Error;

    /// Parse a FEN piece-placement field, rank 8 first.
    ///
    /// A full FEN line is tolerated: everything after the first space is
    /// ignored, since the board tracks no turn or castling state.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidFen {
            fen: value.to_string(),
        };

        let placement = value.split(' ').next().ok_or_else(invalid)?;
        let mut builder = BoardBuilder::new();
        let mut row: i8 = 7;
        let mut col: i8 = 0;

        for x in placement.chars() {
            match x {
                '/' => {
                    if col != 8 || row == 0 {
                        return Err(invalid());
                    }
                    row -= 1;
                    col = 0;
                }
                '1'..='8' => {
                    col += x as i8 - '0' as i8;
                    if col > 8 {
                        return Err(invalid());
                    }
                }
                _ => {
                    let piece = Piece::from_char(x).ok_or_else(invalid)?;
                    let square = Square::at(row, col).map_err(|_| invalid())?;
                    builder[square] = Some(piece);
                    col += 1;
                }
            }
        }

        if row != 0 || col != 8 {
            return Err(invalid());
        }
        Ok(builder)
    }
}

impl From<&BoardBuilder> for Board {
    fn from(builder: &BoardBuilder) -> Self {
        let mut board = Board::new();
        for square in Square::all() {
            if let Some(piece) = builder[square] {
                board.place_piece(square, piece);
            }
        }
        board
    }
}

impl From<&mut BoardBuilder> for Board {
    fn from(builder: &mut BoardBuilder) -> Self {
        (&*builder).into()
    }
}

impl From<BoardBuilder> for Board {
    fn from(builder: BoardBuilder) -> Self {
        (&builder).into()
    }
}

impl From<&Board> for BoardBuilder {
    fn from(board: &Board) -> Self {
        let mut builder = BoardBuilder::new();
        for (_, piece, square) in board.pieces() {
            builder[square] = Some(piece);
        }
        builder
    }
}

impl From<Board> for BoardBuilder {
    fn from(board: Board) -> Self {
        (&board).into()
    }
}

#[test]
fn check_initial_position() {
    let initial_placement = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
    let builder: BoardBuilder = Board::default().into();
    assert_eq!(format!("{}", builder), initial_placement);

    let pass_through = format!("{}", BoardBuilder::default());
    assert_eq!(pass_through, initial_placement);
}

#[test]
fn placement_round_trips() {
    for placement in [
        "8/8/8/8/8/8/8/8",
        "4k3/8/8/3q4/8/8/8/4K3",
        "r1bqkb1r/pp3ppp/5n2/2ppn1N1/4pP2/1BN1P3/PPPP2PP/R1BQ1RK1",
    ] {
        let builder = BoardBuilder::from_str(placement).unwrap();
        assert_eq!(format!("{}", builder), placement);
    }
}

#[test]
fn full_fen_line_is_tolerated() {
    let board =
        Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    assert_eq!(board, Board::default());
}

#[test]
fn malformed_placement_is_rejected() {
    for bad in [
        "",
        "8/8/8/8/8/8/8",      // too few ranks
        "8/8/8/8/8/8/8/8/8",  // too many ranks
        "9/8/8/8/8/8/8/8",    // rank overflow
        "8/8/8/8/8/8/8/7",    // rank underflow
        "x7/8/8/8/8/8/8/8",   // unknown piece letter
        "44k3/8/8/8/8/8/8/8", // digits past the rank edge
    ] {
        assert!(
            BoardBuilder::from_str(bad).is_err(),
            "accepted bad placement {:?}",
            bad
        );
    }
}

#[test]
fn builder_overwrites_and_clears() {
    let d4 = Square::at(3, 3).unwrap();
    let mut builder = BoardBuilder::new();
    builder
        .piece(d4, PieceKind::Pawn, Player::White)
        .piece(d4, PieceKind::Queen, Player::Black);
    assert_eq!(builder[d4], Some(Piece::new(PieceKind::Queen, Player::Black)));
    builder.clear_square(d4);
    assert_eq!(builder[d4], None);
}
