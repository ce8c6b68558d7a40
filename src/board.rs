use crate::board_builder::BoardBuilder;
use crate::error::Error;
use crate::piece::{Piece, PieceId};
use crate::square::{Square, NUM_SQUARES};

use std::fmt;
use std::str::FromStr;

/// A mailbox representation of a chess board.
///
/// The board owns the square-to-piece mapping and hands out a [`PieceId`]
/// for every piece placed on it. Pieces carry no coordinates of their own;
/// the reverse mapping (id to square) is kept alongside the mailbox so that
/// [`Board::find_piece`] is a plain lookup. When a relocation lands on an
/// occupied square the occupant is captured: its id goes dead and every
/// later query for it fails with [`Error::PieceNotOnBoard`].
///
/// The board carries no turn, castling or en-passant state; whose move it is
/// belongs to the caller.
///
/// ```
/// use mailbox_chess::{Board, PieceKind, Player, Square};
/// use std::str::FromStr;
///
/// let board = Board::default();
/// let e2 = Square::from_str("e2").unwrap();
/// let pawn = board.get_piece(e2).unwrap();
/// assert_eq!(pawn.kind, PieceKind::Pawn);
/// assert_eq!(pawn.player, Player::White);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    squares: [Option<PieceId>; NUM_SQUARES],
    // Indexed by PieceId. A captured piece keeps its slot but both entries
    // go to None; ids are never reused.
    pieces: Vec<Option<Piece>>,
    positions: Vec<Option<Square>>,
}

/// Construct the initial position.
impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").expect("Valid Position")
    }
}

impl Board {
    /// Construct a new `Board` that is completely empty.
    /// Note: This does NOT give you the initial position.  Just a blank slate.
    pub fn new() -> Board {
        Board {
            squares: [None; NUM_SQUARES],
            pieces: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Place a piece on a square, returning the handle that identifies it
    /// from now on. Overwrites (captures) whatever occupied the square.
    pub fn place_piece(&mut self, square: Square, piece: Piece) -> PieceId {
        if let Some(captured) = self.squares[square.to_index()] {
            self.remove(captured);
        }
        let id = PieceId(self.pieces.len());
        self.pieces.push(Some(piece));
        self.positions.push(Some(square));
        self.squares[square.to_index()] = Some(id);
        id
    }

    /// The piece occupying a square, if any.
    #[inline]
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        // Mailbox entries always point at live arena slots.
        self.piece_id_on(square).and_then(|id| self.pieces[id.0])
    }

    /// The handle of the piece occupying a square, if any.
    #[inline]
    pub fn piece_id_on(&self, square: Square) -> Option<PieceId> {
        self.squares[square.to_index()]
    }

    /// Reverse lookup: where is this piece?
    ///
    /// Fails with `Error::PieceNotOnBoard` for a captured piece or an id
    /// minted by a different board, rather than masking the caller's bug
    /// with an empty answer.
    #[inline]
    pub fn find_piece(&self, id: PieceId) -> Result<Square, Error> {
        self.positions
            .get(id.0)
            .copied()
            .flatten()
            .ok_or(Error::PieceNotOnBoard)
    }

    /// Relocate the piece on `from` to `to`, capturing whatever occupied the
    /// destination. Fails with `Error::PieceNotOnBoard` when `from` is empty.
    ///
    /// No movement-rule validation happens here; whether `to` is in the
    /// piece's available moves is the caller's responsibility.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), Error> {
        let id = self.piece_id_on(from).ok_or(Error::PieceNotOnBoard)?;
        if to != from {
            if let Some(captured) = self.squares[to.to_index()] {
                self.remove(captured);
            }
            self.squares[from.to_index()] = None;
            self.squares[to.to_index()] = Some(id);
            self.positions[id.0] = Some(to);
        }
        Ok(())
    }

    /// Move a piece, identified by its handle, to the given square.
    ///
    /// Locates the piece via the reverse lookup, then relocates it. Like
    /// [`Board::move_piece`], this does not check `target` against the
    /// piece's available moves.
    pub fn move_to(&mut self, id: PieceId, target: Square) -> Result<(), Error> {
        let current = self.find_piece(id)?;
        self.move_piece(current, target)
    }

    /// Iterate over every piece on the board as `(id, piece, square)`.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, Piece, Square)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(move |(i, piece)| {
                let piece = (*piece)?;
                let square = self.positions[i]?;
                Some((PieceId(i), piece, square))
            })
    }

    fn remove(&mut self, id: PieceId) {
        if let Some(square) = self.positions[id.0] {
            self.squares[square.to_index()] = None;
        }
        self.positions[id.0] = None;
        self.pieces[id.0] = None;
    }
}

impl PartialEq for Board {
    /// Two boards are equal when every square holds the same piece value.
    /// Piece identities are per-board and do not take part.
    fn eq(&self, other: &Board) -> bool {
        Square::all().all(|sq| self.get_piece(sq) == other.get_piece(sq))
    }
}

impl Eq for Board {}

impl FromStr for Board {
    type Err = Error;

    /// Construct a board from a FEN piece-placement field.
    ///
    /// A full FEN line is tolerated; only the placement field is read.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Board::from(&BoardBuilder::from_str(value)?))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", BoardBuilder::from(self))
    }
}

#[cfg(test)]
use crate::piece::PieceKind;
#[cfg(test)]
use crate::player::Player;

#[test]
fn place_and_look_up() {
    let mut board = Board::new();
    let e4 = Square::at(3, 4).unwrap();
    let rook = Piece::new(PieceKind::Rook, Player::White);

    let id = board.place_piece(e4, rook);
    assert_eq!(board.get_piece(e4), Some(rook));
    assert_eq!(board.find_piece(id), Ok(e4));
}

#[test]
fn move_piece_relocates() {
    let mut board = Board::new();
    let a1 = Square::at(0, 0).unwrap();
    let a8 = Square::at(7, 0).unwrap();
    let id = board.place_piece(a1, Piece::new(PieceKind::Rook, Player::White));

    board.move_piece(a1, a8).unwrap();
    assert_eq!(board.get_piece(a1), None);
    assert_eq!(board.find_piece(id), Ok(a8));
}

#[test]
fn move_piece_from_empty_square_fails() {
    let mut board = Board::new();
    let a1 = Square::at(0, 0).unwrap();
    let a2 = Square::at(1, 0).unwrap();
    assert_eq!(board.move_piece(a1, a2), Err(Error::PieceNotOnBoard));
}

#[test]
fn capture_kills_the_occupants_id() {
    let mut board = Board::new();
    let d4 = Square::at(3, 3).unwrap();
    let d8 = Square::at(7, 3).unwrap();
    let rook = board.place_piece(d8, Piece::new(PieceKind::Rook, Player::White));
    let victim = board.place_piece(d4, Piece::new(PieceKind::Knight, Player::Black));

    board.move_piece(d8, d4).unwrap();
    assert_eq!(board.find_piece(victim), Err(Error::PieceNotOnBoard));
    assert_eq!(
        board.get_piece(d4),
        Some(Piece::new(PieceKind::Rook, Player::White))
    );
    assert_eq!(board.find_piece(rook), Ok(d4));
    assert_eq!(board.pieces().count(), 1);
}

#[test]
fn move_to_skips_rule_validation() {
    // a1 to h8 is no rook move, but move_to relocates regardless; rule
    // checking belongs to the caller.
    let mut board = Board::new();
    let a1 = Square::at(0, 0).unwrap();
    let h8 = Square::at(7, 7).unwrap();
    let id = board.place_piece(a1, Piece::new(PieceKind::Rook, Player::White));

    board.move_to(id, h8).unwrap();
    assert_eq!(board.find_piece(id), Ok(h8));
}

#[test]
fn move_to_captured_piece_fails() {
    let mut board = Board::new();
    let d4 = Square::at(3, 3).unwrap();
    let d8 = Square::at(7, 3).unwrap();
    let victim = board.place_piece(d4, Piece::new(PieceKind::Pawn, Player::Black));
    board.place_piece(d8, Piece::new(PieceKind::Queen, Player::White));

    board.move_piece(d8, d4).unwrap();
    assert_eq!(
        board.move_to(victim, Square::at(2, 3).unwrap()),
        Err(Error::PieceNotOnBoard)
    );
}

#[test]
fn default_is_the_starting_position() {
    let board = Board::default();
    assert_eq!(board.pieces().count(), 32);
    assert_eq!(
        board.get_piece(Square::at(0, 4).unwrap()),
        Some(Piece::new(PieceKind::King, Player::White))
    );
    assert_eq!(
        board.get_piece(Square::at(7, 3).unwrap()),
        Some(Piece::new(PieceKind::Queen, Player::Black))
    );
    assert_eq!(board.get_piece(Square::at(4, 4).unwrap()), None);
}

#[test]
fn board_equality_ignores_identity() {
    let mut a = Board::new();
    let mut b = Board::new();
    let e1 = Square::at(0, 4).unwrap();
    // Same final occupancy, different placement history.
    a.place_piece(e1, Piece::new(PieceKind::King, Player::White));
    b.place_piece(Square::at(4, 4).unwrap(), Piece::new(PieceKind::King, Player::White));
    b.move_piece(Square::at(4, 4).unwrap(), e1).unwrap();
    assert_eq!(a, b);
}
