use crate::player::Player;

/// The kind of a chess piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// How many piece kinds are there?
pub const NUM_PIECE_KINDS: usize = 6;

/// An array representing each piece kind, in order of ascending value.
pub const ALL_PIECE_KINDS: [PieceKind; NUM_PIECE_KINDS] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    /// Pair this kind with an owner.
    #[inline]
    pub fn into_piece(self, player: Player) -> Piece {
        Piece::new(self, player)
    }

    /// Convert the `PieceKind` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// A piece on the board: a kind owned by a player for its whole lifetime.
///
/// A `Piece` is plain value data. It carries no coordinates; the board owns
/// the square-to-piece mapping, and a piece's position is always derived by
/// looking it up there (see `Board::find_piece`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub player: Player,
}

impl Piece {
    pub fn new(kind: PieceKind, player: Player) -> Piece {
        Piece { kind, player }
    }

    /// The FEN letter for this piece: uppercase for white, lowercase for black.
    pub fn to_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.player {
            Player::White => c.to_ascii_uppercase(),
            Player::Black => c,
        }
    }

    /// Parse a FEN piece letter. `None` for anything that is not one.
    pub fn from_char(c: char) -> Option<Piece> {
        let player = if c.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece { kind, player })
    }
}

/// An opaque handle identifying one piece for its lifetime on one board.
///
/// Two white pawns compare equal as `Piece` values, so reverse lookup
/// (`Board::find_piece`) goes through this id instead. An id goes dead when
/// its piece is captured and is never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PieceId(pub(crate) usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_letters_round_trip() {
        for kind in ALL_PIECE_KINDS {
            for player in crate::player::ALL_PLAYERS {
                let piece = Piece::new(kind, player);
                assert_eq!(Piece::from_char(piece.to_char()), Some(piece));
            }
        }
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('1'), None);
    }

    #[test]
    fn letter_case_encodes_player() {
        assert_eq!(Piece::new(PieceKind::King, Player::White).to_char(), 'K');
        assert_eq!(Piece::new(PieceKind::Knight, Player::Black).to_char(), 'n');
    }
}
