use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::error::Error;
use crate::movegen::piece_type::*;
use crate::piece::{PieceId, PieceKind};
use crate::player::Player;
use crate::square::Square;

use arrayvec::ArrayVec;
use std::iter::ExactSizeIterator;

/// The destination squares of a single piece.
///
/// 27 is the most any one piece can reach: a queen on a central square of
/// an otherwise empty board.
pub type MoveList = ArrayVec<Square, 27>;

/// Every square the given piece may move to on this board.
///
/// A pure query: the board is not mutated, and the returned order is
/// deterministic (pawns: two-square advance, one-square advance, captures;
/// sliders: ray by ray outward).
///
/// Fails with `Error::PieceNotOnBoard` when the id does not name a live
/// piece, surfacing the caller's bug instead of masking it as "no moves".
///
/// ```
/// use mailbox_chess::{available_moves, Board, Square};
/// use std::str::FromStr;
///
/// let board = Board::default();
/// let e2 = Square::from_str("e2").unwrap();
/// let pawn = board.piece_id_on(e2).unwrap();
///
/// let moves = available_moves(&board, pawn).unwrap();
/// assert_eq!(moves.as_slice(), &[
///     Square::from_str("e4").unwrap(),
///     Square::from_str("e3").unwrap(),
/// ]);
/// ```
pub fn available_moves(board: &Board, id: PieceId) -> Result<MoveList, Error> {
    let from = board.find_piece(id)?;
    let piece = board.get_piece(from).ok_or(Error::PieceNotOnBoard)?;

    let mut moves = MoveList::new();
    match piece.kind {
        PieceKind::Pawn => PawnType::destinations(board, from, piece.player, &mut moves),
        PieceKind::Knight => KnightType::destinations(board, from, piece.player, &mut moves),
        PieceKind::Bishop => BishopType::destinations(board, from, piece.player, &mut moves),
        PieceKind::Rook => RookType::destinations(board, from, piece.player, &mut moves),
        PieceKind::Queen => QueenType::destinations(board, from, piece.player, &mut moves),
        PieceKind::King => KingType::destinations(board, from, piece.player, &mut moves),
    }
    Ok(moves)
}

/// An iterator over every move one player has on a board.
///
/// Enumeration happens up front against a snapshot of the position; the
/// iterator itself never touches the board again.
///
/// # Examples
///
/// ```
/// use mailbox_chess::{Board, MoveGen, Player};
///
/// // create a board with the initial position
/// let board = Board::default();
///
/// // create an iterable
/// let iterable = MoveGen::new(&board, Player::White);
///
/// // 16 pawn moves and 4 knight moves
/// assert_eq!(iterable.len(), 20);
/// ```
pub struct MoveGen {
    moves: Vec<ChessMove>,
    index: usize,
}

impl MoveGen {
    /// Enumerate all moves for `player` in the given position.
    pub fn new(board: &Board, player: Player) -> MoveGen {
        let mut moves = Vec::new();
        for (id, piece, from) in board.pieces() {
            if piece.player != player {
                continue;
            }
            // Ids straight out of the board's own iterator are live.
            if let Ok(dests) = available_moves(board, id) {
                for dest in dests {
                    moves.push(ChessMove::new(from, dest));
                }
            }
        }
        MoveGen { moves, index: 0 }
    }
}

impl ExactSizeIterator for MoveGen {
    /// Give the exact number of moves not yet yielded
    fn len(&self) -> usize {
        self.moves.len() - self.index
    }
}

impl Iterator for MoveGen {
    type Item = ChessMove;

    /// Give a size_hint to some functions that need it
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    /// Find the next chess move.
    fn next(&mut self) -> Option<ChessMove> {
        let result = self.moves.get(self.index).copied();
        if result.is_some() {
            self.index += 1;
        }
        result
    }
}

#[cfg(test)]
use crate::board_builder::BoardBuilder;
#[cfg(test)]
use std::collections::HashSet;
#[cfg(test)]
use std::str::FromStr;

#[cfg(test)]
fn sq(s: &str) -> Square {
    Square::from_str(s).unwrap()
}

#[cfg(test)]
fn moves_of(board: &Board, square: Square) -> MoveList {
    let id = board.piece_id_on(square).expect("square should be occupied");
    available_moves(board, id).unwrap()
}

// ============================================================
// Pawn movement
// ============================================================

#[test]
fn white_pawn_on_start_row_has_two_advances_in_order() {
    let from = Square::at(1, 4).unwrap();
    let board: Board = BoardBuilder::new()
        .piece(from, PieceKind::Pawn, Player::White)
        .into();

    let moves = moves_of(&board, from);
    assert_eq!(
        moves.as_slice(),
        &[Square::at(3, 4).unwrap(), Square::at(2, 4).unwrap()]
    );
}

#[test]
fn black_pawn_on_start_row_advances_downward() {
    let from = Square::at(6, 3).unwrap();
    let board: Board = BoardBuilder::new()
        .piece(from, PieceKind::Pawn, Player::Black)
        .into();

    let moves = moves_of(&board, from);
    assert_eq!(
        moves.as_slice(),
        &[Square::at(4, 3).unwrap(), Square::at(5, 3).unwrap()]
    );
}

#[test]
fn pawn_off_start_row_has_single_advance() {
    let from = Square::at(3, 4).unwrap();
    let board: Board = BoardBuilder::new()
        .piece(from, PieceKind::Pawn, Player::White)
        .into();

    let moves = moves_of(&board, from);
    assert_eq!(moves.as_slice(), &[Square::at(4, 4).unwrap()]);
}

#[test]
fn blocked_pawn_has_no_advances() {
    // A blocker one square ahead kills the single advance and, from the
    // start row, the two-square advance with it.
    let from = Square::at(1, 4).unwrap();
    let board: Board = BoardBuilder::new()
        .piece(from, PieceKind::Pawn, Player::White)
        .piece(Square::at(2, 4).unwrap(), PieceKind::Knight, Player::Black)
        .into();

    assert!(moves_of(&board, from).is_empty());
}

#[test]
fn pawn_two_square_advance_needs_both_squares_empty() {
    // Blocker on the target square only: the one-square advance survives.
    let from = Square::at(1, 4).unwrap();
    let board: Board = BoardBuilder::new()
        .piece(from, PieceKind::Pawn, Player::White)
        .piece(Square::at(3, 4).unwrap(), PieceKind::Rook, Player::Black)
        .into();

    let moves = moves_of(&board, from);
    assert_eq!(moves.as_slice(), &[Square::at(2, 4).unwrap()]);
}

#[test]
fn pawn_on_end_rank_has_no_moves() {
    let white_end = Square::at(7, 2).unwrap();
    let black_end = Square::at(0, 5).unwrap();
    let board: Board = BoardBuilder::new()
        .piece(white_end, PieceKind::Pawn, Player::White)
        .piece(black_end, PieceKind::Pawn, Player::Black)
        .into();

    assert!(moves_of(&board, white_end).is_empty());
    assert!(moves_of(&board, black_end).is_empty());
}

#[test]
fn pawn_captures_diagonally_but_not_friends() {
    let from = Square::at(3, 3).unwrap();
    let enemy = Square::at(4, 2).unwrap();
    let friend = Square::at(4, 4).unwrap();
    let board: Board = BoardBuilder::new()
        .piece(from, PieceKind::Pawn, Player::White)
        .piece(enemy, PieceKind::Knight, Player::Black)
        .piece(friend, PieceKind::Bishop, Player::White)
        .into();

    let moves = moves_of(&board, from);
    assert_eq!(moves.as_slice(), &[Square::at(4, 3).unwrap(), enemy]);
}

#[test]
fn pawn_cannot_capture_straight_ahead() {
    let from = Square::at(3, 4).unwrap();
    let board: Board = BoardBuilder::new()
        .piece(from, PieceKind::Pawn, Player::White)
        .piece(Square::at(4, 4).unwrap(), PieceKind::Pawn, Player::Black)
        .into();

    assert!(moves_of(&board, from).is_empty());
}

// ============================================================
// Leapers: knight and king
// ============================================================

#[test]
fn knight_in_the_open_has_eight_moves() {
    let from = sq("d4");
    let board: Board = BoardBuilder::new()
        .piece(from, PieceKind::Knight, Player::White)
        .into();

    let moves: HashSet<Square> = moves_of(&board, from).into_iter().collect();
    let expected: HashSet<Square> = ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"]
        .iter()
        .map(|s| sq(s))
        .collect();
    assert_eq!(moves, expected);
}

#[test]
fn knight_in_the_corner_stays_on_the_board() {
    let from = sq("a1");
    let board: Board = BoardBuilder::new()
        .piece(from, PieceKind::Knight, Player::Black)
        .into();

    let moves: HashSet<Square> = moves_of(&board, from).into_iter().collect();
    let expected: HashSet<Square> = [sq("b3"), sq("c2")].into_iter().collect();
    assert_eq!(moves, expected);
}

#[test]
fn knight_skips_friendly_squares_and_captures_enemies() {
    let from = sq("d4");
    let board: Board = BoardBuilder::new()
        .piece(from, PieceKind::Knight, Player::White)
        .piece(sq("b3"), PieceKind::Pawn, Player::White)
        .piece(sq("f5"), PieceKind::Rook, Player::Black)
        .into();

    let moves: HashSet<Square> = moves_of(&board, from).into_iter().collect();
    assert!(!moves.contains(&sq("b3")));
    assert!(moves.contains(&sq("f5")));
    assert_eq!(moves.len(), 7);
}

#[test]
fn king_moves_to_adjacent_squares_only() {
    let center = sq("e5");
    let corner = sq("h8");
    let board: Board = BoardBuilder::new()
        .piece(center, PieceKind::King, Player::White)
        .piece(corner, PieceKind::King, Player::Black)
        .into();

    assert_eq!(moves_of(&board, center).len(), 8);
    let corner_moves: HashSet<Square> = moves_of(&board, corner).into_iter().collect();
    let expected: HashSet<Square> = [sq("g7"), sq("g8"), sq("h7")].into_iter().collect();
    assert_eq!(corner_moves, expected);
}

#[test]
fn king_never_lands_on_a_friend() {
    let from = sq("e1");
    let board: Board = BoardBuilder::new()
        .piece(from, PieceKind::King, Player::White)
        .piece(sq("d1"), PieceKind::Queen, Player::White)
        .piece(sq("e2"), PieceKind::Pawn, Player::Black)
        .into();

    let moves: HashSet<Square> = moves_of(&board, from).into_iter().collect();
    assert!(!moves.contains(&sq("d1")));
    assert!(moves.contains(&sq("e2")));
}

// ============================================================
// Sliders: rook, bishop, queen
// ============================================================

#[test]
fn rook_on_empty_board_has_fourteen_moves() {
    for from in [sq("a1"), sq("d4"), sq("h8")] {
        let board: Board = BoardBuilder::new()
            .piece(from, PieceKind::Rook, Player::White)
            .into();
        assert_eq!(moves_of(&board, from).len(), 14, "rook on {}", from);
    }
}

#[test]
fn rook_ray_stops_at_first_occupant() {
    let from = sq("a1");
    let board: Board = BoardBuilder::new()
        .piece(from, PieceKind::Rook, Player::White)
        .piece(sq("a4"), PieceKind::Pawn, Player::White)
        .piece(sq("d1"), PieceKind::Pawn, Player::Black)
        .into();

    let moves: HashSet<Square> = moves_of(&board, from).into_iter().collect();
    let expected: HashSet<Square> = [sq("a2"), sq("a3"), sq("b1"), sq("c1"), sq("d1")]
        .into_iter()
        .collect();
    // The friendly blocker on a4 is excluded, the enemy on d1 is a capture,
    // and neither ray continues past its blocker.
    assert_eq!(moves, expected);
}

#[test]
fn bishop_ray_blocking_and_capture() {
    let from = sq("c1");
    let board: Board = BoardBuilder::new()
        .piece(from, PieceKind::Bishop, Player::Black)
        .piece(sq("e3"), PieceKind::Pawn, Player::White)
        .piece(sq("a3"), PieceKind::Pawn, Player::Black)
        .into();

    let moves: HashSet<Square> = moves_of(&board, from).into_iter().collect();
    let expected: HashSet<Square> = [sq("b2"), sq("d2"), sq("e3")].into_iter().collect();
    assert_eq!(moves, expected);
}

#[test]
fn queen_in_the_open_has_twenty_seven_moves() {
    let from = sq("d4");
    let board: Board = BoardBuilder::new()
        .piece(from, PieceKind::Queen, Player::White)
        .into();

    let moves = moves_of(&board, from);
    assert_eq!(moves.len(), 27);
    // Union of the rook and bishop move sets from the same square.
    let rook_board: Board = BoardBuilder::new()
        .piece(from, PieceKind::Rook, Player::White)
        .into();
    let bishop_board: Board = BoardBuilder::new()
        .piece(from, PieceKind::Bishop, Player::White)
        .into();
    let queen: HashSet<Square> = moves.into_iter().collect();
    let union: HashSet<Square> = moves_of(&rook_board, from)
        .into_iter()
        .chain(moves_of(&bishop_board, from))
        .collect();
    assert_eq!(queen, union);
}

// ============================================================
// Failure conditions and whole-board enumeration
// ============================================================

#[test]
fn moves_of_a_captured_piece_fail() {
    let mut board = Board::new();
    let d4 = sq("d4");
    let d8 = sq("d8");
    let victim = board.place_piece(d4, PieceKind::Knight.into_piece(Player::Black));
    board.place_piece(d8, PieceKind::Rook.into_piece(Player::White));

    board.move_piece(d8, d4).unwrap();
    assert_eq!(available_moves(&board, victim), Err(Error::PieceNotOnBoard));
}

#[test]
fn movegen_counts_twenty_opening_moves_per_side() {
    let board = Board::default();
    let white: Vec<ChessMove> = MoveGen::new(&board, Player::White).collect();
    assert_eq!(white.len(), 20);
    assert_eq!(MoveGen::new(&board, Player::Black).len(), 20);
}

#[test]
fn movegen_len_tracks_iteration() {
    let board = Board::default();
    let mut iterable = MoveGen::new(&board, Player::White);
    assert_eq!(iterable.len(), 20);
    iterable.next().unwrap();
    assert_eq!(iterable.len(), 19);
    assert_eq!(iterable.count(), 19);
}

#[test]
fn movegen_on_an_empty_board_is_empty() {
    let board = Board::new();
    assert_eq!(MoveGen::new(&board, Player::White).len(), 0);
}

#[test]
fn movegen_moves_come_from_the_requested_player() {
    let board: Board = BoardBuilder::new()
        .piece(sq("a1"), PieceKind::Rook, Player::White)
        .piece(sq("h8"), PieceKind::Rook, Player::Black)
        .into();

    for m in MoveGen::new(&board, Player::Black) {
        assert_eq!(m.get_source(), sq("h8"));
    }
    assert_eq!(MoveGen::new(&board, Player::Black).len(), 14);
}

#[test]
fn available_moves_never_mutate_the_board() {
    let board = Board::default();
    let snapshot = board.clone();
    for (id, _, _) in board.pieces() {
        available_moves(&board, id).unwrap();
    }
    assert_eq!(board, snapshot);
}
