use crate::board::Board;
use crate::movegen::MoveList;
use crate::piece::PieceKind;
use crate::player::Player;
use crate::square::Square;

/// The movement rule for one piece kind.
///
/// `destinations` is a pure read of the board: it pushes every square the
/// piece on `from` may move to, and never mutates anything. Locating the
/// piece (and failing when it is absent) is the dispatcher's job; by the
/// time a rule runs, `from` is known to hold a piece of the given player.
pub trait PieceType {
    fn is(kind: PieceKind) -> bool;
    fn into_kind() -> PieceKind;
    fn destinations(board: &Board, from: Square, player: Player, moves: &mut MoveList);
}

pub struct PawnType;
pub struct KnightType;
pub struct BishopType;
pub struct RookType;
pub struct QueenType;
pub struct KingType;

const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];
const KING_OFFSETS: [(i8, i8); 8] = QUEEN_DIRS;

/// One fixed jump per offset: in bounds and not friendly-occupied.
/// Knights and kings move this way.
fn leaper_moves(
    board: &Board,
    from: Square,
    player: Player,
    offsets: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(drow, dcol) in offsets {
        if let Ok(to) = from.offset(drow, dcol) {
            if board.get_piece(to).map(|p| p.player) != Some(player) {
                moves.push(to);
            }
        }
    }
}

/// Ray-casting: walk outward along each direction until the board edge or
/// the first occupant. The occupant's square counts only as a capture, and
/// the ray never continues past it.
fn slider_moves(
    board: &Board,
    from: Square,
    player: Player,
    dirs: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(drow, dcol) in dirs {
        for step in 1i8..8 {
            let to = match from.offset(drow * step, dcol * step) {
                Ok(sq) => sq,
                Err(_) => break,
            };
            match board.get_piece(to) {
                None => moves.push(to),
                Some(blocker) => {
                    if blocker.player != player {
                        moves.push(to);
                    }
                    break;
                }
            }
        }
    }
}

impl PieceType for PawnType {
    fn is(kind: PieceKind) -> bool {
        kind == PieceKind::Pawn
    }

    fn into_kind() -> PieceKind {
        PieceKind::Pawn
    }

    /// Pawn movement, in deterministic order: the two-square advance (from
    /// the start row only, and only when both squares ahead are empty), then
    /// the one-square advance, then the two diagonal captures.
    ///
    /// On the far rank a pawn has no moves at all; promotion is out of scope
    /// so the terminal rank simply yields nothing.
    fn destinations(board: &Board, from: Square, player: Player, moves: &mut MoveList) {
        if from.row() == player.pawn_end_row() {
            return;
        }
        let direction = player.pawn_direction();
        let one = match from.offset(direction, 0) {
            Ok(sq) => sq,
            // Unreachable: the far-rank guard above keeps one step in bounds.
            Err(_) => return,
        };

        if from.row() == player.pawn_start_row() {
            if let Ok(two) = from.offset(2 * direction, 0) {
                // The two-square advance needs a clear path: both the
                // jumped-over square and the target must be empty.
                if board.get_piece(two).is_none() && board.get_piece(one).is_none() {
                    moves.push(two);
                }
            }
        }

        // Pawns cannot capture straight ahead.
        if board.get_piece(one).is_none() {
            moves.push(one);
        }

        for dcol in [-1, 1] {
            if let Ok(diag) = from.offset(direction, dcol) {
                if board.get_piece(diag).map(|p| p.player) == Some(!player) {
                    moves.push(diag);
                }
            }
        }
    }
}

impl PieceType for KnightType {
    fn is(kind: PieceKind) -> bool {
        kind == PieceKind::Knight
    }

    fn into_kind() -> PieceKind {
        PieceKind::Knight
    }

    fn destinations(board: &Board, from: Square, player: Player, moves: &mut MoveList) {
        leaper_moves(board, from, player, &KNIGHT_OFFSETS, moves);
    }
}

impl PieceType for BishopType {
    fn is(kind: PieceKind) -> bool {
        kind == PieceKind::Bishop
    }

    fn into_kind() -> PieceKind {
        PieceKind::Bishop
    }

    fn destinations(board: &Board, from: Square, player: Player, moves: &mut MoveList) {
        slider_moves(board, from, player, &BISHOP_DIRS, moves);
    }
}

impl PieceType for RookType {
    fn is(kind: PieceKind) -> bool {
        kind == PieceKind::Rook
    }

    fn into_kind() -> PieceKind {
        PieceKind::Rook
    }

    fn destinations(board: &Board, from: Square, player: Player, moves: &mut MoveList) {
        slider_moves(board, from, player, &ROOK_DIRS, moves);
    }
}

impl PieceType for QueenType {
    fn is(kind: PieceKind) -> bool {
        kind == PieceKind::Queen
    }

    fn into_kind() -> PieceKind {
        PieceKind::Queen
    }

    fn destinations(board: &Board, from: Square, player: Player, moves: &mut MoveList) {
        slider_moves(board, from, player, &QUEEN_DIRS, moves);
    }
}

impl PieceType for KingType {
    fn is(kind: PieceKind) -> bool {
        kind == PieceKind::King
    }

    fn into_kind() -> PieceKind {
        PieceKind::King
    }

    fn destinations(board: &Board, from: Square, player: Player, moves: &mut MoveList) {
        leaper_moves(board, from, player, &KING_OFFSETS, moves);
    }
}
