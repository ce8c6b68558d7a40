use std::ops::Not;

/// The side owning a piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    White,
    Black,
}

/// How many players are there?
pub const NUM_PLAYERS: usize = 2;

/// List all players.
pub const ALL_PLAYERS: [Player; NUM_PLAYERS] = [Player::White, Player::Black];

impl Player {
    /// Convert the `Player` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    /// Which way do my pawns advance? +1 row for white, -1 for black.
    #[inline]
    pub fn pawn_direction(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// The row my pawns start on, where the two-square advance is available.
    #[inline]
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Player::White => 1,
            Player::Black => 6,
        }
    }

    /// The far rank, past which my pawns have no forward move.
    #[inline]
    pub fn pawn_end_row(self) -> u8 {
        match self {
            Player::White => 7,
            Player::Black => 0,
        }
    }
}

impl Not for Player {
    type Output = Player;

    /// Get the other player.
    #[inline]
    fn not(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent() {
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(!Player::Black, Player::White);
    }

    #[test]
    fn pawn_geometry() {
        assert_eq!(Player::White.pawn_direction(), 1);
        assert_eq!(Player::Black.pawn_direction(), -1);
        assert_eq!(Player::White.pawn_start_row(), 1);
        assert_eq!(Player::Black.pawn_start_row(), 6);
        assert_eq!(Player::White.pawn_end_row(), 7);
        assert_eq!(Player::Black.pawn_end_row(), 0);
    }
}
