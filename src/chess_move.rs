use crate::error::Error;
use crate::square::Square;

use std::fmt;
use std::str::FromStr;

/// Represent a chess move: a source square and a destination square.
///
/// Promotion, castling and en passant do not exist in this rule set, so a
/// move is nothing more than the pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChessMove {
    source: Square,
    dest: Square,
}

impl ChessMove {
    /// Create a new chess move.
    #[inline]
    pub fn new(source: Square, dest: Square) -> ChessMove {
        ChessMove { source, dest }
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }
}

impl fmt::Display for ChessMove {
    /// Coordinate notation, e.g. "e2e4".
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

impl FromStr for ChessMove {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 {
            return Err(Error::InvalidSquare);
        }
        let source = s.get(..2).ok_or(Error::InvalidSquare)?;
        let dest = s.get(2..).ok_or(Error::InvalidSquare)?;
        Ok(ChessMove::new(
            Square::from_str(source)?,
            Square::from_str(dest)?,
        ))
    }
}

#[test]
fn coordinate_notation_round_trips() {
    let m = ChessMove::new(Square::at(1, 4).unwrap(), Square::at(3, 4).unwrap());
    assert_eq!(m.to_string(), "e2e4");
    assert_eq!(ChessMove::from_str("e2e4"), Ok(m));
    assert!(ChessMove::from_str("e2e").is_err());
    assert!(ChessMove::from_str("e2x4").is_err());
}
