use crate::error::Error;

use std::fmt;
use std::str::FromStr;

/// A single board location, `row` and `col` both in `0..=7`.
///
/// Row 0 is white's home rank (rank 1 in algebraic notation); white pawns
/// move toward increasing rows. Construction is bounds-checked, so a
/// `Square` that exists is always on the board.
///
/// ```
/// use mailbox_chess::Square;
///
/// let e2 = Square::at(1, 4).unwrap();
/// assert_eq!(e2.to_string(), "e2");
/// assert!(Square::at(8, 0).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

/// How many squares are on the board.
pub const NUM_SQUARES: usize = 64;

impl Square {
    /// Construct a square from a (row, col) pair.
    ///
    /// Fails with `Error::OutOfBounds` when either index leaves `0..=7`.
    pub fn at(row: i8, col: i8) -> Result<Square, Error> {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return Err(Error::OutOfBounds { row, col });
        }
        Ok(Square {
            row: row as u8,
            col: col as u8,
        })
    }

    /// The square shifted by the given deltas, with the same bounds contract
    /// as `at`.
    pub fn offset(self, drow: i8, dcol: i8) -> Result<Square, Error> {
        // Saturating keeps an extreme delta an ordinary OutOfBounds error.
        Square::at(
            (self.row as i8).saturating_add(drow),
            (self.col as i8).saturating_add(dcol),
        )
    }

    /// The row of this square, `0..=7`.
    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    /// The column of this square, `0..=7`.
    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// Convert to a `0..64` mailbox index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Convert from a `0..64` mailbox index.
    ///
    /// # Panics
    /// Panics when `index >= 64`.
    #[inline]
    pub fn from_index(index: usize) -> Square {
        assert!(index < NUM_SQUARES);
        Square {
            row: (index / 8) as u8,
            col: (index % 8) as u8,
        }
    }

    /// Iterate over all 64 squares, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col) as char,
            (b'1' + self.row) as char
        )
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(Error::InvalidSquare);
        }
        let col = bytes[0].wrapping_sub(b'a');
        let row = bytes[1].wrapping_sub(b'1');
        if col > 7 || row > 7 {
            return Err(Error::InvalidSquare);
        }
        Ok(Square { row, col })
    }
}

#[test]
fn at_round_trips() {
    for sq in Square::all() {
        assert_eq!(Square::at(sq.row() as i8, sq.col() as i8), Ok(sq));
    }
}

#[test]
fn at_rejects_out_of_bounds() {
    for (row, col) in [(-1, 0), (0, -1), (8, 0), (0, 8), (-3, 9), (127, 127)] {
        assert_eq!(Square::at(row, col), Err(Error::OutOfBounds { row, col }));
    }
}

#[test]
fn offset_stays_on_board() {
    let e2 = Square::at(1, 4).unwrap();
    assert_eq!(e2.offset(1, 0), Square::at(2, 4));
    assert_eq!(e2.offset(-1, -4), Square::at(0, 0));
    assert!(e2.offset(-2, 0).is_err());
    assert!(e2.offset(0, 4).is_err());
}

#[test]
fn index_round_trips() {
    for (i, sq) in Square::all().enumerate() {
        assert_eq!(sq.to_index(), i);
        assert_eq!(Square::from_index(i), sq);
    }
}

#[test]
fn algebraic_notation() {
    assert_eq!(Square::at(0, 0).unwrap().to_string(), "a1");
    assert_eq!(Square::at(7, 7).unwrap().to_string(), "h8");
    assert_eq!(Square::from_str("e4"), Square::at(3, 4));
    assert_eq!(Square::from_str("i1"), Err(Error::InvalidSquare));
    assert_eq!(Square::from_str("e9"), Err(Error::InvalidSquare));
    assert_eq!(Square::from_str("e44"), Err(Error::InvalidSquare));
    for sq in Square::all() {
        assert_eq!(Square::from_str(&sq.to_string()), Ok(sq));
    }
}
