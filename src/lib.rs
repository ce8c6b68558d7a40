//! # Mailbox Chess
//! A mailbox board and piece move generation library.
//!
//! The board owns a square-to-piece mapping and hands out an opaque
//! [`PieceId`] per piece; move rules are pure queries against that mapping.
//! Deliberately out of scope: check and checkmate detection, castling,
//! en passant, promotion, and any turn bookkeeping. This crate answers
//! "where may this piece go" and "relocate this piece", nothing more.
//!
//! ## Example
//!
//! ```
//! use mailbox_chess::{available_moves, Board, MoveGen, Player, Square};
//! use std::str::FromStr;
//!
//! let mut board = Board::default();
//!
//! // Each side has 20 moves in the starting position.
//! assert_eq!(MoveGen::new(&board, Player::White).len(), 20);
//!
//! // Ask a single piece where it may go, then move it there.
//! let pawn = board.piece_id_on(Square::from_str("e2").unwrap()).unwrap();
//! let dest = available_moves(&board, pawn).unwrap()[0];
//! board.move_to(pawn, dest).unwrap();
//! assert_eq!(board.find_piece(pawn), Square::from_str("e4"));
//! ```

mod board;
pub use crate::board::*;

mod board_builder;
pub use crate::board_builder::BoardBuilder;

mod chess_move;
pub use crate::chess_move::*;

mod error;
pub use crate::error::Error;

mod movegen;
pub use crate::movegen::{available_moves, MoveGen, MoveList};

mod piece;
pub use crate::piece::*;

mod player;
pub use crate::player::*;

mod square;
pub use crate::square::*;
