mod movegen;
mod piece_type;

pub use self::movegen::{available_moves, MoveGen, MoveList};
pub use self::piece_type::*;
