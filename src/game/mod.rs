mod board;
pub mod valuation;

pub use board::{Board, Cell, Move, Player, ScopedMove, BOARD_SIZE};
pub use valuation::{Score, ValuationFn};
