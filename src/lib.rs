//! Minimax agent for a two-player game on a 5x5 grid: four in a row wins, three in a row loses.
//!
//! - [`game`]: board, moves, players and the terminal valuation
//! - [`minimax`]: full-width minimax search and best-move selection
//! - [`agent`]: move-picking agents
//! - [`protocol`] / [`session`]: talking to the game server
//! - [`tournament`]: local games between agents

pub mod agent;
pub mod config;
pub mod error;
pub mod game;
pub mod minimax;
pub mod protocol;
pub mod session;
pub mod tournament;

pub use game::{Board, Move, Player};
