use crate::agent::Agent;
use crate::game::{Board, Move, Player};

/// agent that always picks the first empty cell in row-major order
/// useful for tests since, unlike RandomAgent, it's deterministic
pub struct FirstMoveAgent {
    board: Board,

    player: Player,
}

impl FirstMoveAgent {
    pub fn new(player: Player) -> Self {
        FirstMoveAgent {
            board: Board::new(),
            player,
        }
    }
}

impl Agent for FirstMoveAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn inform_move(&mut self, move_: Move, player: Player) {
        self.board.apply_move(move_, player);
    }

    fn get_move(&mut self) -> Option<Move> {
        self.board.legal_moves().next()
    }
}
