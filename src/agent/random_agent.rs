use rand::seq::IteratorRandom;
use rand::thread_rng;

use crate::agent::Agent;
use crate::game::{Board, Move, Player};

pub struct RandomAgent {
    board: Board,

    player: Player,
}

impl RandomAgent {
    pub fn new(player: Player) -> Self {
        RandomAgent {
            board: Board::new(),
            player,
        }
    }
}

impl Agent for RandomAgent {
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
        self.board.legal_moves().choose(&mut thread_rng())
    }
}
