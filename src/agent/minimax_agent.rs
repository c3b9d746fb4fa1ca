use crate::agent::Agent;
use crate::game::{Board, Move, Player, ValuationFn};
use crate::minimax::MinimaxSearch;

pub struct MinimaxAgent {
    board: Board,

    player: Player,

    depth: u32,

    search: MinimaxSearch,
}

impl MinimaxAgent {
    pub fn new(player: Player, depth: u32, valuation_fn: ValuationFn) -> Self {
        MinimaxAgent {
            board: Board::new(),
            player,
            depth,
            search: MinimaxSearch::new(valuation_fn),
        }
    }
}

impl Agent for MinimaxAgent {
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
        self.search.find_best_move(&mut self.board, self.player, self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::valuation::terminal_valuation;

    #[test]
    fn test_get_move_leaves_board_untouched() {
        let mut agent = MinimaxAgent::new(Player::Two, 2, terminal_valuation);

        agent.inform_move(Move::new(2, 2), Player::One);
        let before = agent.board().clone();

        let move_ = agent.get_move();

        assert_eq!(move_, Some(Move::new(0, 0)));
        assert_eq!(agent.board(), &before);
    }

    #[test]
    fn test_depth_one_ignores_threats() {
        // player 1 threatens 1 1 . 1 on the bottom row; at depth 1 player 2 only looks at its own placement
        let mut agent = MinimaxAgent::new(Player::Two, 1, terminal_valuation);

        for code in [51, 52, 54] {
            agent.inform_move(Move::from_code(code).unwrap(), Player::One);
        }

        assert_eq!(agent.get_move(), Move::from_code(11));
    }
}
