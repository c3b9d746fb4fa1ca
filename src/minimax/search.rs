use std::time::Instant;

use log::debug;

use crate::game::valuation::{is_terminal, terminal_valuation, LOSS_SCORE, WIN_SCORE};
use crate::game::{Board, Move, Player, Score, ValuationFn};

/*====================================================================================================================*/

/// Full-width minimax over a single shared board.
///
/// Every mark placed during the search is undone before the placing call returns, so the board a caller hands in is
/// left exactly as it was. Scores are always taken from the perspective fixed at the root; the alternation between
/// maximising and minimising plies does the adversarial work, there is no negation.
pub struct MinimaxSearch {
    valuation_fn: ValuationFn,

    total_nodes_visited: u64,

    start_t: Instant,
}

impl MinimaxSearch {
    pub fn new(valuation_fn: ValuationFn) -> Self {
        MinimaxSearch {
            valuation_fn,
            total_nodes_visited: 0,
            start_t: Instant::now(),
        }
    }

    /// nodes visited by the last root search
    pub fn nodes_visited(&self) -> u64 {
        self.total_nodes_visited
    }

    fn current_nps(&self) -> f64 {
        self.total_nodes_visited as f64 / self.start_t.elapsed().as_secs_f64()
    }

    /// Value of `board` for `perspective` with `to_move` about to play.
    ///
    /// A node that is not terminal but has no empty cell returns its initial bound (`LOSS_SCORE` when maximising,
    /// `WIN_SCORE` when minimising), not the neutral score.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        remaining_depth: u32,
        maximising: bool,
        to_move: Player,
        perspective: Player,
    ) -> Score {
        self.total_nodes_visited += 1;

        if remaining_depth == 0 || is_terminal(board) {
            return (self.valuation_fn)(board, perspective);
        }

        let mut best_value = if maximising { LOSS_SCORE } else { WIN_SCORE };

        for move_ in Move::all() {
            if !board.is_empty(move_) {
                continue;
            }

            let value = {
                let mut placed = board.place_scoped(move_, to_move);
                self.minimax(&mut placed, remaining_depth - 1, !maximising, !to_move, perspective)
            };

            best_value = if maximising {
                best_value.max(value)
            } else {
                best_value.min(value)
            };
        }

        best_value
    }

    /// Best root move for `player` together with its value, or `None` if there is nothing to search.
    ///
    /// Ties go to the earliest move in row-major order. The board is not changed; committing the move is up to the
    /// caller.
    pub fn best_move(&mut self, board: &mut Board, player: Player, depth: u32) -> Option<(Move, Score)> {
        if depth == 0 {
            return None;
        }

        self.total_nodes_visited = 0;
        self.start_t = Instant::now();

        let mut best: Option<(Move, Score)> = None;

        for move_ in Move::all() {
            if !board.is_empty(move_) {
                continue;
            }

            let value = {
                let mut placed = board.place_scoped(move_, player);
                self.minimax(&mut placed, depth - 1, true, !player, player)
            };

            // strictly greater: a later move with an equal value never replaces an earlier one
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((move_, value));
            }
        }

        if let Some((best_move, best_value)) = best {
            debug!(
                "{player} depth {depth}: best move {best_move} has value {best_value} ({} nodes, {:.2e} nps, {:?})",
                self.total_nodes_visited,
                self.current_nps(),
                self.start_t.elapsed()
            );
        }

        best
    }

    pub fn find_best_move(&mut self, board: &mut Board, player: Player, depth: u32) -> Option<Move> {
        self.best_move(board, player, depth).map(|(best_move, _)| best_move)
    }
}

impl Default for MinimaxSearch {
    fn default() -> Self {
        MinimaxSearch::new(terminal_valuation)
    }
}

/// [`MinimaxSearch::find_best_move`] with the terminal-only valuation
pub fn find_best_move(board: &mut Board, player: Player, depth: u32) -> Option<Move> {
    MinimaxSearch::default().find_best_move(board, player, depth)
}

/*====================================================================================================================*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::valuation::NEUTRAL_SCORE;

    // full board without any three-line for either player
    const FULL_UNDECIDED: &str = "11221/22112/11221/22112/11221";

    fn parse_board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_minimax_restores_board() {
        let boards = [
            ".....\n.....\n.....\n.....\n.....",
            "1..2./...../..1../.2.../.....",
            "11.21/22.12/11221/2.112/1122.",
            "11.21/2..12/1.221/22112/.1221",
        ];

        for s in boards {
            let mut board = parse_board(s);
            let before = board.clone();
            let empty_cells = board.legal_moves().count() as u32;

            let max_depth = if empty_cells > 6 { 3 } else { 25 };

            for depth in 0..=max_depth {
                let mut search = MinimaxSearch::default();

                search.minimax(&mut board, depth, true, Player::One, Player::One);
                assert_eq!(board, before, "minimax changed the board at depth {depth}");

                search.minimax(&mut board, depth, false, Player::Two, Player::One);
                assert_eq!(board, before, "minimax changed the board at depth {depth}");
            }
        }
    }

    #[test]
    fn test_find_best_move_does_not_mutate() {
        let mut board = parse_board("1..2./...../..1../.2.../.....");
        let before = board.clone();

        for depth in 1..=2 {
            assert!(find_best_move(&mut board, Player::One, depth).is_some());
            assert_eq!(board, before);
        }

        let mut board = parse_board("11.21/2..12/1.221/22112/.1221");
        let before = board.clone();

        find_best_move(&mut board, Player::Two, 25);
        assert_eq!(board, before);
    }

    #[test]
    fn test_single_empty_cell() {
        let mut board = parse_board("11221/22112/11.21/22112/11221");

        for depth in [1, 2, 25] {
            assert_eq!(
                find_best_move(&mut board, Player::Two, depth),
                Move::from_code(33),
                "depth {depth}"
            );
        }
    }

    #[test]
    fn test_single_losing_cell_is_still_played() {
        // completing 1 1 1 in the middle row loses, but it is the only move
        let mut board = parse_board("11221/22112/11.21/22112/11221");

        let mut search = MinimaxSearch::default();
        assert_eq!(
            search.best_move(&mut board, Player::One, 1),
            Some((Move::new(2, 2), LOSS_SCORE))
        );
    }

    #[test]
    fn test_tie_break_is_row_major() {
        // every first move on an empty board is worth the same
        let mut board = Board::new();
        assert_eq!(find_best_move(&mut board, Player::One, 1), Move::from_code(11));

        // 23 and 43 both complete four in a row
        let mut board = parse_board("...../11.1./...../11.1./.....");

        for depth in 1..=2 {
            let mut search = MinimaxSearch::default();
            assert_eq!(
                search.best_move(&mut board, Player::One, depth),
                Some((Move::from_code(23).unwrap(), WIN_SCORE))
            );
        }
    }

    #[test]
    fn test_opponent_first_reply_is_maximising() {
        // player 2 could complete 2 2 2 2 at 53, but its first reply maximises player 1's score
        let mut board = parse_board("...../...../...../...../22.2.");

        let mut search = MinimaxSearch::default();
        assert_eq!(
            search.best_move(&mut board, Player::One, 2),
            Some((Move::from_code(11).unwrap(), NEUTRAL_SCORE))
        );
    }

    #[test]
    fn test_avoids_three_in_a_row() {
        let mut board = parse_board("11.../...../...../...../.....");

        assert_eq!(find_best_move(&mut board, Player::One, 1), Move::from_code(14));
    }

    #[test]
    fn test_takes_winning_move() {
        let mut board = parse_board("2...2/...../...../...../11.1.");

        for depth in 1..=2 {
            assert_eq!(find_best_move(&mut board, Player::One, depth), Move::from_code(53));
        }
    }

    #[test]
    fn test_no_legal_move() {
        let mut board = parse_board(FULL_UNDECIDED);

        assert_eq!(find_best_move(&mut board, Player::One, 3), None);

        // non-terminal node without children keeps its initial bound
        let mut search = MinimaxSearch::default();
        assert_eq!(search.minimax(&mut board, 3, true, Player::One, Player::One), LOSS_SCORE);
        assert_eq!(search.minimax(&mut board, 3, false, Player::One, Player::One), WIN_SCORE);

        // depth exhausted first
        assert_eq!(search.minimax(&mut board, 0, true, Player::One, Player::One), NEUTRAL_SCORE);
    }

    #[test]
    fn test_depth_zero_selects_nothing() {
        let mut board = Board::new();

        assert_eq!(find_best_move(&mut board, Player::One, 0), None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_terminal_scored_from_root_perspective() {
        let mut board = parse_board("2221./1..../...../...../.....");

        let mut search = MinimaxSearch::default();

        // player 2 has a three-line: good for player 1, whoever is to move
        assert_eq!(search.minimax(&mut board, 4, true, Player::Two, Player::One), WIN_SCORE);
        assert_eq!(search.minimax(&mut board, 4, false, Player::One, Player::One), WIN_SCORE);
        assert_eq!(search.minimax(&mut board, 4, true, Player::One, Player::Two), LOSS_SCORE);
        assert_eq!(search.nodes_visited(), 3);
    }

    #[test]
    fn test_node_count() {
        let mut board = Board::new();
        let mut search = MinimaxSearch::default();

        search.best_move(&mut board, Player::One, 2);

        assert_eq!(search.nodes_visited(), 25 + 25 * 24);
    }
}
