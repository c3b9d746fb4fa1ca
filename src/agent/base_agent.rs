use crate::game::{Board, Move, Player};

pub trait Agent {
    fn player(&self) -> Player;
    fn board(&self) -> &Board;

    /// record a move by either player on the agent's own board
    fn inform_move(&mut self, move_: Move, player: Player);
    /// the move the agent wants to play next, `None` if the board is full
    fn get_move(&mut self) -> Option<Move>;
}
