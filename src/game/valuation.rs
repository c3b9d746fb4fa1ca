use crate::game::{Board, Player};

pub type Score = i32;

pub const WIN_SCORE: Score = 1_000_000;
pub const LOSS_SCORE: Score = -WIN_SCORE;
pub const NEUTRAL_SCORE: Score = 0;

pub type ValuationFn = fn(&Board, Player) -> Score;

/// Scores `board` from `perspective` using only the win/lose rules; anything undecided is neutral.
pub fn terminal_valuation(board: &Board, perspective: Player) -> Score {
    let opponent = !perspective;

    if board.has_won(perspective) {
        WIN_SCORE
    } else if board.has_lost(perspective) {
        LOSS_SCORE
    } else if board.has_won(opponent) {
        LOSS_SCORE
    } else if board.has_lost(opponent) {
        WIN_SCORE
    } else {
        NEUTRAL_SCORE
    }
}

/// whether either player has won or lost, regardless of whose turn it is
pub fn is_terminal(board: &Board) -> bool {
    use Player::{One, Two};

    board.has_won(One) || board.has_won(Two) || board.has_lost(One) || board.has_lost(Two)
}

/*====================================================================================================================*/
