mod search;

pub use search::{find_best_move, MinimaxSearch};
