use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, info};
use threadpool::ThreadPool;

use crate::agent::Agent;
use crate::game::{Board, Player};

/*====================================================================================================================*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TournamentStats {
    pub one_wins: u64,
    pub two_wins: u64,
    pub draws: u64,
}

/*====================================================================================================================*/

// returns the result if the game ended with this ply
fn single_ply(
    board: &mut Board,
    playing_agent: &mut impl Agent,
    opponent_agent: &mut impl Agent,
    print: bool,
) -> Option<GameResult> {
    let player = playing_agent.player();

    let start_time = std::time::Instant::now();
    let player_move = playing_agent.get_move();
    let dur = start_time.elapsed();

    let player_move = match player_move {
        Some(player_move) if board.is_empty(player_move) => player_move,
        other => {
            // illegal or missing move loses on the spot
            info!("{player} made an illegal move {other:?}");
            return Some(GameResult::Winner(!player));
        }
    };

    if print {
        info!("{player} decided to make move {player_move} after {dur:?}");
    } else {
        debug!("{player} decided to make move {player_move} after {dur:?}");
    }

    board.apply_move(player_move, player);
    playing_agent.inform_move(player_move, player);
    opponent_agent.inform_move(player_move, player);

    if print {
        info!("\n{board}\n");
    }

    if board.has_won(player) {
        Some(GameResult::Winner(player))
    } else if board.has_lost(player) {
        Some(GameResult::Winner(!player))
    } else if board.is_full() {
        Some(GameResult::Draw)
    } else {
        None
    }
}

/// Referees one local game; `agent_one` plays first.
pub fn play_game(agent_one: impl Agent, agent_two: impl Agent, print: bool) -> GameResult {
    assert_eq!(agent_one.player(), Player::One, "First agent has to play as Player 1");
    assert_eq!(agent_two.player(), Player::Two, "Second agent has to play as Player 2");

    let mut board = Board::new();

    let mut agent_one = agent_one;
    let mut agent_two = agent_two;

    let mut current_player = Player::One;

    let result = loop {
        let result = match current_player {
            Player::One => single_ply(&mut board, &mut agent_one, &mut agent_two, print),
            Player::Two => single_ply(&mut board, &mut agent_two, &mut agent_one, print),
        };

        if let Some(result) = result {
            break result;
        }

        current_player = !current_player;
    };

    if print {
        match result {
            GameResult::Winner(player) => info!("{player} won."),
            GameResult::Draw => info!("Draw."),
        }
    }

    result
}

/// Plays `num_games` games on `num_workers` threads, each game with freshly built agents.
pub fn run_tournament<AgentOne, AgentTwo>(
    agent_one_builder: &dyn Fn() -> AgentOne,
    agent_two_builder: &dyn Fn() -> AgentTwo,
    num_games: usize,
    num_workers: usize,
) -> TournamentStats
where
    AgentOne: Agent + Send + 'static,
    AgentTwo: Agent + Send + 'static,
{
    let one_wins = Arc::new(AtomicU64::new(0));
    let two_wins = Arc::new(AtomicU64::new(0));
    let draws = Arc::new(AtomicU64::new(0));

    let pool = ThreadPool::new(num_workers.max(1));

    for _ in 0..num_games {
        let agent_one = agent_one_builder();
        let agent_two = agent_two_builder();

        let one_wins = Arc::clone(&one_wins);
        let two_wins = Arc::clone(&two_wins);
        let draws = Arc::clone(&draws);

        pool.execute(move || {
            let counter = match play_game(agent_one, agent_two, false) {
                GameResult::Winner(Player::One) => one_wins,
                GameResult::Winner(Player::Two) => two_wins,
                GameResult::Draw => draws,
            };

            counter.fetch_add(1, Ordering::Release);
        });
    }

    pool.join();

    TournamentStats {
        one_wins: one_wins.load(Ordering::Acquire),
        two_wins: two_wins.load(Ordering::Acquire),
        draws: draws.load(Ordering::Acquire),
    }
}

/*====================================================================================================================*/
