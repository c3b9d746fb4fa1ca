use clap::Parser;
use log::info;

use gridbot::agent::{Agent, MinimaxAgent, RandomAgent};
use gridbot::game::valuation::terminal_valuation;
use gridbot::tournament::{play_game, run_tournament, TournamentStats};
use gridbot::Player;

/// Plays local games: a minimax agent as player 1 against a random or minimax player 2.
#[derive(Parser, Debug)]
#[command(name = "arena", about)]
struct Args {
    /// Number of games to play; a single game is printed move by move
    #[arg(short, long, default_value_t = 100)]
    games: usize,

    /// Search depth of player 1
    #[arg(short, long, default_value_t = 3)]
    depth: u32,

    /// Search depth of player 2; plays random moves if not given
    #[arg(short, long)]
    opponent_depth: Option<u32>,

    /// Worker threads, defaults to the number of CPUs
    #[arg(short, long)]
    workers: Option<usize>,
}

fn report(stats: TournamentStats) {
    info!("Player 1 wins: {}", stats.one_wins);
    info!("Draws:         {}", stats.draws);
    info!("Player 2 wins: {}", stats.two_wins);
}

fn play<AgentTwo>(args: &Args, opponent_builder: &dyn Fn() -> AgentTwo)
where
    AgentTwo: Agent + Send + 'static,
{
    let depth = args.depth;
    let agent_builder = move || MinimaxAgent::new(Player::One, depth, terminal_valuation);

    if args.games == 1 {
        play_game(agent_builder(), opponent_builder(), true);
        return;
    }

    let workers = args.workers.unwrap_or_else(num_cpus::get);

    report(run_tournament(&agent_builder, opponent_builder, args.games, workers));
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match args.opponent_depth {
        Some(opponent_depth) => play(&args, &move || {
            MinimaxAgent::new(Player::Two, opponent_depth, terminal_valuation)
        }),
        None => play(&args, &|| RandomAgent::new(Player::Two)),
    }
}
