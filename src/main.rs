use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use gridbot::agent::MinimaxAgent;
use gridbot::config::{Cli, Config};
use gridbot::game::valuation::terminal_valuation;
use gridbot::protocol::Connection;
use gridbot::session::{self, Session};

fn run() -> Result<()> {
    let config = Config::from_cli(Cli::parse())?;

    let mut conn = Connection::connect(&config.host, config.port)
        .with_context(|| format!("Unable to connect to {}:{}", config.host, config.port))?;

    info!("Connected to game server {}:{}", config.host, config.port);

    let agent = MinimaxAgent::new(config.player, config.depth, terminal_valuation);
    let mut session = Session::new(agent);

    session::run(&mut conn, &mut session, &config.name).context("Game session failed")?;

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("{err:#}");
        std::process::exit(1);
    }
}
