use clap::Parser;

use crate::error::ConfigError;
use crate::game::{Player, BOARD_SIZE};

/// deepest useful search: one ply per cell
pub const MAX_DEPTH: u32 = (BOARD_SIZE * BOARD_SIZE) as u32;

/// Minimax agent for the 5x5 four-wins, three-loses game.
#[derive(Parser, Debug, Clone)]
#[command(name = "gridbot", version, about)]
pub struct Cli {
    /// Address of the game server
    pub ip: String,

    /// Port of the game server
    pub port: u16,

    /// Our player number, 1 or 2
    pub player_number: u8,

    /// Name sent to the server
    pub player_name: String,

    /// Search depth in plies
    pub depth: u32,
}

/// Validated agent configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub player: Player,
    pub name: String,
    pub depth: u32,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let player = Player::from_id(cli.player_number).ok_or(ConfigError::InvalidPlayer(cli.player_number))?;

        if cli.depth == 0 || cli.depth > MAX_DEPTH {
            return Err(ConfigError::InvalidDepth {
                depth: cli.depth,
                max: MAX_DEPTH,
            });
        }

        if cli.player_name.is_empty() || cli.player_name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidName(cli.player_name));
        }

        Ok(Config {
            host: cli.ip,
            port: cli.port,
            player,
            name: cli.player_name,
            depth: cli.depth,
        })
    }
}
