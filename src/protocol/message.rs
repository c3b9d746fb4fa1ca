use std::fmt::Display;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ProtocolError;
use crate::game::{Move, Player};

/*====================================================================================================================*/

/// How the server ended the game, from our side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
    Draw,
    WonByOpponentError,
    LostByOwnError,
}

impl GameOutcome {
    pub fn from_code(code: u32) -> Option<Self> {
        use GameOutcome::*;

        match code {
            1 => Some(Won),
            2 => Some(Lost),
            3 => Some(Draw),
            4 => Some(WonByOpponentError),
            5 => Some(LostByOwnError),
            _ => None,
        }
    }
}

impl Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Won => write!(f, "You won."),
            GameOutcome::Lost => write!(f, "You lost."),
            GameOutcome::Draw => write!(f, "Draw."),
            GameOutcome::WonByOpponentError => write!(f, "You won. Opponent error."),
            GameOutcome::LostByOwnError => write!(f, "You lost. Your error."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    YourTurn,
    GameOver(GameOutcome),
}

/*====================================================================================================================*/

/// One server message: `status * 100 + opponent move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerMessage {
    /// encoded opponent move, `None` when the server sent 0
    pub opponent_move: Option<u32>,

    pub status: Status,
}

impl ServerMessage {
    pub fn from_value(value: u32) -> Result<Self, ProtocolError> {
        let opponent_move = match value % 100 {
            0 => None,
            code => Some(code),
        };

        let status = match value / 100 {
            0 | 6 => Status::YourTurn,
            code => Status::GameOver(GameOutcome::from_code(code).ok_or(ProtocolError::UnknownStatus(code))?),
        };

        Ok(ServerMessage { opponent_move, status })
    }
}

lazy_static! {
    // leading decimal integer with optional '+'; whatever follows it (NUL padding, newlines) is ignored
    static ref MESSAGE_REGEX: Regex = Regex::new(r"^\s*\+?(?P<value>\d+)").unwrap();
}

impl FromStr for ServerMessage {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = MESSAGE_REGEX
            .captures(s)
            .and_then(|captures| captures.name("value"))
            .and_then(|value| value.as_str().parse::<u32>().ok())
            .ok_or_else(|| ProtocolError::Malformed(s.to_owned()))?;

        ServerMessage::from_value(value)
    }
}

/*====================================================================================================================*/

pub fn hello_message(player: Player, name: &str) -> String {
    format!("{} {}", player.id(), name)
}

pub fn move_message(move_: Move) -> String {
    move_.code().to_string()
}

/*====================================================================================================================*/
