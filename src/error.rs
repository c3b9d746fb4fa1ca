use crate::game::Player;
use crate::protocol::GameOutcome;

/// Errors in what the game server sent.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed server message {0:?}")]
    Malformed(String),

    #[error("unknown status code {0}")]
    UnknownStatus(u32),

    #[error("opponent move {0} is not an empty cell on the board")]
    IllegalOpponentMove(u32),
}

/// Errors that end a game session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("server closed the connection")]
    ConnectionClosed,

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("no legal move left for {0}")]
    NoLegalMove(Player),

    #[error("game already finished: {0}")]
    AlreadyFinished(GameOutcome),
}

/// Errors in the command line configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("player number must be 1 or 2, got {0}")]
    InvalidPlayer(u8),

    #[error("search depth must be between 1 and {max}, got {depth}")]
    InvalidDepth { depth: u32, max: u32 },

    #[error("player name must be non-empty and contain no whitespace, got {0:?}")]
    InvalidName(String),
}
