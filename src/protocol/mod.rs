mod connection;
mod message;

pub use connection::{Connection, MESSAGE_BUFFER_SIZE};
pub use message::{hello_message, move_message, GameOutcome, ServerMessage, Status};
