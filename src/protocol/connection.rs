use std::io::{Read, Write};
use std::net::TcpStream;

use log::trace;

use super::{hello_message, move_message, ServerMessage};
use crate::error::SessionError;
use crate::game::{Move, Player};

/// the server never sends more than this in one message
pub const MESSAGE_BUFFER_SIZE: usize = 16;

pub struct Connection<S = TcpStream> {
    stream: S,
}

impl Connection<TcpStream> {
    pub fn connect(host: &str, port: u16) -> Result<Self, SessionError> {
        let stream = TcpStream::connect((host, port))?;

        Ok(Connection::new(stream))
    }
}

impl<S: Read + Write> Connection<S> {
    pub fn new(stream: S) -> Self {
        Connection { stream }
    }

    /// one read from the stream, with trailing NUL padding removed
    pub fn read_message(&mut self) -> Result<String, SessionError> {
        let mut buffer = [0u8; MESSAGE_BUFFER_SIZE];

        let len = self.stream.read(&mut buffer)?;

        if len == 0 {
            return Err(SessionError::ConnectionClosed);
        }

        let msg = String::from_utf8_lossy(&buffer[..len])
            .trim_end_matches('\0')
            .to_owned();

        trace!("< {msg}");

        Ok(msg)
    }

    pub fn write_message(&mut self, msg: &str) -> Result<(), SessionError> {
        trace!("> {msg}");

        self.stream.write_all(msg.as_bytes())?;
        self.stream.flush()?;

        Ok(())
    }

    pub fn read_server_message(&mut self) -> Result<ServerMessage, SessionError> {
        let msg = self.read_message()?;

        Ok(msg.parse()?)
    }

    pub fn send_hello(&mut self, player: Player, name: &str) -> Result<(), SessionError> {
        self.write_message(&hello_message(player, name))
    }

    pub fn send_move(&mut self, move_: Move) -> Result<(), SessionError> {
        self.write_message(&move_message(move_))
    }
}
