use std::io::{Read, Write};

use log::{info, warn};

use crate::agent::Agent;
use crate::error::{ProtocolError, SessionError};
use crate::game::Move;
use crate::protocol::{Connection, GameOutcome, ServerMessage, Status};

/*====================================================================================================================*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Finished(GameOutcome),
}

/// what the driver has to do after a server message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Reply(Move),
    Finished(GameOutcome),
}

/// One game against the server, seen from `agent`'s seat. Does no I/O itself; see [`run`].
pub struct Session<A: Agent> {
    agent: A,

    state: SessionState,
}

impl<A: Agent> Session<A> {
    pub fn new(agent: A) -> Self {
        Session {
            agent,
            state: SessionState::Playing,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn agent(&self) -> &A {
        &self.agent
    }

    pub fn handle_message(&mut self, msg: ServerMessage) -> Result<Step, SessionError> {
        if let SessionState::Finished(outcome) = self.state {
            return Err(SessionError::AlreadyFinished(outcome));
        }

        let player = self.agent.player();

        if let Some(code) = msg.opponent_move {
            let valid = self.agent.board().is_valid_code(code);

            match (Move::from_code(code), msg.status) {
                (Some(opponent_move), _) if valid => self.agent.inform_move(opponent_move, !player),
                (_, Status::YourTurn) => return Err(ProtocolError::IllegalOpponentMove(code).into()),
                // the server reports the game as over, quite possibly because of exactly this move
                (_, Status::GameOver(_)) => warn!("Ignoring invalid opponent move {code}"),
            }
        }

        match msg.status {
            Status::YourTurn => {
                let move_ = self.agent.get_move().ok_or(SessionError::NoLegalMove(player))?;

                info!("Chosen move: {move_}");

                self.agent.inform_move(move_, player);

                info!("\n{}\n", self.agent.board());

                Ok(Step::Reply(move_))
            }
            Status::GameOver(outcome) => {
                self.state = SessionState::Finished(outcome);

                Ok(Step::Finished(outcome))
            }
        }
    }
}

/*====================================================================================================================*/

/// Plays one game over `conn`: greeting, hello, then turns until the server ends the game.
pub fn run<S, A>(conn: &mut Connection<S>, session: &mut Session<A>, name: &str) -> Result<GameOutcome, SessionError>
where
    S: Read + Write,
    A: Agent,
{
    let greeting = conn.read_message()?;
    info!("Server greeting: {}", greeting.trim());

    conn.send_hello(session.agent().player(), name)?;

    loop {
        let msg = conn.read_server_message()?;

        match session.handle_message(msg)? {
            Step::Reply(move_) => conn.send_move(move_)?,
            Step::Finished(outcome) => {
                info!("{outcome}");
                return Ok(outcome);
            }
        }
    }
}

/*====================================================================================================================*/
