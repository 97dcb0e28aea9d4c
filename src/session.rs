use std::{
    io::{BufRead, Write},
    mem,
};

use tracing::debug;

use crate::{
    error::SessionError,
    interpreter::{
        lexer::tokenize,
        state::core::{State, transition},
    },
};

/// Runs a conversation over a line source and a text sink.
///
/// The session owns the only live [`State`]. Each turn writes the current
/// prompt, reads one line, tokenizes it and installs the next state. The
/// conversation ends once the state is [`State::Terminated`]; running out of
/// input counts as choosing to exit. Bytes that are not valid UTF-8 are read
/// as replacement characters and end up in an unrecognized token.
pub struct Session<R, W> {
    input:  R,
    output: W,
    state:  State,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session in the `Idle` state.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input,
               output,
               state: State::Idle }
    }

    /// Runs the conversation to its end.
    ///
    /// Returns the number of input lines processed.
    ///
    /// # Errors
    /// Returns [`SessionError::Io`] if reading a line or writing a prompt
    /// fails.
    pub fn run(&mut self) -> Result<usize, SessionError> {
        let mut turns = 0;
        let mut line = Vec::new();

        loop {
            self.output.write_all(self.state.describe().as_bytes())?;
            self.output.flush()?;

            if self.state.is_terminal() {
                debug!(turns, "session finished");
                return Ok(turns);
            }

            line.clear();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                debug!("end of input, leaving");
                self.state = State::Terminated;
                continue;
            }

            let text = String::from_utf8_lossy(&line);
            let tokens = tokenize(text.trim_end_matches(['\n', '\r']));
            debug!(?tokens, "tokenized line");

            let state = mem::take(&mut self.state);
            self.state = transition(state, &tokens);
            turns += 1;
        }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Consumes the session and returns its output sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }
}
