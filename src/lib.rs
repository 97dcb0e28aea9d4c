//! # cplx
//!
//! cplx is an interactive console calculator for complex numbers and doubles
//! written in Rust. Each input line is tokenized, interpreted against what the
//! conversation currently expects, and moves a small state machine forward
//! until the user chooses to exit.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::SessionError, session::Session};

/// Provides the error types of the calculator.
///
/// This module defines the single failure the flow rules report and the
/// errors that can stop a session. Flow failures never reach the user
/// directly: the state machine turns them into an error state.
///
/// # Responsibilities
/// - Defines `FlowError`, reported as `non valid arg`.
/// - Defines `SessionError` for I/O failures of the session driver.
pub mod error;
/// Lexing, flow interpretation, arithmetic and the conversation state machine.
///
/// This module ties together the lexer, the flow processor, the calculator
/// and the states of the conversation. Everything in it is pure: it turns a
/// state and a line of tokens into the next state.
pub mod interpreter;
/// The line-in, text-out driver of a conversation.
///
/// Owns the current state, writes its prompt, reads the next line and
/// installs the state that follows, until the conversation terminates.
pub mod session;

/// Runs a whole conversation over a script and returns everything it printed.
///
/// Each line of `script` is one user input. If the script ends before the
/// user exits, the session exits on its own.
///
/// # Errors
/// Returns an error if writing the transcript fails.
///
/// # Examples
/// ```
/// use cplx::run_script;
///
/// let transcript = run_script("B\n2+i2\n+\n1-i1\nA\n").unwrap();
/// assert!(transcript.contains("Your result: 3.000000+i1.000000"));
/// assert!(transcript.ends_with("Bye\n"));
/// ```
pub fn run_script(script: &str) -> Result<String, SessionError> {
    let mut session = Session::new(script.as_bytes(), Vec::new());
    session.run()?;

    Ok(String::from_utf8_lossy(&session.into_output()).into_owned())
}
