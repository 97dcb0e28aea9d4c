use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can stop a calculator session.
pub enum SessionError {
    /// Reading a line or writing a prompt failed.
    #[error("I/O failure during the session: {0}")]
    Io(#[from] io::Error),
    /// The script file passed on the command line could not be opened.
    #[error("Failed to read the input file '{}'. Perhaps this file does not exist?", .path.display())]
    ScriptUnreadable {
        /// Path of the script file.
        path:   PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}
