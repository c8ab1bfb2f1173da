//! Error types for the command interpreter.
//!
//! User input errors carry one of four kinds and render with the
//! console's `> <Kind>: ` prefix. They are always recoverable: the
//! session reports them and returns to the prompt without touching game
//! state. Stream failures propagate separately through the `Io` variant
//! and terminate the session.

use std::fmt;
use std::io;

/// Classification of a user input error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Catch-all for conditions not covered by the other kinds.
    Generic,
    /// Input could not be resolved to a command.
    Syntax,
    /// Wrong number or shape of arguments.
    Argument,
    /// A well-formed argument outside its valid range.
    Range,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Generic => "Error",
            ErrorKind::Syntax => "SyntaxError",
            ErrorKind::Argument => "ArgumentError",
            ErrorKind::Range => "RangeError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of one command invocation.
#[derive(Debug)]
pub enum CommandError {
    /// Stream failure; aborts the session rather than the command.
    Io(io::Error),
    /// Recoverable user input error, reported at the prompt.
    User { kind: ErrorKind, message: String },
}

impl CommandError {
    pub fn generic(message: impl Into<String>) -> Self {
        CommandError::User {
            kind: ErrorKind::Generic,
            message: message.into(),
        }
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        CommandError::User {
            kind: ErrorKind::Syntax,
            message: message.into(),
        }
    }

    pub fn argument(message: impl Into<String>) -> Self {
        CommandError::User {
            kind: ErrorKind::Argument,
            message: message.into(),
        }
    }

    pub fn range(message: impl Into<String>) -> Self {
        CommandError::User {
            kind: ErrorKind::Range,
            message: message.into(),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Io(e) => write!(f, "I/O error: {}", e),
            CommandError::User { kind, message } => write!(f, "> {}: {}", kind, message),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CommandError {
    fn from(error: io::Error) -> Self {
        CommandError::Io(error)
    }
}
