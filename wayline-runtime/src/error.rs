use std::{error, fmt};

/// Program and authoring errors.
///
/// These can only originate from a bug in the program source (the
/// authoring tool or a hand-written table), never from runtime
/// conditions, so they are reported before a program is accepted.
#[derive(Debug)]
pub enum Error {
    /// A parallel group without units.
    EmptyGroup { bar: usize },
    /// A unit without commands.
    EmptyUnit { bar: usize },
    /// A function parameter outside its domain.
    Parameter {
        ident: &'static str,
        reason: &'static str,
    },
    /// Unknown function identifier.
    UnknownFunction(String),
    /// Wrong parameter count for a function.
    Arity {
        ident: String,
        expected: &'static str,
        actual: usize,
    },
    /// Program document could not be read.
    Io(std::io::Error),
    /// Program document is not valid.
    Malformed(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyGroup { bar } => write!(f, "bar {}: parallel group without units", bar),
            Error::EmptyUnit { bar } => write!(f, "bar {}: unit without commands", bar),
            Error::Parameter { ident, reason } => {
                write!(f, "invalid parameter for {}: {}", ident, reason)
            }
            Error::UnknownFunction(ident) => write!(f, "unknown function: {}", ident),
            Error::Arity {
                ident,
                expected,
                actual,
            } => write!(f, "{} expects {} parameters, got {}", ident, expected, actual),
            Error::Io(e) => write!(f, "{}", e),
            Error::Malformed(e) => write!(f, "malformed program: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Malformed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Malformed(value)
    }
}
