use std::fmt;

/// Generic error type
#[derive(Debug)]
pub enum Error {
    Deserialise(serde_json::Error),
    EndOfInput,
    Io(std::io::Error),
    Pattern(regex::Error),
    Request(reqwest::Error),
    UnexpectedNode {
        node: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deserialise(s) => write!(f, "deserialise: {s}"),
            Self::EndOfInput => write!(f, "end of input while waiting for an answer"),
            Self::Io(s) => write!(f, "io: {s}"),
            Self::Pattern(s) => write!(f, "pattern: {s}"),
            Self::Request(s) => write!(f, "request: {s}"),
            Self::UnexpectedNode {
                node,
                expected,
                actual,
            } => write!(f, "{node} node should be {expected}, actual {actual}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Deserialise(error)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<regex::Error> for Error {
    fn from(error: regex::Error) -> Self {
        Self::Pattern(error)
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error)
    }
}
