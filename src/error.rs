// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Link(LinkError),
}

/// Reasons a URI is refused before it reaches the host's link handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// The URI is empty or only whitespace.
    Empty,

    /// The scheme is neither `https:` nor `mailto:`.
    UnsupportedScheme(String),

    /// The scheme is supported but nothing follows it.
    MissingTarget,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::Empty => write!(f, "empty link"),
            LinkError::UnsupportedScheme(scheme) => {
                write!(f, "unsupported link scheme: {}", scheme)
            }
            LinkError::MissingTarget => write!(f, "link has no target"),
        }
    }
}

impl std::error::Error for LinkError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Link(e) => write!(f, "Link Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<LinkError> for Error {
    fn from(err: LinkError) -> Self {
        Error::Link(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
