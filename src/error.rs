// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(String),
    Clipboard(String),
}

/// Reasons an image fetch can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request could not be sent (DNS, TLS, connection refused, ...).
    Request(String),

    /// The server answered with a non-success status code.
    Status(u16),

    /// The response body exceeds the accepted image size.
    TooLarge { size: u64, max: u64 },

    /// The connection broke while reading the body.
    Body(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(msg) => write!(f, "Request failed: {}", msg),
            FetchError::Status(code) => write!(f, "HTTP status: {}", code),
            FetchError::TooLarge { size, max } => {
                write!(f, "Response too large: {} bytes (max {})", size, max)
            }
            FetchError::Body(msg) => write!(f, "Body read failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Clipboard(e) => write!(f, "Clipboard Error: {}", e),
        }
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

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Catalog(err.to_string())
    }
}

impl From<arboard::Error> for Error {
    fn from(err: arboard::Error) -> Self {
        Error::Clipboard(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
