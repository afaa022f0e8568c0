// SPDX-License-Identifier: MPL-2.0
use crate::application::port::SearchError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// The API access key is missing or unusable. Fatal at startup.
    Credential(String),
    Search(SearchError),
    /// The windowing or rendering backend failed to start.
    Ui(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Credential(e) => write!(f, "Credential Error: {}", e),
            Error::Search(e) => write!(f, "Search Error: {}", e),
            Error::Ui(e) => write!(f, "UI Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SearchError> for Error {
    fn from(err: SearchError) -> Self {
        Error::Search(err)
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

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
