use std::fmt::{self, Display, Formatter};

use crate::parse;

#[derive(Debug)]
pub enum Error {
    /// Bad invocation: unknown canteen or language. Caught before any
    /// network or parse work.
    Config(String),
    /// The markup parsed but no longer matches the expected shape.
    Parse(parse::Error),
    /// Client construction failed. Transport failures during the actual
    /// fetch are downgraded to an empty result instead of landing here.
    Request(reqwest::Error),
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Error::Parse(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {msg}"),
            Error::Parse(e) => write!(f, "Parse error: {e}"),
            Error::Request(e) => write!(f, "Request error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
