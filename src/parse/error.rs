use std::fmt::Display;

/// A fatal format error: the upstream markup no longer has the shape this
/// parser was written against. There is no recovery within a parse.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    UnknownSectionLabel(String),
    UnknownPriceLabel(String),
    PriceOutsideCell(String),
    MissingMeal(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSectionLabel(label) => {
                write!(f, "Format Error: unknown section header {label:?}")
            }
            Self::UnknownPriceLabel(label) => {
                write!(f, "Format Error: unknown price tier header {label:?}")
            }
            Self::PriceOutsideCell(text) => {
                write!(f, "Format Error: price text {text:?} outside a table cell")
            }
            Self::MissingMeal(text) => {
                write!(f, "Format Error: meal attribute {text:?} with no open meal")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
