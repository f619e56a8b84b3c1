use std::fmt;

use thiserror::Error;

/// Free-text field that does not fit its numeric grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("no amount in money text {0:?}")]
    EmptyAmount(String),
    #[error("malformed amount {0:?}")]
    MalformedAmount(String),
    #[error("amount {0:?} does not fit in 64 bits")]
    AmountOverflow(String),
    #[error("winning numbers {0:?} do not match numbers/powerball/multiplier")]
    NumbersGrammar(String),
    #[error("winning numbers {text:?} hold {found} main numbers, expected at most 5")]
    TooManyNumbers { text: String, found: usize },
}

/// A row whose role was recognised but whose fields could not be read.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("expected 3 emphasized fields, found {0}")]
    FieldCount(usize),
    #[error("unparsable draw date {text:?}: {source}")]
    Date {
        text: String,
        source: chrono::ParseError,
    },
    #[error("jackpot: {0}")]
    Money(#[from] DecodeError),
    #[error("winner name missing")]
    MissingWinnerName,
    #[error("store details missing")]
    MissingStoreDetails,
    #[error("store name {0:?} not found in store details")]
    StoreNameNotFound(String),
    #[error("store name {0:?} is not followed by a comma in store details")]
    StoreNameWithoutComma(String),
    #[error("winner row with no open drawing")]
    OrphanedWinner,
}

/// Position and text of an offending row, enough to find it in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRef {
    pub index: usize,
    pub text: String,
}

impl fmt::Display for RowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.index, self.text)
    }
}

/// A dropped row, reported on the diagnostic stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    pub reason: String,
    pub row: RowRef,
}

impl RowFailure {
    pub fn new(reason: impl fmt::Display, row: RowRef) -> Self {
        Self {
            reason: reason.to_string(),
            row,
        }
    }
}
