use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::DecodeError;

static WINNING_NUMBERS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<numbers>[0-9-]+)/(?P<powerball>[0-9]{1,2})/(?P<multiplier>NA|[0-9])$")
        .unwrap()
});
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

pub const MAIN_NUMBERS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplier {
    NotApplicable,
    Value(u8),
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Multiplier::NotApplicable => f.write_str("NA"),
            Multiplier::Value(v) => write!(f, "{}", v),
        }
    }
}

/// Decoded form of a drawing's winning-numbers text.
///
/// A main-number slot is `None` when its token was empty or not an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumbers {
    pub numbers: [Option<u32>; MAIN_NUMBERS],
    pub powerball: u8,
    pub multiplier: Multiplier,
}

/// Decode "12-03-45-6-09/11/2" style text.
///
/// Digits are taken as given; zero padding is only removed at extraction time.
pub fn decode(text: &str) -> Result<ParsedNumbers, DecodeError> {
    let trimmed = text.trim();
    let caps = WINNING_NUMBERS_RE
        .captures(trimmed)
        .ok_or_else(|| DecodeError::NumbersGrammar(text.to_string()))?;

    let tokens: Vec<&str> = SEPARATOR_RE.split(&caps["numbers"]).collect();
    if tokens.len() > MAIN_NUMBERS {
        return Err(DecodeError::TooManyNumbers {
            text: text.to_string(),
            found: tokens.len(),
        });
    }
    let mut numbers = [None; MAIN_NUMBERS];
    for (slot, token) in numbers.iter_mut().zip(&tokens) {
        *slot = token.parse().ok();
    }

    // One or two ASCII digits always fit.
    let powerball = caps["powerball"]
        .parse()
        .map_err(|_| DecodeError::NumbersGrammar(text.to_string()))?;
    let multiplier = match &caps["multiplier"] {
        "NA" => Multiplier::NotApplicable,
        digit => Multiplier::Value(
            digit
                .parse()
                .map_err(|_| DecodeError::NumbersGrammar(text.to_string()))?,
        ),
    };

    Ok(ParsedNumbers {
        numbers,
        powerball,
        multiplier,
    })
}
