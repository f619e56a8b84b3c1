use chrono::NaiveDate;

use crate::decode::money;
use crate::error::ExtractError;
use crate::parser::rows::RawRow;
use crate::store::Drawing;

/// "August 23, 2023"
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// Read date, jackpot and winning numbers from a summary row.
/// The returned drawing has no winners yet.
pub fn extract(row: &RawRow) -> Result<Drawing, ExtractError> {
    let [date, jackpot, numbers] = row.emphasized.as_slice() else {
        return Err(ExtractError::FieldCount(row.emphasized.len()));
    };

    let date = date.trim();
    let draw_date =
        NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|source| ExtractError::Date {
            text: date.to_string(),
            source,
        })?;
    let jackpot_amount = money::decode(jackpot.trim())?;

    Ok(Drawing {
        draw_date,
        jackpot_amount,
        winning_numbers_raw: normalize_numbers(numbers),
        winners: Vec::new(),
    })
}

/// Drop whitespace and the zero padding in front of each number ("03-45" → "3-45").
/// A number made only of zeros keeps one.
pub fn normalize_numbers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().filter(|c| !c.is_whitespace()).peekable();
    let mut at_number_start = true;

    while let Some(c) = chars.next() {
        if c == '0' && at_number_start && chars.peek().is_some_and(|n| n.is_ascii_digit()) {
            continue;
        }
        at_number_start = !c.is_ascii_digit();
        out.push(c);
    }
    out
}
