use regex::Regex;

use crate::error::ExtractError;
use crate::parser::rows::RawRow;
use crate::store::Winner;

/// What a detail row turned out to hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailRow {
    Winner(Winner),
    /// Header cells only; carries the heading text.
    SectionHeader(String),
}

pub fn extract(row: &RawRow) -> Result<DetailRow, ExtractError> {
    if row.is_header_only() {
        return Ok(DetailRow::SectionHeader(row.text.clone()));
    }

    let name = row
        .winner_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(ExtractError::MissingWinnerName)?;
    let (Some(store_name), Some(block)) = (row.store_name.as_deref(), row.store_block.as_deref())
    else {
        return Err(ExtractError::MissingStoreDetails);
    };
    let store_name = store_name.trim();
    let store_address = address_after(block, store_name).ok_or_else(|| {
        if !store_name.is_empty() && block.contains(store_name) {
            ExtractError::StoreNameWithoutComma(store_name.to_string())
        } else {
            ExtractError::StoreNameNotFound(store_name.to_string())
        }
    })?;

    Ok(DetailRow::Winner(Winner {
        name: name.to_string(),
        store_name: store_name.to_string(),
        store_address,
    }))
}

/// Text after the last "<store name>," in the store block, trimmed.
fn address_after(block: &str, store_name: &str) -> Option<String> {
    if store_name.is_empty() {
        return None;
    }
    let re = Regex::new(&format!(r"{}\s*,", regex::escape(store_name))).ok()?;
    let last = re.find_iter(block).last()?;
    Some(block[last.end()..].trim().to_string())
}
