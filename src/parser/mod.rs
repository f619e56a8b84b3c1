pub mod extract;
pub mod rows;
pub mod table;

use tracing::{info, warn};

use crate::page;
pub use table::ParsedTable;

/// Two-pass pipeline: page → raw rows → drawings.
pub fn process_document(html: &str, parse_winners: bool) -> ParsedTable {
    let rows = page::table_rows(html);
    let table = table::assemble(&rows, parse_winners);
    for d in &table.drawings {
        if let Err(e) = d.parsed_numbers() {
            warn!(draw_date = %d.draw_date, "winning numbers will not decode: {}", e);
        }
    }
    info!(
        rows = rows.len(),
        drawings = table.drawings.len(),
        dropped = table.failures.len(),
        "parsed jackpot table"
    );
    table
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn fixture() -> String {
        std::fs::read_to_string("tests/fixtures/jackpot_winners.html").unwrap()
    }

    #[test]
    fn fixture_drawings() {
        let table = process_document(&fixture(), true);
        let dates: Vec<String> = table
            .drawings
            .iter()
            .map(|d| d.draw_date.to_string())
            .collect();
        assert_eq!(dates, ["2023-07-19", "2023-04-12", "2023-01-07", "2022-11-07"]);

        let first = &table.drawings[0];
        assert_eq!(first.jackpot_amount, 1_080_000_000);
        assert_eq!(first.winning_numbers_raw, "7-10-11-13-24/24/2");

        let last = &table.drawings[3];
        assert_eq!(last.draw_date, NaiveDate::from_ymd_opt(2022, 11, 7).unwrap());
        assert_eq!(last.jackpot_amount, 2_040_000_000);
        assert_eq!(last.winning_numbers_raw, "10-33-41-47-56/10/NA");
    }

    #[test]
    fn fixture_winners() {
        let table = process_document(&fixture(), true);
        let winners: Vec<(&str, &str, &str)> = table.drawings[0]
            .winners
            .iter()
            .map(|w| (w.name.as_str(), w.store_name.as_str(), w.store_address.as_str()))
            .collect();
        assert_eq!(
            winners,
            [(
                "Edwin Castro",
                "Joe's Service Center",
                "2020 N. Lake Ave, Altadena, CA"
            )]
        );
        assert_eq!(table.drawings[1].winners.len(), 2);
        assert_eq!(table.drawings[1].winners[1].name, "Anonymous");
        assert!(table.drawings[2].winners.is_empty());
    }

    #[test]
    fn fixture_failures() {
        let table = process_document(&fixture(), true);
        // one summary with a bad jackpot, one winner whose store name is missing from the block
        assert_eq!(table.failures.len(), 2);
        assert!(table.failures[0].reason.contains("jackpot"));
        assert!(table.failures[1].reason.contains("Mystery Mart"));
    }

    #[test]
    fn reduced_configuration_has_no_winners() {
        let table = process_document(&fixture(), false);
        assert_eq!(table.drawings.len(), 4);
        assert!(table.drawings.iter().all(|d| d.winners.is_empty()));
        assert_eq!(table.failures.len(), 1);
    }
}
