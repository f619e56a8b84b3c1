use tracing::{info, warn};

use super::extract::{drawing, winner, DetailRow};
use super::rows::{classify, RawRow, RowRole};
use crate::error::{ExtractError, RowFailure, RowRef};
use crate::store::Drawing;

/// Drawings in page order, plus every row that had to be dropped.
#[derive(Debug, Default)]
pub struct ParsedTable {
    pub drawings: Vec<Drawing>,
    pub failures: Vec<RowFailure>,
}

/// Folds classified rows into drawings.
///
/// Winner rows attach to the drawing opened by the latest good summary row.
/// A failed row is reported and dropped without touching the open drawing.
pub struct TableAssembler {
    parse_winners: bool,
    open: Option<Drawing>,
    table: ParsedTable,
}

impl TableAssembler {
    pub fn new(parse_winners: bool) -> Self {
        Self {
            parse_winners,
            open: None,
            table: ParsedTable::default(),
        }
    }

    pub fn push(&mut self, index: usize, row: &RawRow) {
        match classify(row) {
            RowRole::Summary => match drawing::extract(row) {
                Ok(next) => {
                    if let Some(done) = self.open.replace(next) {
                        self.table.drawings.push(done);
                    }
                }
                Err(e) => self.report(e, index, row),
            },
            RowRole::Detail if self.parse_winners => self.push_detail(index, row),
            RowRole::Detail | RowRole::Divider | RowRole::Unclassifiable => {}
        }
    }

    fn push_detail(&mut self, index: usize, row: &RawRow) {
        // Header rows are skipped whether or not a drawing is open.
        let extracted = match winner::extract(row) {
            Ok(DetailRow::SectionHeader(text)) => {
                info!("Processing {}", text);
                return;
            }
            other => other,
        };
        let Some(open) = self.open.as_mut() else {
            self.report(ExtractError::OrphanedWinner, index, row);
            return;
        };
        match extracted {
            Ok(DetailRow::Winner(w)) => open.winners.push(w),
            Ok(DetailRow::SectionHeader(_)) => {}
            Err(e) => self.report(e, index, row),
        }
    }

    fn report(&mut self, reason: ExtractError, index: usize, row: &RawRow) {
        let failure = RowFailure::new(
            reason,
            RowRef {
                index,
                text: row.text.clone(),
            },
        );
        warn!(reason = %failure.reason, "dropping {}", failure.row);
        self.table.failures.push(failure);
    }

    pub fn finish(mut self) -> ParsedTable {
        if let Some(last) = self.open.take() {
            self.table.drawings.push(last);
        }
        self.table
    }
}

pub fn assemble(rows: &[RawRow], parse_winners: bool) -> ParsedTable {
    let mut assembler = TableAssembler::new(parse_winners);
    for (i, row) in rows.iter().enumerate() {
        assembler.push(i, row);
    }
    assembler.finish()
}

// ── Tests ──
