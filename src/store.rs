use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::decode::{self, ParsedNumbers};
use crate::error::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    pub name: String,
    pub store_name: String,
    pub store_address: String,
}

/// One draw and the jackpot winners listed under it, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawing {
    pub draw_date: NaiveDate,
    pub jackpot_amount: u64,
    pub winning_numbers_raw: String,
    pub winners: Vec<Winner>,
}

impl Drawing {
    pub fn parsed_numbers(&self) -> Result<ParsedNumbers, DecodeError> {
        decode::numbers::decode(&self.winning_numbers_raw)
    }
}

// ── CSV rows ──

const DRAWING_HEADER: [&str; 3] = ["draw_date", "jackpot_amount", "winning_numbers"];
const WINNER_HEADER: [&str; 4] = ["draw_date", "name", "store_name", "store_address"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawingRecord {
    pub draw_date: NaiveDate,
    pub jackpot_amount: u64,
    pub winning_numbers: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerRecord {
    pub draw_date: NaiveDate,
    pub name: String,
    pub store_name: String,
    pub store_address: String,
}

impl From<&Drawing> for DrawingRecord {
    fn from(d: &Drawing) -> Self {
        DrawingRecord {
            draw_date: d.draw_date,
            jackpot_amount: d.jackpot_amount,
            winning_numbers: d.winning_numbers_raw.clone(),
        }
    }
}

fn winner_records(drawings: &[Drawing]) -> impl Iterator<Item = WinnerRecord> + '_ {
    drawings.iter().flat_map(|d| {
        d.winners.iter().map(move |w| WinnerRecord {
            draw_date: d.draw_date,
            name: w.name.clone(),
            store_name: w.store_name.clone(),
            store_address: w.store_address.clone(),
        })
    })
}

/// Paths produced by [`write_csv`].
pub struct Written {
    pub drawings: PathBuf,
    pub winners: PathBuf,
}

/// Write drawings and their flattened winners as two CSV files in `dir`.
///
/// `dir` must already exist.
pub fn write_csv(
    drawings: &[Drawing],
    dir: &Path,
    drawings_file: &str,
    winners_file: &str,
) -> Result<Written> {
    info!("Validating directory...");
    if !dir.is_dir() {
        bail!("Directory not found: {}", dir.display());
    }

    info!("Creating file in directory...");
    let drawings_path = dir.join(drawings_file);
    write_records(&drawings_path, &DRAWING_HEADER, drawings.iter().map(DrawingRecord::from))?;

    let winners_path = dir.join(winners_file);
    write_records(&winners_path, &WINNER_HEADER, winner_records(drawings))?;

    info!(
        drawings = drawings.len(),
        path = %drawings_path.display(),
        "wrote csv"
    );
    Ok(Written {
        drawings: drawings_path,
        winners: winners_path,
    })
}

/// Written up front so files with no records still carry their header.
fn write_records<T: Serialize>(
    path: &Path,
    header: &[&str],
    records: impl Iterator<Item = T>,
) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    writer
        .write_record(header)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_drawings(path: &Path) -> Result<Vec<DrawingRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let records = reader
        .deserialize()
        .collect::<Result<Vec<DrawingRecord>, _>>()
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(records)
}
