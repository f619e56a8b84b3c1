use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;
use tracing::warn;

use crate::decode::numbers;
use crate::store::DrawingRecord;

/// How many entries each end of a ranking reports.
pub const TOP_N: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Frequency {
    pub value: u32,
    pub count: usize,
}

#[derive(Debug, Default, Serialize)]
pub struct FrequencyReport {
    pub drawings: usize,
    pub skipped: usize,
    pub most_common_numbers: Vec<Frequency>,
    pub least_common_numbers: Vec<Frequency>,
    pub most_common_powerballs: Vec<Frequency>,
    pub least_common_powerballs: Vec<Frequency>,
    /// Multiplier value ("NA" or a digit) → drawings.
    pub multipliers: BTreeMap<String, usize>,
}

/// Count main numbers and powerballs across all stored drawings.
///
/// Records whose numbers do not decode are skipped; empty number slots are not counted.
pub fn analyze(records: &[DrawingRecord]) -> FrequencyReport {
    let mut number_counts: BTreeMap<u32, usize> = BTreeMap::new();
    let mut powerball_counts: BTreeMap<u32, usize> = BTreeMap::new();
    let mut report = FrequencyReport::default();

    for record in records {
        let parsed = match numbers::decode(&record.winning_numbers) {
            Ok(p) => p,
            Err(e) => {
                warn!(draw_date = %record.draw_date, "skipping drawing: {}", e);
                report.skipped += 1;
                continue;
            }
        };
        report.drawings += 1;
        for n in parsed.numbers.iter().flatten() {
            *number_counts.entry(*n).or_default() += 1;
        }
        *powerball_counts.entry(u32::from(parsed.powerball)).or_default() += 1;
        *report
            .multipliers
            .entry(parsed.multiplier.to_string())
            .or_default() += 1;
    }

    let numbers = ranked(&number_counts);
    let powerballs = ranked(&powerball_counts);
    report.most_common_numbers = head(&numbers);
    report.least_common_numbers = tail(&numbers);
    report.most_common_powerballs = head(&powerballs);
    report.least_common_powerballs = tail(&powerballs);
    report
}

/// Count descending, ties broken by the smaller value first.
fn ranked(counts: &BTreeMap<u32, usize>) -> Vec<Frequency> {
    let mut ranked: Vec<Frequency> = counts
        .iter()
        .map(|(&value, &count)| Frequency { value, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.value.cmp(&b.value)));
    ranked
}

fn head(ranked: &[Frequency]) -> Vec<Frequency> {
    ranked.iter().take(TOP_N).copied().collect()
}

fn tail(ranked: &[Frequency]) -> Vec<Frequency> {
    ranked[ranked.len().saturating_sub(TOP_N)..].to_vec()
}

pub fn write_summary<W: Write>(report: &FrequencyReport, mut w: W) -> io::Result<()> {
    let lines = [
        ("The five most frequent individual numbers are", &report.most_common_numbers, "times"),
        ("The five least frequent individual numbers are", &report.least_common_numbers, "occurrences"),
        ("The most frequent powerball numbers are", &report.most_common_powerballs, "times"),
        ("The least frequent powerball numbers are", &report.least_common_powerballs, "occurrences"),
    ];
    for (lead, entries, unit) in lines {
        write_line(&mut w, lead, entries, unit)?;
    }
    if report.skipped > 0 {
        writeln!(
            w,
            "({} of {} drawings skipped: unreadable winning numbers.)",
            report.skipped,
            report.skipped + report.drawings
        )?;
    }
    Ok(())
}

fn write_line<W: Write>(w: &mut W, lead: &str, entries: &[Frequency], unit: &str) -> io::Result<()> {
    let values = join(entries.iter().map(|f| f.value.to_string()));
    let counts = join(entries.iter().map(|f| f.count.to_string()));
    writeln!(w, "{}: {} ({} {} each respectively).", lead, values, counts, unit)
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn records(numbers: &[&str]) -> Vec<DrawingRecord> {
        numbers
            .iter()
            .map(|n| DrawingRecord {
                draw_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                jackpot_amount: 1,
                winning_numbers: n.to_string(),
            })
            .collect()
    }

    fn values(f: &[Frequency]) -> Vec<u32> {
        f.iter().map(|f| f.value).collect()
    }

    #[test]
    fn counts_numbers_and_powerballs() {
        let report = analyze(&records(&[
            "1-2-3-4-5/10/2",
            "1-2-3-4-6/10/NA",
            "1-2-3-7-8/11/2",
            "1-2-9-10-11/12/3",
        ]));
        assert_eq!(report.drawings, 4);
        assert_eq!(values(&report.most_common_numbers), [1, 2, 3, 4, 5]);
        assert_eq!(report.most_common_numbers[0].count, 4);
        assert_eq!(report.most_common_numbers[2].count, 3);
        // ties at count 1 fall back to ascending value
        assert_eq!(values(&report.least_common_numbers), [7, 8, 9, 10, 11]);
        assert_eq!(values(&report.most_common_powerballs), [10, 11, 12]);
        assert_eq!(values(&report.least_common_powerballs), [10, 11, 12]);
        assert_eq!(report.multipliers.get("2"), Some(&2));
        assert_eq!(report.multipliers.get("NA"), Some(&1));
    }

    #[test]
    fn bad_rows_are_skipped_and_missing_slots_ignored() {
        let report = analyze(&records(&["garbage", "-5-5-5-5/1/NA"]));
        assert_eq!(report.skipped, 1);
        assert_eq!(report.drawings, 1);
        assert_eq!(report.most_common_numbers, [Frequency { value: 5, count: 4 }]);
    }

    #[test]
    fn summary_lines() {
        let report = analyze(&records(&["1-2-3-4-5/10/2", "1-2-3-4-6/10/2"]));
        let mut out = Vec::new();
        write_summary(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "The five most frequent individual numbers are: 1, 2, 3, 4, 5 (2, 2, 2, 2, 1 times each respectively)."
        );
        assert_eq!(
            lines[1],
            "The five least frequent individual numbers are: 2, 3, 4, 5, 6 (2, 2, 2, 1, 1 occurrences each respectively)."
        );
        assert_eq!(
            lines[2],
            "The most frequent powerball numbers are: 10 (2 times each respectively)."
        );
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn empty_input() {
        let report = analyze(&[]);
        assert!(report.most_common_numbers.is_empty());
        assert!(report.least_common_powerballs.is_empty());
    }
}
