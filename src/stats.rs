use std::cmp::Reverse;
use std::collections::HashMap;

use serde::Serialize;

use crate::dates::parse_timestamp;
use crate::record::FindRecord;

/// Display palette, cycled by rank when painting the period histogram.
pub const PALETTE: [&str; 5] = ["accent", "blue", "green", "purple", "amber"];

/// One bar of the period histogram: normalized label, share of the record
/// set rounded to whole percent, palette tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodStat {
    pub label: String,
    pub percent: u8,
    pub color: &'static str,
}

/// Normalized period label: text before any parenthetical sub-stage, so
/// "Jurassic (Toarcian)" becomes "Jurassic". Missing or empty periods are
/// labelled "Unknown".
pub fn normalize_period(period: Option<&str>) -> String {
    match period {
        Some(p) if !p.is_empty() => p.split(" (").next().unwrap_or(p).to_string(),
        _ => "Unknown".to_string(),
    }
}

/// Top-5 period-frequency histogram over the given records.
///
/// Labels sort descending by raw count; equal counts keep first-encounter
/// order. Each percentage is rounded independently against the total record
/// count, so the column need not sum to 100. An empty record set yields a
/// fixed three-period placeholder at zero percent.
pub fn compute_period_stats(records: &[FindRecord]) -> Vec<PeriodStat> {
    if records.is_empty() {
        return fallback_stats();
    }

    // counts in first-encounter order, so the later stable sort breaks
    // ties by encounter
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for record in records {
        let label = normalize_period(record.period.as_deref());
        match index.get(&label) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(label.clone(), counts.len());
                counts.push((label, 1));
            }
        }
    }

    counts.sort_by_key(|(_, count)| Reverse(*count));

    let total = records.len();
    counts
        .into_iter()
        .take(5)
        .enumerate()
        .map(|(rank, (label, count))| PeriodStat {
            label,
            percent: ((count as f64 / total as f64) * 100.0).round() as u8,
            color: PALETTE[rank % PALETTE.len()],
        })
        .collect()
}

fn fallback_stats() -> Vec<PeriodStat> {
    vec![
        PeriodStat {
            label: "Jurassic".to_string(),
            percent: 0,
            color: PALETTE[0],
        },
        PeriodStat {
            label: "Cretaceous".to_string(),
            percent: 0,
            color: PALETTE[1],
        },
        PeriodStat {
            label: "Devonian".to_string(),
            percent: 0,
            color: PALETTE[2],
        },
    ]
}

/// Most recently shared records, newest first, at most five.
///
/// The sort is stable: records sharing a timestamp keep their input order,
/// and unparseable timestamps sort after every real one.
pub fn compute_activity(records: &[FindRecord]) -> Vec<FindRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| Reverse(parse_timestamp(&record.shared_at)));
    sorted.truncate(5);
    sorted
}
