use crate::input::records::MatchRecord;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over a set of matches. Field names are stable: they
/// double as the CSV export header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_matches: usize,
    pub avg_kills: f64,
    pub avg_deaths: f64,
    pub kd_ratio: f64,
    pub win_rate_percent: f64,
}

/// `numerator / denominator`, with a zero denominator defined as 0 rather
/// than an error. Keeps dataset-level ratios total over empty inputs.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summarize a set of matches. Total over any input: the empty set yields
/// zero for every field so downstream consumers always see numbers.
pub fn summarize(records: &[MatchRecord]) -> SummaryStats {
    let total_matches = records.len();
    let total_kills: u64 = records.iter().map(|r| u64::from(r.kills)).sum();
    let total_deaths: u64 = records.iter().map(|r| u64::from(r.deaths)).sum();
    let wins = records.iter().filter(|r| r.won).count();
    let n = total_matches as f64;

    SummaryStats {
        total_matches,
        avg_kills: round2(safe_ratio(total_kills as f64, n)),
        avg_deaths: round2(safe_ratio(total_deaths as f64, n)),
        kd_ratio: round2(safe_ratio(total_kills as f64, total_deaths as f64)),
        win_rate_percent: round2(safe_ratio(wins as f64 * 100.0, n)),
    }
}
