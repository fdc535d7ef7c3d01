use crate::analysis::summary::{summarize, SummaryStats};
use crate::error::AppError;
use crate::input::records::MatchRecord;
use serde::Serialize;
use std::collections::HashMap;

/// One row of a grouped-summary table (per-agent, per-map).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
    pub key: String,
    pub summary: SummaryStats,
    pub match_count: usize,
}

/// Partition records by a key and summarize each partition. Rows come out in
/// first-encounter order of each distinct key, not sorted by value.
///
/// `field` names the grouping column for error reporting; a record where
/// `key_fn` yields nothing fails the whole call, no best-effort grouping.
pub fn group_by<F>(
    records: &[MatchRecord],
    field: &'static str,
    key_fn: F,
) -> Result<Vec<GroupRow>, AppError>
where
    F: Fn(&MatchRecord) -> Option<&str>,
{
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<MatchRecord>> = HashMap::new();

    for (idx, record) in records.iter().enumerate() {
        let key = key_fn(record).ok_or(AppError::MissingField { field, row: idx + 1 })?;
        if !buckets.contains_key(key) {
            order.push(key.to_string());
        }
        buckets.entry(key.to_string()).or_default().push(record.clone());
    }

    Ok(order
        .into_iter()
        .map(|key| {
            let members = &buckets[&key];
            let summary = summarize(members);
            let match_count = members.len();
            GroupRow {
                key,
                summary,
                match_count,
            }
        })
        .collect())
}
