use serde::{Deserialize, Serialize};

/// One played match. `won` is normalized once at ingestion; `agent` and `map`
/// are absent in the JSON input shape, so grouping on them can fail per record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub agent: Option<String>,
    pub map: Option<String>,
    pub won: bool,
}

/// "Win" detection for the string-valued `result` column, case-insensitive.
/// Anything that is not "win" counts as a loss.
pub fn is_win(result: &str) -> bool {
    result.trim().eq_ignore_ascii_case("win")
}
