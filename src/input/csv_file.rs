use crate::error::AppError;
use crate::input::records::{is_win, MatchRecord};
use csv::StringRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

// Raw CSV row before eager validation. Every column is optional here so a
// missing column surfaces as a MissingField error, not a deserialize failure.
#[derive(Debug, Deserialize)]
struct RawRow {
    kills: Option<u32>,
    deaths: Option<u32>,
    assists: Option<u32>,
    agent: Option<String>,
    map: Option<String>,
    result: Option<String>,
    win: Option<String>,
}

pub fn load(path: &Path) -> Result<Vec<MatchRecord>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::IoError(format!("{}: {}", path.display(), e)))?;
    parse(file)
}

/// Parse CSV match history. Headers are matched case-insensitively so both
/// `Kills` and `kills` shapes are accepted. Rows are numbered from 1,
/// excluding the header line.
pub fn parse<R: Read>(reader: R) -> Result<Vec<MatchRecord>, AppError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers: StringRecord = rdr
        .headers()
        .map_err(|e| AppError::CsvError(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();

    let mut records = Vec::new();
    for (idx, row) in rdr.records().enumerate() {
        let row = row.map_err(|e| AppError::CsvError(e.to_string()))?;
        let raw: RawRow = row
            .deserialize(Some(&headers))
            .map_err(|e| AppError::CsvError(format!("record {}: {}", idx + 1, e)))?;
        records.push(validate(raw, idx + 1)?);
    }

    Ok(records)
}

fn validate(raw: RawRow, row: usize) -> Result<MatchRecord, AppError> {
    let kills = raw
        .kills
        .ok_or(AppError::MissingField { field: "kills", row })?;
    let deaths = raw
        .deaths
        .ok_or(AppError::MissingField { field: "deaths", row })?;
    let assists = raw
        .assists
        .ok_or(AppError::MissingField { field: "assists", row })?;

    // Two input shapes: a string `result` column, or a boolean-ish `win` column.
    let won = match (raw.result, raw.win) {
        (Some(result), _) => is_win(&result),
        (None, Some(win)) => truthy(&win),
        (None, None) => return Err(AppError::MissingField { field: "result", row }),
    };

    Ok(MatchRecord {
        kills,
        deaths,
        assists,
        agent: raw.agent,
        map: raw.map,
        won,
    })
}

// Accepts "true"/"True"/"1" (pandas-style exports write "True"/"False").
fn truthy(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("true") || value == "1"
}
