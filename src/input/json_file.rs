use crate::error::AppError;
use crate::input::records::MatchRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

// Record-oriented document: { "matches": [ { kills, deaths, assists, win } ] }
#[derive(Debug, Deserialize)]
struct MatchesDoc {
    matches: Vec<RawMatch>,
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    kills: Option<u32>,
    deaths: Option<u32>,
    assists: Option<u32>,
    win: Option<bool>,
    #[serde(default)]
    agent: Option<String>,
    #[serde(default)]
    map: Option<String>,
}

pub fn load(path: &Path) -> Result<Vec<MatchRecord>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::IoError(format!("{}: {}", path.display(), e)))?;
    parse(file)
}

pub fn parse<R: Read>(reader: R) -> Result<Vec<MatchRecord>, AppError> {
    let doc: MatchesDoc =
        serde_json::from_reader(reader).map_err(|e| AppError::JsonError(e.to_string()))?;

    doc.matches
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| validate(raw, idx + 1))
        .collect()
}

fn validate(raw: RawMatch, row: usize) -> Result<MatchRecord, AppError> {
    let kills = raw
        .kills
        .ok_or(AppError::MissingField { field: "kills", row })?;
    let deaths = raw
        .deaths
        .ok_or(AppError::MissingField { field: "deaths", row })?;
    let assists = raw
        .assists
        .ok_or(AppError::MissingField { field: "assists", row })?;
    let won = raw
        .win
        .ok_or(AppError::MissingField { field: "win", row })?;

    Ok(MatchRecord {
        kills,
        deaths,
        assists,
        agent: raw.agent,
        map: raw.map,
        won,
    })
}
