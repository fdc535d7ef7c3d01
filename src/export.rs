use crate::analysis::grader::GradedRecord;
use crate::analysis::grouping::GroupRow;
use crate::analysis::summary::SummaryStats;
use crate::error::AppError;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ReportCsvRow<'a> {
    agent: Option<&'a str>,
    map: Option<&'a str>,
    kills: u32,
    deaths: u32,
    assists: u32,
    kd_ratio: f64,
    grade: String,
    win: u8,
}

/// One-row CSV with the SummaryStats field names as header. Reading it back
/// reproduces the struct field-for-field.
pub fn write_summary(stats: &SummaryStats, path: &Path) -> Result<(), AppError> {
    let mut wtr =
        csv::Writer::from_path(path).map_err(|e| AppError::CsvError(e.to_string()))?;
    wtr.serialize(stats)
        .map_err(|e| AppError::CsvError(e.to_string()))?;
    wtr.flush()
        .map_err(|e| AppError::IoError(e.to_string()))?;
    Ok(())
}

/// Grouped-summary CSV, one row per group in table order. `key_header` names
/// the grouping column (agent, map).
pub fn write_group_table(
    table: &[GroupRow],
    key_header: &str,
    path: &Path,
) -> Result<(), AppError> {
    let mut wtr =
        csv::Writer::from_path(path).map_err(|e| AppError::CsvError(e.to_string()))?;

    wtr.write_record([
        key_header,
        "total_matches",
        "avg_kills",
        "avg_deaths",
        "kd_ratio",
        "win_rate_percent",
        "match_count",
    ])
    .map_err(|e| AppError::CsvError(e.to_string()))?;

    for row in table {
        wtr.write_record([
            row.key.clone(),
            row.summary.total_matches.to_string(),
            row.summary.avg_kills.to_string(),
            row.summary.avg_deaths.to_string(),
            row.summary.kd_ratio.to_string(),
            row.summary.win_rate_percent.to_string(),
            row.match_count.to_string(),
        ])
        .map_err(|e| AppError::CsvError(e.to_string()))?;
    }

    wtr.flush()
        .map_err(|e| AppError::IoError(e.to_string()))?;
    Ok(())
}

pub fn write_match_report(graded: &[GradedRecord], path: &Path) -> Result<(), AppError> {
    let mut wtr =
        csv::Writer::from_path(path).map_err(|e| AppError::CsvError(e.to_string()))?;

    for entry in graded {
        wtr.serialize(ReportCsvRow {
            agent: entry.record.agent.as_deref(),
            map: entry.record.map.as_deref(),
            kills: entry.record.kills,
            deaths: entry.record.deaths,
            assists: entry.record.assists,
            kd_ratio: entry.kd_ratio,
            grade: entry.grade.to_string(),
            win: entry.win,
        })
        .map_err(|e| AppError::CsvError(e.to_string()))?;
    }

    wtr.flush()
        .map_err(|e| AppError::IoError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::grader::grade;
    use crate::input::records::MatchRecord;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn summary_round_trips_through_csv() {
        let stats = SummaryStats {
            total_matches: 5,
            avg_kills: 16.4,
            avg_deaths: 10.6,
            kd_ratio: 1.55,
            win_rate_percent: 60.0,
        };

        let dir = tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        write_summary(&stats, &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let restored: SummaryStats = rdr.deserialize().next().unwrap().unwrap();
        assert_eq!(restored, stats);
    }

    #[test]
    fn group_table_header_carries_the_key_name() {
        let table = vec![GroupRow {
            key: "Jett".to_string(),
            summary: SummaryStats {
                total_matches: 2,
                avg_kills: 15.0,
                avg_deaths: 10.0,
                kd_ratio: 1.5,
                win_rate_percent: 50.0,
            },
            match_count: 2,
        }];

        let dir = tempdir().unwrap();
        let path = dir.path().join("agent_summary.csv");
        write_group_table(&table, "agent", &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "agent,total_matches,avg_kills,avg_deaths,kd_ratio,win_rate_percent,match_count"
        );
        assert_eq!(lines.next().unwrap(), "Jett,2,15,10,1.5,50,2");
    }

    #[test]
    fn match_report_has_one_row_per_match() {
        let records = vec![
            MatchRecord {
                kills: 18,
                deaths: 12,
                assists: 3,
                agent: Some("Jett".to_string()),
                map: Some("Haven".to_string()),
                won: true,
            },
            MatchRecord {
                kills: 10,
                deaths: 8,
                assists: 9,
                agent: Some("Sage".to_string()),
                map: Some("Bind".to_string()),
                won: false,
            },
        ];
        let graded = grade(&records).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("match_report.csv");
        write_match_report(&graded, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3); // header + 2 rows
        assert!(lines[0].starts_with("agent,map,kills,deaths,assists,kd_ratio,grade,win"));
        assert!(lines[1].ends_with("1.5,B,1"));
    }
}
