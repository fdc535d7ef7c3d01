use crate::analysis::summary::round2;
use crate::error::AppError;
use crate::input::records::MatchRecord;
use std::fmt;

/// Letter grade from kill count, bands checked highest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn from_kills(kills: u32) -> Self {
        if kills >= 25 {
            Grade::S
        } else if kills >= 20 {
            Grade::A
        } else if kills >= 15 {
            Grade::B
        } else if kills >= 10 {
            Grade::C
        } else {
            Grade::D
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        };
        write!(f, "{}", letter)
    }
}

/// A match annotated with its per-match derived fields.
#[derive(Debug, Clone, PartialEq)]
pub struct GradedRecord {
    pub record: MatchRecord,
    pub kd_ratio: f64,
    pub grade: Grade,
    pub win: u8,
}

/// Grade every match, order-preserving and one-to-one with the input.
///
/// Unlike the dataset-level summary, the per-match K/D is not zero-guarded:
/// a record with zero deaths is reported as a fault so the caller sees the
/// data-quality issue instead of a silent 0.
pub fn grade(records: &[MatchRecord]) -> Result<Vec<GradedRecord>, AppError> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            if record.deaths == 0 {
                return Err(AppError::ZeroDeaths { row: idx + 1 });
            }
            Ok(GradedRecord {
                record: record.clone(),
                kd_ratio: round2(record.kills as f64 / record.deaths as f64),
                grade: Grade::from_kills(record.kills),
                win: u8::from(record.won),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn record(kills: u32, deaths: u32, won: bool) -> MatchRecord {
        MatchRecord {
            kills,
            deaths,
            assists: 2,
            agent: Some("Jett".to_string()),
            map: Some("Haven".to_string()),
            won,
        }
    }

    #[rstest]
    #[case(30, Grade::S)]
    #[case(25, Grade::S)]
    #[case(24, Grade::A)]
    #[case(20, Grade::A)]
    #[case(19, Grade::B)]
    #[case(15, Grade::B)]
    #[case(14, Grade::C)]
    #[case(10, Grade::C)]
    #[case(9, Grade::D)]
    #[case(0, Grade::D)]
    fn grade_band_boundaries(#[case] kills: u32, #[case] expected: Grade) {
        assert_eq!(Grade::from_kills(kills), expected);
    }

    #[test]
    fn grading_preserves_order_and_derives_fields() {
        let records = vec![record(18, 12, true), record(22, 14, false)];
        let graded = grade(&records).unwrap();
        assert_eq!(graded.len(), 2);
        assert_eq!(graded[0].kd_ratio, 1.5);
        assert_eq!(graded[0].grade, Grade::B);
        assert_eq!(graded[0].win, 1);
        assert_eq!(graded[1].kd_ratio, 1.57);
        assert_eq!(graded[1].grade, Grade::A);
        assert_eq!(graded[1].win, 0);
        assert_eq!(graded[0].record, records[0]);
    }

    #[test]
    fn zero_deaths_is_a_fault_naming_the_row() {
        let records = vec![record(18, 12, true), record(30, 0, true)];
        let err = grade(&records).unwrap_err();
        assert!(matches!(err, AppError::ZeroDeaths { row: 2 }));
    }

    #[test]
    fn grade_displays_as_a_letter() {
        assert_eq!(Grade::S.to_string(), "S");
        assert_eq!(Grade::D.to_string(), "D");
    }
}
