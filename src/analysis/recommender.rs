use crate::analysis::grouping::GroupRow;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub best_winrate_agent: String,
    pub best_kd_agent: String,
    pub most_played_agent: String,
    pub recommended_agent: String,
}

/// Rank agents by win rate, K/D and matches played, then combine the three
/// winners by plurality vote.
///
/// Ties on a ranking criterion go to the earlier row in the table. A
/// three-way vote split resolves to the win-rate winner.
pub fn recommend(table: &[GroupRow]) -> Result<Recommendation, AppError> {
    if table.is_empty() {
        return Err(AppError::EmptyInput(
            "cannot recommend an agent from an empty summary table".to_string(),
        ));
    }

    let best_winrate = top_by(table, |row| row.summary.win_rate_percent);
    let best_kd = top_by(table, |row| row.summary.kd_ratio);
    let most_played = top_by(table, |row| row.match_count as f64);

    // Vote order matters: on an all-distinct split the first candidate wins,
    // which is the win-rate winner.
    let votes = [
        best_winrate.key.as_str(),
        best_kd.key.as_str(),
        most_played.key.as_str(),
    ];
    let recommended = plurality(&votes).to_string();

    Ok(Recommendation {
        best_winrate_agent: best_winrate.key.clone(),
        best_kd_agent: best_kd.key.clone(),
        most_played_agent: most_played.key.clone(),
        recommended_agent: recommended,
    })
}

// Strictly-greater comparison keeps the first row on ties.
fn top_by<F>(table: &[GroupRow], metric: F) -> &GroupRow
where
    F: Fn(&GroupRow) -> f64,
{
    table
        .iter()
        .skip(1)
        .fold(&table[0], |best, row| {
            if metric(row) > metric(best) {
                row
            } else {
                best
            }
        })
}

fn plurality<'a>(votes: &[&'a str]) -> &'a str {
    let mut winner = votes[0];
    let mut winner_count = 0;
    for &candidate in votes {
        let count = votes.iter().filter(|&&v| v == candidate).count();
        if count > winner_count {
            winner = candidate;
            winner_count = count;
        }
    }
    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::summary::SummaryStats;
    use pretty_assertions::assert_eq;

    fn row(key: &str, win_rate: f64, kd: f64, count: usize) -> GroupRow {
        GroupRow {
            key: key.to_string(),
            summary: SummaryStats {
                total_matches: count,
                avg_kills: 0.0,
                avg_deaths: 0.0,
                kd_ratio: kd,
                win_rate_percent: win_rate,
            },
            match_count: count,
        }
    }

    #[test]
    fn empty_table_is_an_error() {
        let err = recommend(&[]).unwrap_err();
        assert!(matches!(err, AppError::EmptyInput(_)));
    }

    #[test]
    fn majority_vote_wins() {
        let table = vec![
            row("A", 60.0, 1.2, 10),
            row("B", 60.0, 2.0, 5),
        ];
        let rec = recommend(&table).unwrap();
        // Win rate ties at 60, A comes first in the table.
        assert_eq!(rec.best_winrate_agent, "A");
        assert_eq!(rec.best_kd_agent, "B");
        assert_eq!(rec.most_played_agent, "A");
        assert_eq!(rec.recommended_agent, "A");
    }

    #[test]
    fn three_way_split_falls_back_to_winrate_winner() {
        let table = vec![
            row("A", 80.0, 1.0, 3),
            row("B", 40.0, 3.0, 5),
            row("C", 50.0, 1.5, 9),
        ];
        let rec = recommend(&table).unwrap();
        assert_eq!(rec.best_winrate_agent, "A");
        assert_eq!(rec.best_kd_agent, "B");
        assert_eq!(rec.most_played_agent, "C");
        assert_eq!(rec.recommended_agent, "A");
    }

    #[test]
    fn ties_keep_the_earlier_row_on_every_criterion() {
        let table = vec![
            row("X", 50.0, 1.0, 4),
            row("Y", 50.0, 1.0, 4),
        ];
        let rec = recommend(&table).unwrap();
        assert_eq!(rec.best_winrate_agent, "X");
        assert_eq!(rec.best_kd_agent, "X");
        assert_eq!(rec.most_played_agent, "X");
        assert_eq!(rec.recommended_agent, "X");
    }

    #[test]
    fn single_row_table_recommends_itself() {
        let table = vec![row("Solo", 0.0, 0.0, 1)];
        let rec = recommend(&table).unwrap();
        assert_eq!(rec.recommended_agent, "Solo");
    }
}
