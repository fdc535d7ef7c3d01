use crate::analysis::grader::GradedRecord;
use crate::analysis::grouping::GroupRow;
use crate::analysis::recommender::Recommendation;
use crate::analysis::summary::SummaryStats;
use colored::*;
use tabled::{builder::Builder, settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "#")]
    number: String,
    agent: String,
    map: String,
    kills: u32,
    deaths: u32,
    assists: u32,
    #[tabled(rename = "K/D")]
    kd: String,
    grade: String,
    result: String,
}

pub fn display_summary(stats: &SummaryStats) {
    println!("\n{}", "📊 MATCH SUMMARY".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    println!("  {} {}", "Total Matches:".bold(), stats.total_matches);
    println!("  {} {:.2}", "Average Kills:".bold(), stats.avg_kills);
    println!("  {} {:.2}", "Average Deaths:".bold(), stats.avg_deaths);
    println!("  {} {:.2}", "K/D Ratio:".bold(), stats.kd_ratio);
    println!(
        "  {} {:.2}%",
        "Win Rate:".bold(),
        stats.win_rate_percent
    );
    println!();
}

pub fn display_group_table(title: &str, key_header: &str, table: &[GroupRow]) {
    println!("\n{}", format!("🎯 {}", title).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if table.is_empty() {
        println!("{}", "No data to display".yellow());
        return;
    }

    let mut builder = Builder::default();
    builder.push_record([
        key_header,
        "Matches",
        "Avg Kills",
        "Avg Deaths",
        "K/D Ratio",
        "Win Rate (%)",
    ]);
    for row in table {
        builder.push_record([
            row.key.clone(),
            row.match_count.to_string(),
            format!("{:.2}", row.summary.avg_kills),
            format!("{:.2}", row.summary.avg_deaths),
            format!("{:.2}", row.summary.kd_ratio),
            format!("{:.2}", row.summary.win_rate_percent),
        ]);
    }

    let mut rendered = builder.build();
    rendered.with(Style::rounded());
    println!("{}\n", rendered);
}

pub fn display_recommendation(rec: &Recommendation) {
    println!("\n{}", "🏆 AGENT RECOMMENDATION".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    println!("  {} {}", "Best Winrate Agent:".bold(), rec.best_winrate_agent);
    println!("  {} {}", "Best K/D Agent:".bold(), rec.best_kd_agent);
    println!("  {} {}", "Most Played Agent:".bold(), rec.most_played_agent);
    println!(
        "\n  {} {}",
        "➜ Recommended:".bold().green(),
        rec.recommended_agent.bold().green()
    );
    println!();
}

pub fn display_match_report(graded: &[GradedRecord]) {
    println!("\n{}", "📋 MATCH REPORT".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let mut rows = vec![];
    for (idx, entry) in graded.iter().enumerate() {
        let result = if entry.win == 1 {
            "WIN".green().to_string()
        } else {
            "LOSS".red().to_string()
        };

        rows.push(ReportRow {
            number: format!("{}", idx + 1),
            agent: entry.record.agent.clone().unwrap_or_else(|| "-".to_string()),
            map: entry.record.map.clone().unwrap_or_else(|| "-".to_string()),
            kills: entry.record.kills,
            deaths: entry.record.deaths,
            assists: entry.record.assists,
            kd: format!("{:.2}", entry.kd_ratio),
            grade: entry.grade.to_string(),
            result,
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
