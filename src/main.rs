mod analysis;
mod config;
mod display;
mod error;
mod export;
mod input;

use analysis::{grader, grouping, recommender, summary};
use clap::Parser;
use config::Config;
use display::output::{
    display_error, display_group_table, display_info, display_match_report,
    display_recommendation, display_success, display_summary,
};
use error::AppError;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "Valo Track")]
#[command(about = "Analyze match history and get agent recommendations", long_about = None)]
struct Args {
    /// Match history file (.csv or .json)
    file: PathBuf,

    /// Write CSV reports (summary, per-agent, per-map, graded matches)
    #[arg(long)]
    export: bool,

    /// Output directory for exported reports (default: VALO_TRACK_OUTPUT or ./output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip the per-match graded report
    #[arg(long)]
    no_grades: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(output) = args.output {
        config.output_dir = output;
    }

    display_info(&format!(
        "Loading match history from {}",
        args.file.display()
    ));
    let records = input::load(&args.file)?;
    if records.is_empty() {
        return Err(AppError::EmptyInput(format!(
            "{} contains no match records",
            args.file.display()
        )));
    }
    display_success(&format!("Loaded {} matches", records.len()));

    // Overall summary over the whole set
    let overall = summary::summarize(&records);
    display_summary(&overall);

    // Agent and map breakdowns. The JSON input shape carries neither field,
    // so a set with no agent/map data at all skips the breakdown; a set where
    // only some records carry it fails with MissingField.
    let agent_table = if records.iter().any(|r| r.agent.is_some()) {
        let table = grouping::group_by(&records, "agent", |r| r.agent.as_deref())?;
        display_group_table("AGENT BREAKDOWN", "Agent", &table);
        Some(table)
    } else {
        display_info("No agent data in this file, skipping agent breakdown");
        None
    };

    let map_table = if records.iter().any(|r| r.map.is_some()) {
        let table = grouping::group_by(&records, "map", |r| r.map.as_deref())?;
        display_group_table("MAP BREAKDOWN", "Map", &table);
        Some(table)
    } else {
        None
    };

    // Recommendation needs the per-agent table
    if let Some(ref table) = agent_table {
        let recommendation = recommender::recommend(table)?;
        display_recommendation(&recommendation);
    }

    let graded = if args.no_grades {
        None
    } else {
        let graded = grader::grade(&records)?;
        display_match_report(&graded);
        Some(graded)
    };

    if args.export {
        fs::create_dir_all(&config.output_dir).map_err(|e| {
            AppError::IoError(format!("{}: {}", config.output_dir.display(), e))
        })?;

        export::write_summary(&overall, &config.output_dir.join("summary.csv"))?;
        if let Some(ref table) = agent_table {
            export::write_group_table(
                table,
                "agent",
                &config.output_dir.join("agent_summary.csv"),
            )?;
        }
        if let Some(ref table) = map_table {
            export::write_group_table(table, "map", &config.output_dir.join("map_summary.csv"))?;
        }
        if let Some(ref graded) = graded {
            export::write_match_report(graded, &config.output_dir.join("match_report.csv"))?;
        }

        display_success(&format!(
            "Reports written to {} at {}",
            config.output_dir.display(),
            chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
        ));
    }

    Ok(())
}
