pub mod csv_file;
pub mod json_file;
pub mod records;

use crate::error::AppError;
use records::MatchRecord;
use std::path::Path;

/// Load a match history file, dispatching on extension.
pub fn load(path: &Path) -> Result<Vec<MatchRecord>, AppError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => csv_file::load(path),
        Some("json") => json_file::load(path),
        _ => Err(AppError::UnsupportedFormat(path.display().to_string())),
    }
}
