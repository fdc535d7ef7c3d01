use crate::error::AppError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let output_dir = env::var("VALO_TRACK_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("output"));

        if output_dir.as_os_str().is_empty() {
            return Err(AppError::ConfigError(
                "VALO_TRACK_OUTPUT is set but empty".to_string(),
            ));
        }

        Ok(Config { output_dir })
    }
}
