//! Cross-Platform Path Utilities
//!
//! Functions for resolving the application data directory (~/.survey-pulse/).

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the Survey Pulse directory (~/.survey-pulse/)
pub fn survey_pulse_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".survey-pulse"))
}

/// Get the config file path (~/.survey-pulse/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(survey_pulse_dir()?.join("config.json"))
}

/// Get the database file path (~/.survey-pulse/data.db)
pub fn database_path() -> AppResult<PathBuf> {
    Ok(survey_pulse_dir()?.join("data.db"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &PathBuf) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the Survey Pulse directory, creating if it doesn't exist
pub fn ensure_survey_pulse_dir() -> AppResult<PathBuf> {
    let path = survey_pulse_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_under_app_dir() {
        let path = config_path().unwrap();
        assert!(path.ends_with(".survey-pulse/config.json"));
    }

    #[test]
    fn test_database_path_under_app_dir() {
        let path = database_path().unwrap();
        assert!(path.ends_with(".survey-pulse/data.db"));
    }
}
