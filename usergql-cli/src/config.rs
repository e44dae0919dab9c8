use std::path::PathBuf;

use tracing::{debug, info};

/// Load environment variables from .env files
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.usergql/.env
///
/// Returns the files that were loaded. Runs before tracing is initialized,
/// so reporting is left to [`log_loaded`].
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        // dotenvy doesn't overwrite existing vars, so cwd values win
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded_from.push(env_file);
        }
    }

    loaded_from
}

pub fn log_loaded(files: &[PathBuf]) {
    if files.is_empty() {
        debug!("No .env files found (current dir or ~/.usergql)");
        return;
    }

    let list: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
    info!("Loaded configuration from: {}", list.join(", "));
}

/// Get the usergql config directory path (~/.usergql)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".usergql"))
}
