// src/config/mod.rs
use std::path::Path;

pub mod consts;
pub mod credentials;
pub mod options;
pub mod state;

/// Load `.env` from the working directory into the process environment.
///
/// Run once at startup, before `AppOptions::from_env` and `Credentials::from_env`,
/// so endpoint overrides and login come from the same place. Variables already
/// set in the process win over the file. Returns whether a file was loaded.
pub fn load_env() -> bool {
    match dotenvy::dotenv() {
        Ok(path) => {
            logd!("Config: Loaded {}", path.display());
            true
        }
        Err(e) if e.not_found() => false,
        Err(e) => {
            loge!("Config: Ignoring unreadable .env: {}", e);
            false
        }
    }
}

/// As `load_env`, from an explicit file.
pub fn load_env_file(path: &Path) -> bool {
    match dotenvy::from_path(path) {
        Ok(()) => {
            logd!("Config: Loaded {}", path.display());
            true
        }
        Err(e) => {
            loge!("Config: Ignoring {}: {}", path.display(), e);
            false
        }
    }
}
