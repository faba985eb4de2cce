//! Shared configuration for Rollcall.
//!
//! Provides functions to locate the state directory and the bot's data
//! files. All application data lives under `~/.rollcall/` by default.
//!
//! # Environment Variables
//!
//! - `ROLLCALL_STATE_DIR`: Override the base state directory
//! - `ROLLCALL_ROSTER_FILE`: Path to the roster workbook
//! - `ROLLCALL_USERS_FILE`: Path to the user registry file
//! - `ROLLCALL_ADMIN_ID`: Telegram user id allowed to run `/users`

use std::path::PathBuf;
use std::sync::OnceLock;

/// Environment variable for a custom state directory.
pub const STATE_DIR_ENV: &str = "ROLLCALL_STATE_DIR";

/// Environment variable for the roster workbook path.
pub const ROSTER_FILE_ENV: &str = "ROLLCALL_ROSTER_FILE";

/// Environment variable for the user registry file path.
pub const USERS_FILE_ENV: &str = "ROLLCALL_USERS_FILE";

/// Environment variable for the admin Telegram user id.
pub const ADMIN_ID_ENV: &str = "ROLLCALL_ADMIN_ID";

/// Default state directory name under home.
const DEFAULT_STATE_DIR: &str = ".rollcall";

static STATE_DIR_CACHE: OnceLock<PathBuf> = OnceLock::new();

/// Get the Rollcall state directory.
///
/// The state directory is determined by:
/// 1. `ROLLCALL_STATE_DIR` environment variable if set
/// 2. `~/.rollcall` if home directory is available
/// 3. `.rollcall` in current directory as fallback
pub fn state_dir() -> PathBuf {
    STATE_DIR_CACHE
        .get_or_init(|| {
            std::env::var(STATE_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    dirs::home_dir()
                        .map(|h| h.join(DEFAULT_STATE_DIR))
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
                })
        })
        .clone()
}

/// Get the roster workbook path.
///
/// Defaults to `<state>/roster.xlsx` or `ROLLCALL_ROSTER_FILE` env var.
pub fn roster_file() -> PathBuf {
    std::env::var(ROSTER_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| state_dir().join("roster.xlsx"))
}

/// Get the user registry file path.
///
/// Defaults to `<state>/users.json` or `ROLLCALL_USERS_FILE` env var.
pub fn users_file() -> PathBuf {
    std::env::var(USERS_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| state_dir().join("users.json"))
}

/// Get the .env file path.
///
/// Environment file for secrets (the bot token, admin id).
pub fn env_file() -> PathBuf {
    state_dir().join(".env")
}

/// Get the configured admin user id, if any.
///
/// Unset or unparseable means no caller is authorized for `/users`.
pub fn admin_user_id() -> Option<u64> {
    std::env::var(ADMIN_ID_ENV).ok().and_then(|v| v.parse().ok())
}

/// Ensure the state directory exists, creating it if necessary.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_state_dir() -> std::io::Result<()> {
    let dir = state_dir();
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(())
}
