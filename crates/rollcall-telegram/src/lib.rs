//! Telegram bot interface for Rollcall.
//!
//! A single-purpose bot that answers student lookup queries from a roster
//! loaded at startup, and keeps a registry of every user who has sent
//! `/start`.
//!
//! # Environment Variables
//!
//! Required:
//! - `TELEGRAM_BOT_TOKEN`: Bot token from @BotFather
//!
//! Optional:
//! - `ROLLCALL_ROSTER_FILE`: Roster workbook path (default `~/.rollcall/roster.xlsx`)
//! - `ROLLCALL_USERS_FILE`: Registry file path (default `~/.rollcall/users.json`)
//! - `ROLLCALL_ADMIN_ID`: Telegram user id allowed to run `/users`
//! - `ROLLCALL_STATE_DIR`: Override the state directory
//!
//! # Commands
//!
//! - `/start` - Register the sender and show help
//! - `/help` - Show help
//! - `/users` - Export the user registry (admin only)
//!
//! Any other text message is treated as a lookup: a 5-9 digit string is a
//! roll number query, a 1-2 digit string is a section query, and anything
//! else gets a usage hint.

pub mod bot;
pub mod error;
pub mod handlers;
pub mod state;

pub use bot::StudentBot;
pub use error::{BotError, Result};
pub use state::BotState;
