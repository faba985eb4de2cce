//! Error types for the Telegram bot.

use thiserror::Error;

use rollcall_persistence::PersistenceError;

/// Errors that can occur while starting or running the bot.
#[derive(Debug, Error)]
pub enum BotError {
    /// Bot token not provided.
    #[error("Telegram bot token not set. Set TELEGRAM_BOT_TOKEN environment variable.")]
    NoToken,

    /// Failed to start the bot.
    #[error("failed to start bot: {0}")]
    StartFailed(String),

    /// The roster could not be loaded at startup. Fatal: the bot cannot
    /// answer queries without the directory.
    #[error("failed to load roster: {0}")]
    RosterLoad(#[source] PersistenceError),

    /// The registry file exists but could not be read.
    #[error("failed to load user registry: {0}")]
    RegistryLoad(#[source] PersistenceError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for bot operations.
pub type Result<T> = std::result::Result<T, BotError>;
