//! Command and message handlers for the Telegram bot.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::InputFile;
use teloxide::utils::command::BotCommands;
use tracing::info;

use rollcall_core::{classify, format_section_results, format_student, Query};

use crate::state::BotState;

/// Static help text sent by /start and /help.
const HELP_TEXT: &str = "Welcome to the Student Info Bot!\n\n\
    Here are the commands you can use:\n\n\
    /start - Get a welcome message.\n\
    /help - Show this message.\n\n\
    To get details about a student, send a roll number.\n\
    For example: '22051712'.\n\n\
    To get a list of students in a section, send a section number in the format '01' for CSE-01.\n\
    I will return the name, roll number, and hostel for each student in that section, \
    sorted by roll number.";

/// Reply for input that is neither a roll number nor a section code.
const INVALID_QUERY: &str =
    "Please enter a valid roll number (5-9 digits) or section number (1-2 digits).";

/// Reply for a section with no students in the roster.
const SECTION_NOT_FOUND: &str = "Section not in my DB.";

/// Reply for non-admin /users callers.
const NOT_AUTHORIZED: &str = "You are not authorized to use this command.";

/// File name of the registry export attachment.
const EXPORT_FILE_NAME: &str = "users.json";

/// Bot commands that can be invoked with /.
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Register and get a welcome message")]
    Start,

    #[command(description = "Show help message")]
    Help,

    #[command(description = "Export the user registry (admin only)")]
    Users,
}

/// Dispatch a parsed command to its handler.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<BotState>,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => handle_start(bot, msg, state).await,
        Command::Help => handle_help(bot, msg).await,
        Command::Users => handle_users(bot, msg, state).await,
    }
}

/// Handle the /start command: register the sender, then send the help text.
pub async fn handle_start(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    if let Some(user) = msg.from.as_ref() {
        state.register_user(user.id.0, user.username.as_deref()).await;
        info!(user_id = user.id.0, username = ?user.username, "user started bot");
    }

    handle_help(bot, msg).await
}

/// Handle the /help command.
pub async fn handle_help(bot: Bot, msg: Message) -> ResponseResult<()> {
    bot.send_message(msg.chat.id, HELP_TEXT).await?;
    Ok(())
}

/// Handle the /users command: send the registry as a document attachment.
///
/// Permitted only for the configured admin identity; everyone else gets the
/// denial text as a normal reply.
pub async fn handle_users(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let authorized = msg
        .from
        .as_ref()
        .map(|u| state.is_admin(u.id.0))
        .unwrap_or(false);

    if !authorized {
        bot.send_message(msg.chat.id, NOT_AUTHORIZED).await?;
        return Ok(());
    }

    let users = state.export_users().await;
    info!(count = users.len(), "exporting user registry");

    // Plain records serialize infallibly; the fallback keeps this handler
    // from ever panicking.
    let json = serde_json::to_string_pretty(&users).unwrap_or_else(|_| "[]".to_string());
    let document = InputFile::memory(json).file_name(EXPORT_FILE_NAME);
    bot.send_document(msg.chat.id, document).await?;
    Ok(())
}

/// Handle a bare text message: classify it and answer the lookup.
pub async fn handle_query(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let text = match msg.text() {
        Some(text) => text.trim(),
        None => return Ok(()),
    };

    match classify(text) {
        Query::Roll(roll) => {
            let reply = format_student(state.directory().find_by_roll(&roll));
            bot.send_message(msg.chat.id, reply).await?;
        }
        Query::Section(digits) => {
            let matches = state.directory().find_by_section(&digits);
            if matches.is_empty() {
                bot.send_message(msg.chat.id, SECTION_NOT_FOUND).await?;
            } else {
                // One message per chunk, in order, to respect Telegram's
                // message size limit.
                for chunk in format_section_results(&matches) {
                    bot.send_message(msg.chat.id, chunk).await?;
                }
            }
        }
        Query::Invalid => {
            bot.send_message(msg.chat.id, INVALID_QUERY).await?;
        }
    }

    Ok(())
}
