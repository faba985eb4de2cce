//! Rollcall Telegram bot binary.
//!
//! Start the bot with:
//! ```bash
//! TELEGRAM_BOT_TOKEN=xxx cargo run -p rollcall-telegram
//! ```

use std::path::PathBuf;

use clap::Parser;
use rollcall_core::config;
use rollcall_telegram::{BotState, StudentBot};
use tracing_subscriber::EnvFilter;

/// Rollcall Telegram bot - student roster lookups from Telegram
#[derive(Parser, Debug)]
#[command(name = "rollcall-telegram")]
#[command(about = "Telegram bot answering student roll number and section queries")]
struct Args {
    /// Path to the roster workbook (default: ROLLCALL_ROSTER_FILE)
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load environment variables from the state directory first, then any
    // local .env.
    let env_path = config::env_file();
    if env_path.exists() {
        let _ = dotenvy::from_path(&env_path);
    }
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => "rollcall_telegram=info,teloxide=warn",
        1 => "rollcall_telegram=debug,rollcall_core=debug,teloxide=info",
        2 => "rollcall_telegram=trace,rollcall_core=trace,teloxide=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = config::ensure_state_dir() {
        tracing::warn!(error = %e, "failed to create state directory");
    }

    let roster_path = args.roster.unwrap_or_else(config::roster_file);
    let registry_path = config::users_file();

    let admin_id = config::admin_user_id();
    if admin_id.is_none() {
        tracing::warn!("ROLLCALL_ADMIN_ID not set; /users will be denied for everyone");
    }

    // A roster that cannot be loaded is fatal.
    let state = BotState::load(&roster_path, &registry_path, admin_id)?;

    let bot = StudentBot::new(state)?;
    match bot.get_me().await {
        Ok(username) => {
            tracing::info!(username = %username, "bot initialized");
            println!("\nRollcall Telegram Bot");
            println!("   Bot: @{}", username);
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to get bot info");
            return Err(e.into());
        }
    }

    println!("\nOpen Telegram and send /start to begin");
    println!("   Press Ctrl+C to stop\n");

    bot.run().await;

    Ok(())
}
