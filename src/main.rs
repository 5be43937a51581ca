//! Swearbot (console adapter)
//!
//! Reads chat lines from stdin and writes the bot's replies to stdout.
//!
//! # Architecture Overview
//!
//! ```text
//!   stdin line                ┌──────────────────────────────────────────────┐
//!   "user channel text"       │                   SWEARBOT                    │
//!   ─────────────────────────▶│  ┌─────────┐    ┌──────────┐   ┌───────────┐  │
//!                             │  │ console │───▶│   bot    │──▶│  swears   │  │
//!                             │  │ adapter │    │ handler  │   │  + dict   │  │
//!                             │  └─────────┘    └────┬─────┘   └───────────┘  │
//!   stdout reply              │       ▲              │                        │
//!   ◀─────────────────────────│───────┘              ▼                        │
//!                             │              ┌──────────────┐                 │
//!                             │              │ stats  (JSON)│                 │
//!                             │              │settings(JSON)│                 │
//!                             │              └──────────────┘                 │
//!                             │  config (TOML) · observability (tracing)      │
//!                             └──────────────────────────────────────────────┘
//! ```
//!
//! Lines starting with the configured mention prefix are commands
//! (`@swearbot curr rank`, `@swearbot add rule: foo*`, ...); every other
//! line is scanned for swears.

use clap::Parser;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use swearbot::config::loader::load_config;
use swearbot::observability::logging::init_logging;
use swearbot::{BotConfig, SwearBot};

#[derive(Parser)]
#[command(name = "swearbot")]
#[command(about = "Chat bot that keeps track of swearing", long_about = None)]
struct Cli {
    /// Configuration file (TOML). Built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => BotConfig::default(),
    };

    init_logging(&config.observability.log_level);
    tracing::info!("swearbot v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        dictionary = %config.storage.dictionary_path,
        stats = %config.storage.stats_path,
        settings = %config.storage.settings_path,
        mention_prefix = %config.bot.mention_prefix,
        "Configuration loaded"
    );

    let bot = SwearBot::from_config(config)?;
    tracing::info!(rules = bot.filter().rule_count(), "Ready for messages");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("End of input");
                    break;
                };
                let Some((user, channel, text)) = parse_line(&line) else {
                    if !line.trim().is_empty() {
                        tracing::warn!(line = %line, "Ignoring malformed line, expected: user channel text");
                    }
                    continue;
                };
                if let Some(reply) = bot.handle(text, user, channel) {
                    println!("{}", reply);
                }
            }
            _ = &mut interrupt => {
                tracing::info!("Interrupt received, shutting down");
                break;
            }
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Split `user channel text...`. The text may be empty.
fn parse_line(line: &str) -> Option<(&str, &str, &str)> {
    let mut parts = line.trim().splitn(3, char::is_whitespace);
    let user = parts.next().filter(|s| !s.is_empty())?;
    let channel = parts.next()?;
    let text = parts.next().unwrap_or("");
    Some((user, channel, text))
}
