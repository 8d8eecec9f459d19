//! coinwise binary - composition root.
//!
//! Ties the crates together into an interactive terminal chat:
//! 1. Parse CLI arguments
//! 2. Load configuration from TOML
//! 3. Initialize tracing
//! 4. Run the stdin/stdout chat loop with the simulated thinking pause
//!
//! The empty-input guard lives in this loop: blank lines are neither sent to
//! the assistant nor logged anywhere, matching the surface contract.

mod cli;

use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::{Local, TimeZone};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use coinwise_chat::{Assistant, ChatMessage, ChatSession};
use coinwise_core::config::CoinwiseConfig;
use coinwise_core::Result;

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let config_path = args.resolve_config_path();
    let mut config = CoinwiseConfig::load_or_default(&config_path);
    if let Some(level) = args.resolve_log_level() {
        config.general.log_level = level;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.general.log_level.clone())),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!(config = %config_path.display(), "coinwise starting");

    let delay_ms = args.resolve_delay_ms(config.chat.thinking_delay_ms);
    let assistant = Assistant::from_config(&config.chat);
    let mut session = ChatSession::new();

    let mut stdout = io::stdout();
    for message in session.messages() {
        print_message(&mut stdout, message)?;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;

        // Caller-side guard: blank input is not sent and not logged.
        if line.trim().is_empty() {
            continue;
        }

        if delay_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
        }

        match assistant.handle_message(&mut session, &line) {
            Ok(reply) => print_message(&mut stdout, &reply)?,
            Err(e) => {
                tracing::warn!(error = %e, "message rejected");
                writeln!(stdout, "! {}", e)?;
            }
        }
    }

    if let Some(ref path) = args.transcript {
        write_transcript(&session, path)?;
    }

    tracing::info!(messages = session.message_count(), "session ended");
    Ok(())
}

/// Print one message with an HH:MM stamp; embedded newlines render verbatim.
fn print_message(out: &mut impl Write, message: &ChatMessage) -> io::Result<()> {
    writeln!(
        out,
        "[{}] {}",
        format_time(message.timestamp),
        message.content
    )?;
    out.flush()
}

fn format_time(epoch_secs: i64) -> String {
    Local
        .timestamp_opt(epoch_secs, 0)
        .single()
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| epoch_secs.to_string())
}

/// Dump the session's message log as pretty JSON.
fn write_transcript(session: &ChatSession, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(session.messages())?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), "transcript written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_is_hh_mm() {
        let s = format_time(1700000000);
        assert_eq!(s.len(), 5);
        assert_eq!(&s[2..3], ":");
    }

    #[test]
    fn test_print_message_renders_newlines_verbatim() {
        let message = ChatMessage {
            id: uuid::Uuid::new_v4(),
            content: "line one\nline two".to_string(),
            sender: coinwise_chat::Sender::Bot,
            timestamp: 0,
        };
        let mut buf = Vec::new();
        print_message(&mut buf, &message).unwrap();
        let rendered = String::from_utf8(buf).unwrap();
        assert!(rendered.contains("line one\nline two"));
    }

    #[test]
    fn test_write_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.json");
        let session = ChatSession::new();
        write_transcript(&session, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("budget assistant"));
    }
}
