//! CLI argument definitions for the coinwise binary.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// coinwise — a rule-based budget assistant you can chat with.
#[derive(Parser, Debug)]
#[command(name = "coinwise", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Simulated "thinking" pause before each reply, in milliseconds.
    #[arg(long = "delay-ms")]
    pub delay_ms: Option<u64>,

    /// Reply immediately, skipping the thinking pause.
    #[arg(long = "no-delay")]
    pub no_delay: bool,

    /// Write the session transcript as JSON to this path on exit.
    #[arg(long = "transcript")]
    pub transcript: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > COINWISE_CONFIG env var > platform default
    /// (~/.coinwise/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("COINWISE_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    /// Returns `None` if not overridden.
    pub fn resolve_log_level(&self) -> Option<String> {
        self.log_level.clone()
    }

    /// Resolve the thinking delay in milliseconds.
    ///
    /// Priority: --no-delay > --delay-ms flag > COINWISE_DELAY_MS env var >
    /// config file value.
    pub fn resolve_delay_ms(&self, config_delay_ms: u64) -> u64 {
        if self.no_delay {
            return 0;
        }
        if let Some(ms) = self.delay_ms {
            return ms;
        }
        if let Ok(val) = std::env::var("COINWISE_DELAY_MS") {
            if let Ok(ms) = val.parse::<u64>() {
                return ms;
            }
        }
        config_delay_ms
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".coinwise").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".coinwise").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            config: None,
            log_level: None,
            delay_ms: None,
            no_delay: false,
            transcript: None,
        }
    }

    #[test]
    fn test_no_delay_wins() {
        let mut a = args();
        a.no_delay = true;
        a.delay_ms = Some(900);
        assert_eq!(a.resolve_delay_ms(1500), 0);
    }

    #[test]
    fn test_delay_flag_beats_config() {
        std::env::remove_var("COINWISE_DELAY_MS");
        let mut a = args();
        a.delay_ms = Some(250);
        assert_eq!(a.resolve_delay_ms(1500), 250);
    }

    #[test]
    fn test_delay_falls_back_to_config() {
        std::env::remove_var("COINWISE_DELAY_MS");
        assert_eq!(args().resolve_delay_ms(1500), 1500);
    }

    #[test]
    fn test_config_flag_beats_env() {
        let mut a = args();
        a.config = Some(PathBuf::from("/tmp/custom.toml"));
        assert_eq!(a.resolve_config_path(), PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn test_log_level_passthrough() {
        let mut a = args();
        assert!(a.resolve_log_level().is_none());
        a.log_level = Some("debug".to_string());
        assert_eq!(a.resolve_log_level().as_deref(), Some("debug"));
    }
}
