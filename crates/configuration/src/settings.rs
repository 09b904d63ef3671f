use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
/// Every section falls back to its defaults when omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: Display,
    pub session: Session,
    pub logging: Logging,
}

/// How numbers are rendered to the user.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Display {
    /// Decimal places used for averages.
    pub precision: usize,
}

impl Default for Display {
    fn default() -> Self {
        Self { precision: 1 }
    }
}

/// Parameters for the interactive console session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Session {
    /// The word that ends grade entry. Compared case-insensitively.
    pub done_keyword: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            done_keyword: "done".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// Used when `RUST_LOG` is not set.
    pub level: LogLevel,
    /// When set, a daily rolling log file is written into this directory.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
