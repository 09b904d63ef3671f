use crate::error::ConfigError;
use std::path::Path;
use tracing::debug;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, Display, LogLevel, Logging, Session};

/// The file looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_NAME: &str = "gradebook";

/// Prefix for environment overrides, e.g. `GRADEBOOK__DISPLAY__PRECISION=2`.
pub const ENV_PREFIX: &str = "GRADEBOOK";

const MAX_PRECISION: usize = 6;

/// Loads the application configuration.
///
/// With `path`, that file must exist. Without it, `gradebook.toml` in the working
/// directory is used if present. Environment variables are layered on top,
/// and anything left unset keeps its default.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };
    load_from(file, environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn load_from<F>(file: F, env: config::Environment) -> Result<Config, ConfigError>
where
    F: config::Source + Send + Sync + 'static,
{
    let builder = config::Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    debug!(?config, "Loaded configuration.");
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.display.precision > MAX_PRECISION {
        return Err(ConfigError::ValidationError(format!(
            "display.precision must be at most {MAX_PRECISION}, got {}",
            config.display.precision
        )));
    }

    let keyword = config.session.done_keyword.trim();
    if keyword.is_empty() {
        return Err(ConfigError::ValidationError(
            "session.done_keyword cannot be empty".to_string(),
        ));
    }
    // A numeric keyword would swallow a valid grade.
    if keyword.parse::<i64>().is_ok() {
        return Err(ConfigError::ValidationError(format!(
            "session.done_keyword '{keyword}' must not be a number"
        )));
    }

    Ok(())
}
