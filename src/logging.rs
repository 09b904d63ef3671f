use anyhow::Context;
use configuration::{LogLevel, Logging};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins unless a level was given on the command line; otherwise the
/// configured level applies. Console output goes to stderr so it never mixes
/// with report output. The returned guard must live until exit or buffered
/// file lines are lost.
pub fn init_tracing(
    settings: &Logging,
    cli_level: Option<LogLevel>,
) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = match cli_level {
        Some(level) => EnvFilter::new(level.as_directive()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(settings.level.as_directive())),
    };

    let (file_layer, guard) = match &settings.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "gradebook.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    if let Some(dir) = &settings.directory {
        tracing::info!(path = %dir.display(), "File logging enabled.");
    }
    Ok(guard)
}
