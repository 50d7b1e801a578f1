use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the global subscriber.
///
/// With a log file, everything at DEBUG and above is appended to it so the
/// menu output on stdout stays untouched. Without one, only warnings (or
/// whatever `RUST_LOG` asks for) go to stderr.
pub fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG);

            tracing_subscriber::registry()
                .with(file_layer)
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
        None => {
            let env_filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(env_filter);

            tracing_subscriber::registry()
                .with(stderr_layer)
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
    }
    Ok(())
}
