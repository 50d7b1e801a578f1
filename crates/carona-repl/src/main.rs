use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

use anyhow::{Context, Result};
use carona_core::config::CoreConfig;
use carona_core::constants::{DATA_FILE_ENV, LOG_FILE_ENV};
use carona_core::store::DocumentStorage;
use carona_core::tracing_setup::init_tracing;
use clap::Parser;
use tracing::{error, info};

// ANSI color codes
pub(crate) const CYAN: &str = "\x1b[36m";
pub(crate) const GREEN: &str = "\x1b[32m";
pub(crate) const RED: &str = "\x1b[31m";
pub(crate) const WHITE_BOLD: &str = "\x1b[1;37m";
pub(crate) const DIM: &str = "\x1b[2m";
pub(crate) const RESET: &str = "\x1b[0m";

mod format;
mod menu;
mod prompt;
mod session;
mod table;

use prompt::{EndOfInput, Prompter};
use session::Session;

#[derive(Parser, Debug)]
#[command(name = "carona")]
#[command(about = "Ride offers, requests and direct messages from the terminal")]
struct Args {
    /// Path to the JSON document (overrides CARONA_DB)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Keep the document under the platform data directory instead of the
    /// working directory (ignored when --db or CARONA_DB is set)
    #[arg(long)]
    use_data_dir: bool,

    /// Append debug logs to this file (overrides CARONA_LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not clear the terminal between screens
    #[arg(long)]
    no_clear: bool,
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn resolve_config(args: &Args) -> CoreConfig {
    if let Some(ref path) = args.db {
        return CoreConfig::new(path);
    }
    if let Some(path) = env_path(DATA_FILE_ENV) {
        return CoreConfig::new(path);
    }
    if args.use_data_dir {
        return CoreConfig::new(CoreConfig::default_data_file());
    }
    CoreConfig::default()
}

fn resolve_log_file(args: &Args) -> Option<PathBuf> {
    args.log_file.clone().or_else(|| env_path(LOG_FILE_ENV))
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(resolve_log_file(&args).as_deref())?;

    let config = resolve_config(&args);
    let storage = DocumentStorage::new(&config.data_file);
    let mut store = storage
        .load()
        .with_context(|| format!("Failed to load {}", config.data_file.display()))?;

    info!(path = %config.data_file.display(), "session started");

    let outcome = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let prompter = Prompter::new(stdin.lock(), stdout.lock(), !args.no_clear);
        let mut session = Session::new(&mut store, prompter);
        panic::catch_unwind(AssertUnwindSafe(|| session.run()))
    };

    // Save no matter how the session ended.
    storage
        .save(&store)
        .with_context(|| format!("Failed to save {}", config.data_file.display()))?;

    match outcome {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) if e.is::<EndOfInput>() => {
            println!();
            Ok(())
        }
        Ok(Err(e)) => {
            error!(error = %e, "session failed");
            Err(e)
        }
        Err(payload) => panic::resume_unwind(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_flag_wins() {
        let args = Args::parse_from(["carona", "--db", "/tmp/elsewhere.json", "--use-data-dir"]);
        assert_eq!(resolve_config(&args).data_file, PathBuf::from("/tmp/elsewhere.json"));
    }

    #[test]
    fn test_flags_parse() {
        let args = Args::parse_from(["carona", "--no-clear", "--log-file", "carona.log"]);
        assert!(args.no_clear);
        assert_eq!(resolve_log_file(&args), Some(PathBuf::from("carona.log")));
        assert!(args.db.is_none());
    }
}
