//! Application-wide constants
//!
//! Names and formats shared by the core and the REPL.

/// Directory name used under the platform data directory
pub const APP_DIR_NAME: &str = "carona";

/// Historical document name, resolved against the working directory by default
pub const DEFAULT_DATA_FILE: &str = "db.data";

/// Environment variable overriding the document location
pub const DATA_FILE_ENV: &str = "CARONA_DB";

/// Environment variable enabling file logging
pub const LOG_FILE_ENV: &str = "CARONA_LOG_FILE";

/// Display format for message timestamps (local time)
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%H:%M %d/%m/%Y";
