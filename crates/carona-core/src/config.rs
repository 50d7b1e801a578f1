use std::path::{Path, PathBuf};

use crate::constants::{APP_DIR_NAME, DEFAULT_DATA_FILE};

#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// JSON document holding users, routes and messages
    pub data_file: PathBuf,
}

impl CoreConfig {
    pub fn new<P: AsRef<Path>>(data_file: P) -> Self {
        Self {
            data_file: data_file.as_ref().to_path_buf(),
        }
    }

    /// Document location under the platform data directory, e.g.
    /// `~/.local/share/carona/db.data` on Linux. Falls back to the
    /// working directory when the platform has no data directory.
    pub fn default_data_file() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(DEFAULT_DATA_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_working_directory_document() {
        let config = CoreConfig::default();
        assert_eq!(config.data_file, PathBuf::from("db.data"));
    }

    #[test]
    fn test_default_data_file_ends_with_document_name() {
        let path = CoreConfig::default_data_file();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(DEFAULT_DATA_FILE));
    }
}
