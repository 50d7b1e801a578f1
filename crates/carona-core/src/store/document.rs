use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use super::data_store::DataStore;
use crate::error::StorageError;

/// The JSON document holding the whole [`DataStore`].
///
/// There is no locking: two processes sharing a document each write their
/// own state at exit, and the last one wins.
#[derive(Debug, Clone)]
pub struct DocumentStorage {
    path: PathBuf,
}

impl DocumentStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store. A missing document is not an error; it yields an
    /// empty store.
    pub fn load(&self) -> Result<DataStore, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no document yet, starting empty");
                return Ok(DataStore::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let store: DataStore = serde_json::from_str(&contents).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })?;

        info!(
            path = %self.path.display(),
            users = store.users.len(),
            routes = store.routes.len(),
            messages = store.messages.len(),
            "document loaded"
        );
        Ok(store)
    }

    /// Write the store, replacing the document only once the new contents
    /// are fully on disk.
    pub fn save(&self, store: &DataStore) -> Result<(), StorageError> {
        let json = to_json(store)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.write_error(source))?;
        }

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json).map_err(|source| self.write_error(source))?;
        fs::rename(&tmp_path, &self.path).map_err(|source| self.write_error(source))?;

        info!(path = %self.path.display(), "document saved");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

/// Serialize the store in document form.
pub fn to_json(store: &DataStore) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(store)?)
}
