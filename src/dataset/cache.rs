//! Dataset cache keyed by file path and modification time.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::dataset::error::DatasetError;
use crate::dataset::frame::Frame;

struct CacheEntry {
    modified: SystemTime,
    frame: Arc<Frame>,
}

/// Loaded frames, reused while the file on disk is unchanged.
///
/// Reads happen outside the lock; a concurrent miss on the same path may load
/// the file twice, and the later insert wins.
#[derive(Default)]
pub struct DatasetCache {
    entries: RwLock<HashMap<PathBuf, CacheEntry>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached frame for `path`, reloading when the file's
    /// modification time differs from the cached one.
    pub fn load(&self, path: &Path) -> Result<Arc<Frame>, DatasetError> {
        let key = fs::canonicalize(path).map_err(|e| DatasetError::from_io(path, e))?;
        let modified = fs::metadata(&key)
            .and_then(|m| m.modified())
            .map_err(|e| DatasetError::from_io(path, e))?;

        if let Some(entry) = self.entries.read().get(&key) {
            if entry.modified == modified {
                debug!(path = %key.display(), "Dataset cache hit");
                return Ok(entry.frame.clone());
            }
        }

        let frame = Arc::new(Frame::from_path(&key)?);
        info!(
            path = %key.display(),
            rows = frame.len(),
            columns = frame.headers().len(),
            "Loaded dataset"
        );

        self.entries.write().insert(
            key,
            CacheEntry {
                modified,
                frame: frame.clone(),
            },
        );
        Ok(frame)
    }

    /// Drop the entry for `path`. Returns whether one was cached.
    pub fn invalidate(&self, path: &Path) -> bool {
        let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        self.entries.write().remove(&key).is_some()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
