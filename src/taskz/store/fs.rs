use super::{DataStore, LoadOutcome};
use crate::error::Result;
use crate::model::Task;
use log::{debug, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File-backed store: one pretty-printed JSON array per collection.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw read, keeping the three outcomes apart. `load` collapses the
    /// last two into an empty collection.
    pub fn read(&self) -> LoadOutcome {
        if !self.path.exists() {
            return LoadOutcome::Missing;
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => return LoadOutcome::Corrupt(e.to_string()),
        };
        if content.trim().is_empty() {
            return LoadOutcome::Missing;
        }
        match serde_json::from_str::<Vec<Task>>(&content) {
            Ok(tasks) => LoadOutcome::Loaded(tasks),
            Err(e) => LoadOutcome::Corrupt(e.to_string()),
        }
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Vec<Task> {
        match self.read() {
            LoadOutcome::Loaded(tasks) => tasks,
            LoadOutcome::Missing => Vec::new(),
            LoadOutcome::Corrupt(reason) => {
                warn!(
                    "store {} is unreadable ({}); treating it as empty",
                    self.path.display(),
                    reason
                );
                Vec::new()
            }
        }
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                parent
            }
            _ => Path::new("."),
        };

        // Write to a sibling temp file, then move it over the target, so no
        // reader ever observes a half-written collection.
        let json = serde_json::to_string_pretty(tasks)?;
        let mut temp_file = NamedTempFile::new_in(dir)?;
        temp_file.write_all(json.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;

        debug!("saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }
}
