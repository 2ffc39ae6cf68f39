use crate::{KeyValueStore, StorageError, StorageResult};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

type Entries = BTreeMap<String, String>;

/// Key/value store persisted as a single JSON object.
///
/// Every mutation rewrites the whole file with the atomic write pattern, so a
/// crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl FileStore {
    /// Opens (or prepares) the store at `path`.
    ///
    /// - missing file: empty store, file created on first write
    /// - corrupted file: backed up to `<file>.corrupted.<timestamp>`, empty store
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let entries = Self::load(&path)?;

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> StorageResult<Entries> {
        if !path.exists() {
            info!("No storage file at {path:?} (first launch)");
            return Ok(Entries::new());
        }

        let contents =
            fs::read_to_string(path).map_err(|e| StorageError::file_read(path.to_path_buf(), e))?;

        match serde_json::from_str::<Entries>(&contents) {
            Ok(entries) => {
                debug!("Loaded {} storage entries from {path:?}", entries.len());
                Ok(entries)
            }
            Err(e) => {
                warn!("Storage file corrupted at {path:?}: {e}");
                Self::backup_corrupted(path)?;
                Ok(Entries::new())
            }
        }
    }

    /// Renames a corrupted file out of the way so the next write starts clean.
    fn backup_corrupted(path: &Path) -> StorageResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let mut backup = path.as_os_str().to_owned();
        backup.push(format!(".corrupted.{timestamp}"));
        let backup_path = PathBuf::from(backup);

        fs::rename(path, &backup_path).map_err(StorageError::backup_failed)?;

        warn!("Backed up corrupted storage to {backup_path:?}");
        Ok(backup_path)
    }

    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn persist(&self, entries: &Entries) -> StorageResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| StorageError::dir_creation(dir.to_path_buf(), e))?;
        }

        let mut temp = self.path.as_os_str().to_owned();
        temp.push(format!(".tmp.{}", std::process::id()));
        let temp_path = PathBuf::from(temp);

        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        Ok(())
    }

    /// Applies `change` to a copy, persists it, then commits it in memory.
    fn update(&self, change: impl FnOnce(&mut Entries)) -> StorageResult<()> {
        let mut entries = self.entries()?;
        let mut next = entries.clone();
        change(&mut next);

        if next == *entries {
            return Ok(());
        }

        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    #[track_caller]
    fn entries(&self) -> StorageResult<MutexGuard<'_, Entries>> {
        self.entries.lock().map_err(|_| StorageError::poisoned())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}
