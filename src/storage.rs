// File: ./src/storage.rs
// Loads and saves the task list.
//
// Changes to the serialized shape of Task require bumping
// LOCAL_STORAGE_VERSION and teaching `load_from_path` how to upgrade.
use crate::context::AppContext;
use crate::model::{Task, TaskList};
use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Version history:
// - v0: bare JSON array of tasks
// - v1: versioned wrapper
const LOCAL_STORAGE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct LocalStorageData {
    #[serde(default)]
    version: u32,
    tasks: Vec<Task>,
}

/// The load/save collaborator the session talks to.
pub trait TaskStorage {
    fn load(&mut self) -> Result<Vec<Task>>;
    fn save(&mut self, tasks: &TaskList) -> Result<()>;
}

impl<T: TaskStorage + ?Sized> TaskStorage for Box<T> {
    fn load(&mut self) -> Result<Vec<Task>> {
        (**self).load()
    }

    fn save(&mut self, tasks: &TaskList) -> Result<()> {
        (**self).save(tasks)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Uninitialized,
    Success,
    Failed,
}

/// JSON file storage in the data directory.
///
/// If the last `load` failed, `save` refuses to run so an unreadable file is
/// never replaced by an empty list.
#[derive(Debug)]
pub struct LocalStorage {
    path: PathBuf,
    load_state: LoadState,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            load_state: LoadState::Uninitialized,
        }
    }

    pub fn from_context(ctx: &dyn AppContext) -> Result<Self> {
        Ok(Self::new(ctx.get_tasks_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn can_save(&self) -> bool {
        self.load_state != LoadState::Failed
    }

    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut name = file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".lock");
        file_path.with_file_name(name)
    }

    /// Runs `f` while holding an exclusive lock on a sidecar `.lock` file.
    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Failed to open lock file {:?}", lock_path))?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: write to a .tmp file then rename over the target.
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    fn load_from_path(path: &Path) -> Result<Vec<Task>> {
        if !path.exists() {
            return Ok(vec![]);
        }
        Self::with_lock(path, || {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {:?}", path))?;

            if let Ok(data) = serde_json::from_str::<LocalStorageData>(&json) {
                if data.version > LOCAL_STORAGE_VERSION {
                    anyhow::bail!(
                        "Task file {:?} is version {}, newer than supported v{}",
                        path,
                        data.version,
                        LOCAL_STORAGE_VERSION
                    );
                }
                return Ok(data.tasks);
            }

            let tasks: Vec<Task> = serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse task file {:?}", path))?;
            log::info!(
                "Upgrading {:?} from v0 to v{}",
                path,
                LOCAL_STORAGE_VERSION
            );
            Self::write_versioned(path, &tasks)?;
            Ok(tasks)
        })
    }

    fn write_versioned(path: &Path, tasks: &[Task]) -> Result<()> {
        let data = LocalStorageData {
            version: LOCAL_STORAGE_VERSION,
            tasks: tasks.to_vec(),
        };
        let json = serde_json::to_string_pretty(&data)?;
        Self::atomic_write(path, json)
    }
}

impl TaskStorage for LocalStorage {
    fn load(&mut self) -> Result<Vec<Task>> {
        let result = Self::load_from_path(&self.path);
        self.load_state = match &result {
            Ok(tasks) => {
                log::info!("Loaded {} task(s) from {:?}", tasks.len(), self.path);
                LoadState::Success
            }
            Err(e) => {
                log::error!("Failed to load {:?}: {:#}", self.path, e);
                LoadState::Failed
            }
        };
        result
    }

    fn save(&mut self, tasks: &TaskList) -> Result<()> {
        if !self.can_save() {
            return Err(anyhow::anyhow!(
                "Cannot save {:?}: previous load failed. This prevents overwriting data that couldn't be read.",
                self.path
            ));
        }
        let path = self.path.clone();
        Self::with_lock(&path, || Self::write_versioned(&path, tasks.tasks()))?;
        log::debug!("Saved {} task(s) to {:?}", tasks.len(), self.path);
        Ok(())
    }
}

/// Keeps tasks in memory only. Used by tests and `--no-save` runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    pub tasks: Vec<Task>,
    pub saves: usize,
}

impl MemoryStorage {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks, saves: 0 }
    }
}

impl TaskStorage for MemoryStorage {
    fn load(&mut self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn save(&mut self, tasks: &TaskList) -> Result<()> {
        self.tasks = tasks.tasks().to_vec();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;
    use chrono::NaiveDate;

    #[test]
    fn test_missing_file_loads_empty() {
        let ctx = TestContext::new();
        let mut storage = LocalStorage::from_context(&ctx).unwrap();
        assert!(storage.load().unwrap().is_empty());
        assert!(storage.can_save());
    }

    #[test]
    fn test_save_then_load() {
        let ctx = TestContext::new();
        let mut storage = LocalStorage::from_context(&ctx).unwrap();
        let mut tasks = TaskList::from(vec![
            Task::todo("buy milk"),
            Task::deadline("report", NaiveDate::from_ymd_opt(2024, 10, 20).unwrap()),
        ]);
        tasks.set_done(1, true).unwrap();
        storage.save(&tasks).unwrap();

        let json = fs::read_to_string(storage.path()).unwrap();
        assert!(json.contains("\"version\": 1"));

        let mut reopened = LocalStorage::from_context(&ctx).unwrap();
        assert_eq!(reopened.load().unwrap(), tasks.tasks().to_vec());
    }

    #[test]
    fn test_bare_array_is_upgraded() {
        let ctx = TestContext::new();
        let path = ctx.get_tasks_path().unwrap();
        fs::write(&path, r#"[{"kind":"Todo","description":"old"}]"#).unwrap();

        let mut storage = LocalStorage::new(&path);
        let tasks = storage.load().unwrap();
        assert_eq!(tasks, vec![Task::todo("old")]);
        assert!(fs::read_to_string(&path).unwrap().contains("\"version\""));
    }

    #[test]
    fn test_newer_version_is_refused_and_kept() {
        let ctx = TestContext::new();
        let path = ctx.get_tasks_path().unwrap();
        let future = r#"{"version": 2, "tasks": [{"kind":"Todo","description":"new"}]}"#;
        fs::write(&path, future).unwrap();

        let mut storage = LocalStorage::new(&path);
        let err = storage.load().unwrap_err();
        assert!(err.to_string().contains("newer than supported"));
        assert!(!storage.can_save());
        assert!(storage.save(&TaskList::new()).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), future);
    }

    #[test]
    fn test_save_blocked_after_failed_load() {
        let ctx = TestContext::new();
        let path = ctx.get_tasks_path().unwrap();
        fs::write(&path, "{ not json").unwrap();

        let mut storage = LocalStorage::new(&path);
        assert!(storage.load().is_err());
        assert!(!storage.can_save());
        assert!(storage.save(&TaskList::new()).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }
}
