// File: ./src/context.rs
/*! Where the application keeps its files.

`AppContext` resolves the data and config directories. `StandardContext`
uses `directories::ProjectDirs`, or a root directory given on the command
line. `TestContext` owns a throwaway directory under the OS temp dir and
removes it when dropped.

Anything that touches the filesystem takes a `&dyn AppContext` instead of
looking paths up on its own.
*/

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs::{File, OpenOptions};
use std::path::PathBuf;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const TASKS_FILENAME: &str = "tasks.json";
pub const LOG_FILENAME: &str = "taskmate.log";

pub trait AppContext: std::fmt::Debug {
    fn get_data_dir(&self) -> Result<PathBuf>;
    fn get_config_dir(&self) -> Result<PathBuf>;

    fn get_config_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_config_dir()?.join(CONFIG_FILENAME))
    }

    fn get_tasks_path(&self) -> Result<PathBuf> {
        Ok(self.get_data_dir()?.join(TASKS_FILENAME))
    }

    fn get_log_path(&self) -> Result<PathBuf> {
        Ok(self.get_data_dir()?.join(LOG_FILENAME))
    }

    /// Opens the log for appending so earlier sessions are kept.
    fn open_log_file(&self) -> Result<File> {
        let path = self.get_log_path()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {:?}", path))
    }
}

fn ensure_exists(path: PathBuf) -> Result<PathBuf> {
    if !path.exists() {
        std::fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory: {:?}", path))?;
    }
    Ok(path)
}

// --- Production Implementation ---

#[derive(Clone, Debug)]
pub struct StandardContext {
    override_root: Option<PathBuf>,
}

impl StandardContext {
    /// With `Some(root)`, files live under `root/data` and `root/config`.
    pub fn new(override_root: Option<PathBuf>) -> Self {
        Self { override_root }
    }

    fn get_proj_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("com", "taskmate", "taskmate")
            .ok_or_else(|| anyhow::anyhow!("No home directory"))
    }
}

impl AppContext for StandardContext {
    fn get_data_dir(&self) -> Result<PathBuf> {
        if let Some(root) = &self.override_root {
            return ensure_exists(root.join("data"));
        }
        ensure_exists(Self::get_proj_dirs()?.data_dir().to_path_buf())
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        if let Some(root) = &self.override_root {
            return ensure_exists(root.join("config"));
        }
        ensure_exists(Self::get_proj_dirs()?.config_dir().to_path_buf())
    }
}

// --- Test Implementation ---

#[derive(Debug)]
pub struct TestContext {
    pub root: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("taskmate_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&root).expect("failed to create TestContext temp dir");
        Self { root }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext for TestContext {
    fn get_data_dir(&self) -> Result<PathBuf> {
        ensure_exists(self.root.join("data"))
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        ensure_exists(self.root.join("config"))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
