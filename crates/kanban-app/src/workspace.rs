// Rust guideline compliant 2026-10-16

//! Workspace discovery and path management utilities.

use crate::error::{AppError, Result};
use kanban_core::{BoardState, Config, FileStore, KeyValueStore, StateStore};
use std::path::{Path, PathBuf};

/// Name of the directory holding board data and configuration.
pub const WORKSPACE_DIR: &str = ".kanban";

/// Path metadata for a kanban workspace.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    kanban_dir: PathBuf,
    config_path: PathBuf,
}

impl Workspace {
    fn at(root: PathBuf) -> Self {
        let kanban_dir = root.join(WORKSPACE_DIR);
        Self {
            root,
            config_path: kanban_dir.join("config.toml"),
            kanban_dir,
        }
    }

    fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
        match root {
            Some(root) => Ok(root.to_path_buf()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Discovers a workspace starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `root` - Optional workspace root; defaults to the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.kanban` directory is missing
    pub fn discover(root: Option<&Path>) -> Result<Self> {
        let workspace = Self::at(Self::resolve_root(root)?);
        if !workspace.kanban_dir.is_dir() {
            return Err(AppError::WorkspaceNotInitialized {
                path: workspace.kanban_dir,
            });
        }
        Ok(workspace)
    }

    /// Creates the `.kanban` directory with a default configuration and an
    /// empty board.
    ///
    /// Existing configuration and board data are left untouched.
    ///
    /// # Returns
    ///
    /// The initialized workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or configuration cannot be written.
    pub fn init(root: Option<&Path>) -> Result<Self> {
        let workspace = Self::at(Self::resolve_root(root)?);
        std::fs::create_dir_all(&workspace.kanban_dir)?;
        if !workspace.config_path.exists() {
            Config::default().save(&workspace.kanban_dir)?;
        }
        let store = workspace.open_store()?;
        if store.backend().get(store.key())?.is_none() {
            store.save(&BoardState::default())?;
        }
        tracing::info!(path = %workspace.kanban_dir.display(), "workspace initialized");
        Ok(workspace)
    }

    /// Returns the workspace root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.kanban` directory path.
    #[must_use]
    pub fn kanban_dir(&self) -> &Path {
        self.kanban_dir.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Opens the board state store backed by the `.kanban` directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn open_store(&self) -> Result<StateStore<FileStore>> {
        Ok(StateStore::new(FileStore::new(self.kanban_dir.clone())?))
    }

    /// Loads workspace configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.kanban_dir())?)
    }
}
