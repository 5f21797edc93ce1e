use std::io;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FolderError {
    #[error("invalid folder name {0:?}: must be a single path segment")]
    InvalidName(String),
    #[error("folder operation failed on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One directory per record, named after the record, under a common root.
/// Folder contents are never touched.
#[derive(Debug, Clone)]
pub struct FolderManager {
    root: PathBuf,
}

impl FolderManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory (and parents) if it is missing.
    pub fn ensure_root(&self) -> Result<(), FolderError> {
        std::fs::create_dir_all(&self.root).map_err(|source| FolderError::Io {
            path: self.root.clone(),
            source,
        })
    }

    /// Folder path for a record name.
    ///
    /// Rejects anything that is not exactly one normal path component, so
    /// "", ".", ".." and "a/b" can never resolve to the root or outside it.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, FolderError> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(segment)), None) if segment == name => {
                Ok(self.root.join(segment))
            }
            _ => Err(FolderError::InvalidName(name.to_string())),
        }
    }

    pub fn create(&self, name: &str) -> Result<(), FolderError> {
        let path = self.path_for(name)?;
        if path.exists() {
            tracing::debug!("Folder {} already exists", path.display());
            return Ok(());
        }
        std::fs::create_dir_all(&path).map_err(|source| FolderError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Created folder {}", path.display());
        Ok(())
    }

    /// Remove the folder only if it exists and is empty. A missing or
    /// non-empty folder is left alone and is not an error.
    pub fn remove_if_empty(&self, name: &str) -> Result<(), FolderError> {
        let path = self.path_for(name)?;
        if !path.is_dir() {
            tracing::debug!("No folder to remove at {}", path.display());
            return Ok(());
        }

        let mut entries = std::fs::read_dir(&path).map_err(|source| FolderError::Io {
            path: path.clone(),
            source,
        })?;
        if entries.next().is_some() {
            tracing::warn!("Keeping non-empty folder {}", path.display());
            return Ok(());
        }

        std::fs::remove_dir(&path).map_err(|source| FolderError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Removed folder {}", path.display());
        Ok(())
    }

    /// Rename the folder for `old` to `new`. Does nothing when the names map
    /// to the same path or when there is no folder for `old`.
    pub fn rename(&self, old: &str, new: &str) -> Result<(), FolderError> {
        let old_path = self.path_for(old)?;
        let new_path = self.path_for(new)?;
        if old_path == new_path {
            return Ok(());
        }
        if !old_path.exists() {
            tracing::debug!("No folder at {}, skipping rename", old_path.display());
            return Ok(());
        }

        std::fs::rename(&old_path, &new_path).map_err(|source| FolderError::Io {
            path: new_path.clone(),
            source,
        })?;
        tracing::debug!("Renamed folder {} -> {}", old_path.display(), new_path.display());
        Ok(())
    }
}
