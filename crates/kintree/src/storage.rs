//! Whole-file persistence for the family tree document.
//!
//! The document is read in full at open and written back in full on save:
//! last writer wins, no locking, no merge against concurrent changes.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::tree::FamilyTree;

/// On-disk handle for a family tree document.
#[derive(Debug)]
pub struct TreeStore {
    /// Path to the document file.
    path: PathBuf,
    /// The loaded document.
    tree: FamilyTree,
}

impl TreeStore {
    /// Open the document at the given path.
    ///
    /// A missing file is not an error: the store starts from an empty
    /// document and the file is created on the first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if it is
    /// not a valid family tree document.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let tree = match fs::read_to_string(&path) {
            Ok(contents) => {
                let tree: FamilyTree =
                    serde_json::from_str(&contents).map_err(|source| Error::TreeParse {
                        path: path.clone(),
                        source,
                    })?;
                debug!("loaded {} people from {}", tree.len(), path.display());
                tree
            }
            Err(source) if source.kind() == ErrorKind::NotFound => {
                info!("{} not found, a new file will be created", path.display());
                FamilyTree::default()
            }
            Err(source) => return Err(Error::TreeRead { path, source }),
        };

        Ok(Self { path, tree })
    }

    /// Path of the underlying document file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The loaded document.
    #[must_use]
    pub fn tree(&self) -> &FamilyTree {
        &self.tree
    }

    /// Mutable access to the loaded document.
    pub fn tree_mut(&mut self) -> &mut FamilyTree {
        &mut self.tree
    }

    /// Write the full document back to disk as pretty-printed JSON
    /// (2-space indent), creating missing parent directories.
    ///
    /// The file is overwritten in place; there is no atomic rename, so a
    /// crash mid-write can truncate it.
    ///
    /// # Errors
    ///
    /// Returns an error if a parent directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let contents = serde_json::to_string_pretty(&self.tree)?;
        fs::write(&self.path, contents).map_err(|source| Error::TreeWrite {
            path: self.path.clone(),
            source,
        })?;

        debug!("wrote {} people to {}", self.tree.len(), self.path.display());
        Ok(())
    }

    /// Statistics about the document and its file.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let file_size_bytes = fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0);
        TreeStats {
            total_people: self.tree.len(),
            alive_people: self.tree.alive_count(),
            file_size_bytes,
        }
    }
}

/// Statistics about a stored family tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of people in the document.
    pub total_people: usize,
    /// Number of people marked alive.
    pub alive_people: usize,
    /// Size of the document file in bytes (0 if it does not exist yet).
    pub file_size_bytes: u64,
}
