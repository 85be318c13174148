//! Reading a single directory level.
//!
//! The walker only ever looks one level down at a time: this module lists a
//! directory, applies the configured sibling order, and splits the entries
//! into the files to print and the subdirectories to descend into.

use std::fs::DirEntry;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::config::{SiblingOrder, TreeConfig};

/// A child entry of the directory being listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) name: String,
    pub(crate) path: PathBuf,
}

/// Immediate contents of one directory, already in output order.
#[derive(Debug, Default)]
pub(crate) struct DirListing {
    pub(crate) files: Vec<Entry>,
    pub(crate) subdirs: Vec<Entry>,
}

/// One directory level of the traversal.
pub(crate) struct BaseTraversal<'a> {
    config: &'a TreeConfig,
}

impl<'a> BaseTraversal<'a> {
    pub(crate) fn new(config: &'a TreeConfig) -> Self {
        Self { config }
    }

    /// Display name of a directory. Paths with no final component fall back
    /// to the whole path minus trailing separators, so `/` yields an empty
    /// name and its line reads just `/`.
    pub(crate) fn get_name(&self, path: &Path) -> String {
        path.file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| {
                path.display()
                    .to_string()
                    .trim_end_matches(std::path::is_separator)
                    .to_string()
            })
    }

    /// List `path` and split its entries into files and subdirectories.
    ///
    /// Anything that is not a directory once symlinks are followed counts as
    /// a file, broken links included. Symlinks to directories are dropped:
    /// they are never descended into, so they never get a line of their own.
    pub(crate) fn read_dir(&self, path: &Path) -> Result<DirListing> {
        let read_err = |source: std::io::Error| Error::ReadDir {
            path: path.to_path_buf(),
            source,
        };

        let mut entries: Vec<DirEntry> = std::fs::read_dir(path)
            .map_err(read_err)?
            .collect::<std::io::Result<_>>()
            .map_err(read_err)?;

        if self.config.order == SiblingOrder::Name {
            entries.sort_by_key(|a| a.file_name());
        }

        let mut listing = DirListing::default();
        for entry in entries {
            let file_type = entry.file_type().map_err(read_err)?;
            let entry_path = entry.path();
            let child = Entry {
                name: entry.file_name().to_string_lossy().to_string(),
                path: entry_path,
            };

            if file_type.is_dir() {
                listing.subdirs.push(child);
            } else if file_type.is_symlink() && child.path.is_dir() {
                tracing::debug!(path = %child.path.display(), "not following directory symlink");
            } else {
                listing.files.push(child);
            }
        }

        Ok(listing)
    }
}
