//! TreeWalker - top-down descent that streams lines to a `StructureOutput`

use std::path::Path;

use crate::error::{Error, Result};

use super::StructureOutput;
use super::config::TreeConfig;
use super::traversal::BaseTraversal;

/// Counts of what a walk emitted. The root counts as a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub dirs: usize,
    pub files: usize,
}

/// Tree walker that streams each directory and file to an output sink.
/// Uses O(depth) memory: only the listing of the directories on the current
/// path is held at any time.
pub struct TreeWalker {
    config: TreeConfig,
}

impl TreeWalker {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Check that the root exists and is a directory.
    pub fn validate_root(&self) -> Result<()> {
        let root = &self.config.root_path;
        let meta = std::fs::metadata(root).map_err(|source| Error::RootNotFound {
            path: root.clone(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(Error::NotADirectory { path: root.clone() });
        }
        Ok(())
    }

    /// Walk the configured root, streaming every line to `output`.
    pub fn walk<O: StructureOutput>(&self, output: &mut O) -> Result<WalkSummary> {
        self.validate_root()?;

        let root = &self.config.root_path;
        let traversal = BaseTraversal::new(&self.config);
        let name = traversal.get_name(root);

        let mut summary = WalkSummary::default();
        self.walk_dir(&traversal, root, &name, 0, output, &mut summary)?;
        output.finish(&summary).map_err(sink_err)?;

        tracing::info!(
            root = %root.display(),
            dirs = summary.dirs,
            files = summary.files,
            "walk complete"
        );
        Ok(summary)
    }

    fn walk_dir<O: StructureOutput>(
        &self,
        traversal: &BaseTraversal<'_>,
        path: &Path,
        name: &str,
        depth: usize,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> Result<()> {
        tracing::debug!(path = %path.display(), depth, "visiting directory");

        output.output_dir(name, depth).map_err(sink_err)?;
        summary.dirs += 1;

        let listing = traversal.read_dir(path)?;

        // Files of a directory all come before anything from its subdirectories
        for file in &listing.files {
            output.output_file(&file.name, depth + 1).map_err(sink_err)?;
            summary.files += 1;
        }

        for dir in &listing.subdirs {
            self.walk_dir(traversal, &dir.path, &dir.name, depth + 1, output, summary)?;
        }

        Ok(())
    }
}

fn sink_err(source: std::io::Error) -> Error {
    Error::Output { source }
}
