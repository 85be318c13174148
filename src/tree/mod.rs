//! Directory tree walking logic
//!
//! `TreeWalker` descends from the configured root one directory at a time
//! and reports each directory and file to a `StructureOutput` sink together
//! with its depth. Formatting is the sink's business; see `crate::output`.

mod config;
mod traversal;
mod walker;

use std::io;

// Re-export public types
pub use config::{SiblingOrder, TreeConfig};
pub use walker::{TreeWalker, WalkSummary};

/// Callback for streaming output - receives each node as it is visited.
///
/// Calls arrive in output order: a directory, then its files, then each of
/// its subdirectories in turn. The root has depth 0.
pub trait StructureOutput {
    fn output_dir(&mut self, name: &str, depth: usize) -> io::Result<()>;

    fn output_file(&mut self, name: &str, depth: usize) -> io::Result<()>;

    fn finish(&mut self, summary: &WalkSummary) -> io::Result<()>;
}
