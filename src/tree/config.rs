//! Configuration types for tree walkers

use std::path::PathBuf;

/// Order in which the entries of one directory are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SiblingOrder {
    /// Sort siblings by file name, giving reproducible output.
    #[default]
    Name,
    /// Keep whatever order the filesystem enumeration yields.
    Native,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Traversal root. Resolved by the caller; the walker never guesses one.
    pub root_path: PathBuf,
    pub order: SiblingOrder,
}

impl TreeConfig {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            order: SiblingOrder::default(),
        }
    }

    pub fn with_order(mut self, order: SiblingOrder) -> Self {
        self.order = order;
        self
    }
}
