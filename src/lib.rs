//! filestruct - write a directory tree's layout to a plain text file

pub mod error;
pub mod generate;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use generate::{default_output_path, generate, generate_with, render_to_string, write_structure};
pub use output::{IndentedWriter, OutputConfig};
pub use tree::{SiblingOrder, StructureOutput, TreeConfig, TreeWalker, WalkSummary};
