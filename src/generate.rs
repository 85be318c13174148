//! Writing a tree's structure to a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::output::{IndentedWriter, OutputConfig};
use crate::tree::{TreeConfig, TreeWalker, WalkSummary};

/// Write the structure of `root` to `output`, creating or truncating it.
///
/// Uses name-sorted siblings and a 4-space indent. See `generate_with` for
/// control over either.
pub fn generate(root: &Path, output: &Path) -> Result<WalkSummary> {
    generate_with(TreeConfig::new(root), &OutputConfig::default(), output)
}

/// Write the structure described by `tree` to the file at `output`.
///
/// The root is checked before the output file is touched, so a bad root
/// leaves an existing output file as it was. Once the walk has started, a
/// failure may leave a partially written file behind.
pub fn generate_with(
    tree: TreeConfig,
    output_config: &OutputConfig,
    output: &Path,
) -> Result<WalkSummary> {
    let walker = TreeWalker::new(tree);
    walker.validate_root()?;

    let file = File::create(output).map_err(|source| Error::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::debug!(output = %output.display(), "opened output file");

    write_structure(&walker, output_config, BufWriter::new(file))
        .map_err(|e| e.at_output(output))
}

/// Stream the structure produced by `walker` into any writer.
pub fn write_structure<W: Write>(
    walker: &TreeWalker,
    output_config: &OutputConfig,
    out: W,
) -> Result<WalkSummary> {
    let mut writer = IndentedWriter::new(out, output_config.clone());
    walker.walk(&mut writer)
}

/// Render the structure of the configured tree into a `String`.
pub fn render_to_string(tree: TreeConfig, output_config: &OutputConfig) -> Result<String> {
    let walker = TreeWalker::new(tree);
    let mut buf = Vec::new();
    write_structure(&walker, output_config, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Where the output goes when no path is given: inside the root itself.
pub fn default_output_path(root: &Path, output_config: &OutputConfig) -> PathBuf {
    root.join(&output_config.file_name)
}
