//! Output configuration types

/// Spaces per nesting level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "file_structure.txt";

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub indent_width: usize,
    /// Name of the output file created next to the root by default
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            file_name: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}
