//! Structure formatting
//!
//! - `config` - Output configuration types
//! - `utils` - Indentation and line helpers
//! - `indented` - Plain text writer: 4 spaces per level, directories end in `/`

mod config;
mod indented;
mod utils;

pub use config::{DEFAULT_INDENT_WIDTH, DEFAULT_OUTPUT_FILE, OutputConfig};
pub use indented::IndentedWriter;
pub use utils::{dir_line, file_line, indent_for};
