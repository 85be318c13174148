//! Indented plain-text formatter
//!
//! Writes one line per node to any `io::Write`. Implements the
//! `StructureOutput` trait for use with `TreeWalker`.

use std::io::{self, Write};

use crate::tree::{StructureOutput, WalkSummary};

use super::config::OutputConfig;
use super::utils::{dir_line, file_line};

/// Streaming text formatter over an arbitrary writer.
pub struct IndentedWriter<W: Write> {
    config: OutputConfig,
    out: W,
}

impl<W: Write> IndentedWriter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { config, out }
    }

    /// Give back the underlying writer. Call `finish` (or flush) first.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StructureOutput for IndentedWriter<W> {
    fn output_dir(&mut self, name: &str, depth: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            dir_line(name, depth, self.config.indent_width)
        )
    }

    fn output_file(&mut self, name: &str, depth: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            file_line(name, depth, self.config.indent_width)
        )
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        self.out.flush()
    }
}
