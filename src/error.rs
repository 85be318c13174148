//! Error types for structure generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a run.
///
/// Each variant keeps the path involved and, where there is one, the
/// underlying I/O error so the system message reaches the user unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// The traversal root does not exist or cannot be inspected.
    #[error("cannot access '{}': {source}", path.display())]
    RootNotFound { path: PathBuf, source: io::Error },

    /// The traversal root exists but is not a directory.
    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Listing a directory (or classifying one of its entries) failed.
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    /// The output file could not be created or truncated.
    #[error("cannot create '{}': {source}", path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    /// Writing or flushing the output failed.
    #[error("error writing '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// A sink passed to the walker failed; not tied to a known file.
    #[error("error writing output: {source}")]
    Output { source: io::Error },

    /// The current directory could not be determined.
    #[error("cannot determine current directory: {source}")]
    CurrentDir { source: io::Error },

    /// The directory of the running executable could not be determined.
    #[error("cannot determine executable directory: {source}")]
    ExecutableDir { source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Attach the output file path to a sink failure reported by the walker.
    pub fn at_output(self, output: &std::path::Path) -> Self {
        match self {
            Error::Output { source } => Error::Write {
                path: output.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path_and_system_message() {
        let err = Error::RootNotFound {
            path: PathBuf::from("/no/such/dir"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/no/such/dir"), "got: {}", msg);
        assert!(msg.contains("No such file or directory"), "got: {}", msg);
    }

    #[test]
    fn test_not_a_directory_has_no_io_source() {
        let err = Error::NotADirectory {
            path: PathBuf::from("file.txt"),
        };
        assert!(std::error::Error::source(&err).is_none());
        assert_eq!(err.to_string(), "'file.txt' is not a directory");
    }

    #[test]
    fn test_io_error_kind_is_preserved() {
        let err = Error::CreateOutput {
            path: PathBuf::from("/readonly/out.txt"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let kind = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<io::Error>())
            .map(io::Error::kind);
        assert_eq!(kind, Some(io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn test_at_output_tags_sink_failures_only() {
        let sink = Error::Output {
            source: io::Error::from(io::ErrorKind::WriteZero),
        };
        let tagged = sink.at_output(std::path::Path::new("out.txt"));
        assert!(matches!(tagged, Error::Write { ref path, .. } if path.ends_with("out.txt")));

        let other = Error::NotADirectory {
            path: PathBuf::from("x"),
        };
        assert!(matches!(
            other.at_output(std::path::Path::new("out.txt")),
            Error::NotADirectory { .. }
        ));
    }
}
