//! Error types for docpage-core

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocpageError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template error: {0}")]
    Template(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("{0}")]
    Other(String),
}

impl DocpageError {
    /// Create an error from any message.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create an I/O error carrying the path that failed.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DocpageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = DocpageError::io(
            "docs/documentation.md",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("docs/documentation.md"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_other_error() {
        let err = DocpageError::other("something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }
}
