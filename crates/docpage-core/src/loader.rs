/*
 * loader.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Build-time static data loader for the documentation page.
 */

//! Build-time static data loader.
//!
//! Reads the markdown source from disk, converts it to HTML, and returns
//! the result wrapped in the hosting envelope. One disk read, one
//! conversion call. If the file cannot be read the error propagates to the
//! build pipeline, which aborts generation for this page — no retry, no
//! fallback content.

use std::fs;
use std::path::Path;

use crate::error::{DocpageError, Result};
use crate::markdown::markdown_to_html;
use crate::props::StaticProps;

/// Fixed relative path to the documentation source.
pub const DOCS_SOURCE: &str = "docs/documentation.md";

/// Load the documentation page's static props from [`DOCS_SOURCE`].
pub fn load_static_props() -> Result<StaticProps> {
    load_static_props_from(Path::new(DOCS_SOURCE))
}

/// Load static props from an explicit markdown source path.
pub fn load_static_props_from(path: &Path) -> Result<StaticProps> {
    let markdown =
        fs::read_to_string(path).map_err(|source| DocpageError::io(path, source))?;

    tracing::debug!(path = %path.display(), bytes = markdown.len(), "read markdown source");

    Ok(StaticProps::new(markdown_to_html(&markdown)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_loads_plain_text_as_paragraph() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "doc.md", "Just some text");

        let props = load_static_props_from(&path).unwrap();
        assert_eq!(props.data.content_html, "<p>Just some text</p>\n");
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.md");

        let err = load_static_props_from(&path).unwrap_err();
        match err {
            DocpageError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_code_block_survives_loading_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "doc.md", "```rust\nlet x = 1;\n```");

        let props = load_static_props_from(&path).unwrap();
        assert!(props.data.content_html.contains("language-rust"));
        assert!(props.data.content_html.contains("let x = 1;"));
    }
}
