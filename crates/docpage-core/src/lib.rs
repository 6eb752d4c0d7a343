//! Core rendering infrastructure for the docpage documentation page
//!
//! This crate renders a single static documentation page: a markdown file
//! is read from disk at build time, converted to HTML, injected into a
//! page template beneath a shared header, and given one pass of syntax
//! highlighting over its code blocks.
//!
//! # Architecture
//!
//! - [`StaticPage`] - the hosting contract: a build-time loader plus a
//!   renderer invoked with the loaded data
//! - [`loader`] - reads the markdown source and produces [`StaticProps`]
//! - [`DocsPage`] - binds the props to the page template and mounts it
//! - [`Highlighter`] - the highlighting capability, passed in explicitly
//!   and resolved once at process start
//!
//! # Example
//!
//! ```no_run
//! use docpage_core::{DocsPage, StaticPage, default_highlighter};
//!
//! let page = DocsPage::new(default_highlighter());
//! let props = page.load()?;
//! let html = page.render(&props)?;
//! # Ok::<(), docpage_core::DocpageError>(())
//! ```

pub mod error;
pub mod header;
pub mod highlight;
pub mod loader;
pub mod markdown;
pub mod page;
pub mod props;

// Re-export commonly used types
pub use error::{DocpageError, Result};
pub use header::Header;
pub use highlight::{Highlighter, SyntectHighlighter, default_highlighter, highlight_code_blocks};
pub use loader::{DOCS_SOURCE, load_static_props, load_static_props_from};
pub use markdown::markdown_to_html;
pub use page::{DocsPage, MountedPage};
pub use props::{PageData, StaticPage, StaticProps};
