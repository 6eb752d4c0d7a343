/*
 * header.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Shared page header component.
 */

//! Shared page header component.
//!
//! A pre-built, parameterless fragment rendered above the page content.

/// The shared site header fragment.
const HEADER_FRAGMENT: &str = r#"<header class="site-header">
<a class="brand" href="/">docpage</a>
<nav>
<a href="/docs">Documentation</a>
<a href="https://github.com/posit-dev/docpage">GitHub</a>
</nav>
</header>"#;

/// Shared header rendered above every page's content.
#[derive(Debug, Clone, Copy, Default)]
pub struct Header;

impl Header {
    /// Render the header fragment.
    pub fn render(&self) -> &'static str {
        HEADER_FRAGMENT
    }
}
