/*
 * props.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Page data records and the static-page hosting contract.
 */

//! Page data records and the static-page hosting contract.
//!
//! A page participates in static generation by implementing [`StaticPage`]:
//! the host invokes [`StaticPage::load`] once at build time to gather the
//! page's inputs, then [`StaticPage::render`] with the loaded data to
//! produce the final markup. The loaded data is transient: it is created
//! once per build, never mutated, and discarded after the page is rendered.

use serde::Serialize;

use crate::Result;

/// The single data record a documentation page needs: its body content,
/// already converted to HTML at build time.
///
/// The HTML is trusted build-time output and is injected into the page
/// verbatim, without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageData {
    /// Converted HTML for the page body
    pub content_html: String,
}

/// The envelope the hosting contract expects loader output to be shaped as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticProps {
    /// The loaded page data
    pub data: PageData,
}

impl StaticProps {
    /// Wrap converted HTML in the hosting envelope.
    pub fn new(content_html: impl Into<String>) -> Self {
        Self {
            data: PageData {
                content_html: content_html.into(),
            },
        }
    }
}

/// A statically generated page.
///
/// The two halves of the hosting contract:
///
/// - `load` runs at build time and gathers everything the page needs.
///   If it fails, generation of this page aborts; there is no retry and
///   no fallback content.
/// - `render` is a pure function of the loaded data. Rendering the same
///   page with different data fully replaces the previous output.
pub trait StaticPage {
    /// The data record this page loads at build time.
    type Data;

    /// Load the page's static data.
    fn load(&self) -> Result<Self::Data>;

    /// Render the page from loaded data.
    fn render(&self, data: &Self::Data) -> Result<String>;
}
