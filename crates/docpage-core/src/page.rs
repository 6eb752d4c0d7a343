/*
 * page.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The documentation page: template binding and renderer.
 */

//! The documentation page: template binding and renderer.
//!
//! [`DocsPage`] binds the loaded [`StaticProps`] to the page template:
//! shared header first, then a content container whose inner markup is the
//! precomputed HTML verbatim (trusted build-time output, no escaping).
//! Mounting the page runs exactly one highlighting pass over the code
//! blocks present in the rendered container.

use crate::error::{DocpageError, Result};
use crate::header::Header;
use crate::highlight::{Highlighter, highlight_code_blocks};
use crate::loader;
use crate::props::{StaticPage, StaticProps};

/// Page template. `$title$`, `$header$` and `$body$` are the only
/// placeholders; the header always precedes the content container.
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>$title$</title>
<link rel="stylesheet" href="style.css">
</head>
<body>
$header$
<div id="content">
$body$
</div>
</body>
</html>
"#;

/// Substitute template placeholders.
///
/// Fails if a placeholder named in `values` does not occur in the template,
/// which would silently drop content.
fn render_template(template: &str, values: &[(&str, &str)]) -> Result<String> {
    let mut output = template.to_string();
    for (name, value) in values {
        let placeholder = format!("${name}$");
        if !output.contains(&placeholder) {
            return Err(DocpageError::Template(format!(
                "template has no ${name}$ placeholder"
            )));
        }
        output = output.replace(&placeholder, value);
    }
    Ok(output)
}

/// The rendered documentation page.
///
/// Produced by [`DocsPage::mount`]; the highlighting pass has already run
/// over the code blocks that were present at mount time. Appending further
/// markup to the HTML afterward will not highlight it — that requires a
/// new mount.
#[derive(Debug)]
pub struct MountedPage {
    html: String,
}

impl MountedPage {
    /// The complete page markup.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Consume the page, returning its markup.
    pub fn into_html(self) -> String {
        self.html
    }
}

/// The documentation page component.
///
/// Holds the highlighting capability as a read-only reference, resolved
/// once at process start and passed in explicitly (never looked up from
/// ambient state).
pub struct DocsPage<'a> {
    title: String,
    highlighter: &'a dyn Highlighter,
}

impl<'a> DocsPage<'a> {
    /// Create the page with the given highlighting capability.
    pub fn new(highlighter: &'a dyn Highlighter) -> Self {
        Self {
            title: "Documentation".to_string(),
            highlighter,
        }
    }

    /// Override the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Render the page from loaded props and run the highlighting pass.
    ///
    /// The pass runs exactly once per mount, over the code blocks present
    /// in the freshly rendered container. Mounting again with different
    /// props fully replaces the content container's markup.
    pub fn mount(&self, props: &StaticProps) -> Result<MountedPage> {
        let html = render_template(
            PAGE_TEMPLATE,
            &[
                ("title", self.title.as_str()),
                ("header", Header.render()),
                ("body", props.data.content_html.as_str()),
            ],
        )?;

        tracing::debug!(bytes = html.len(), "mounted page, running highlight pass");

        Ok(MountedPage {
            html: highlight_code_blocks(&html, self.highlighter),
        })
    }
}

impl StaticPage for DocsPage<'_> {
    type Data = StaticProps;

    fn load(&self) -> Result<StaticProps> {
        loader::load_static_props()
    }

    fn render(&self, data: &StaticProps) -> Result<String> {
        self.mount(data).map(MountedPage::into_html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHighlighter {
        calls: AtomicUsize,
    }

    impl CountingHighlighter {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Highlighter for CountingHighlighter {
        fn highlight(&self, code: &str, _lang: Option<&str>) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            crate::markdown::html_escape(code)
        }
    }

    /// Highlighter that leaves code untouched, for layout-only tests.
    struct NoopHighlighter;

    impl Highlighter for NoopHighlighter {
        fn highlight(&self, code: &str, _lang: Option<&str>) -> String {
            crate::markdown::html_escape(code)
        }
    }

    #[test]
    fn test_header_precedes_content_container() {
        let page = DocsPage::new(&NoopHighlighter);
        let mounted = page.mount(&StaticProps::new("<p>Body</p>")).unwrap();

        let html = mounted.html();
        let header_pos = html.find("<header").expect("header missing");
        let content_pos = html.find("<div id=\"content\">").expect("container missing");
        assert!(header_pos < content_pos);
    }

    #[test]
    fn test_body_injected_verbatim() {
        let page = DocsPage::new(&NoopHighlighter);
        let body = "<p>Trusted <em>build-time</em> output</p>";
        let mounted = page.mount(&StaticProps::new(body)).unwrap();
        assert!(mounted.html().contains(body));
    }

    #[test]
    fn test_title_in_head() {
        let page = DocsPage::new(&NoopHighlighter).with_title("Manual");
        let mounted = page.mount(&StaticProps::new("")).unwrap();
        assert!(mounted.html().contains("<title>Manual</title>"));
    }

    #[test]
    fn test_mount_runs_one_highlight_pass() {
        let hl = CountingHighlighter::new();
        let body = "<pre><code class=\"language-rust\">fn a() {}\n</code></pre>\n\
                    <pre><code>plain\n</code></pre>";
        let page = DocsPage::new(&hl);
        page.mount(&StaticProps::new(body)).unwrap();

        // One pass, one invocation per block present at mount time
        assert_eq!(hl.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_code_added_after_mount_is_not_highlighted() {
        let hl = CountingHighlighter::new();
        let page = DocsPage::new(&hl);
        let mounted = page.mount(&StaticProps::new("<p>no code</p>")).unwrap();

        let mut html = mounted.into_html();
        html.push_str("<pre><code>late addition</code></pre>");
        assert_eq!(hl.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_remount_replaces_content() {
        let page = DocsPage::new(&NoopHighlighter);
        let first = page.mount(&StaticProps::new("<p>first</p>")).unwrap();
        let second = page.mount(&StaticProps::new("<p>second</p>")).unwrap();

        assert!(first.html().contains("first"));
        assert!(second.html().contains("second"));
        assert!(!second.html().contains("first"));
    }

    #[test]
    fn test_render_template_missing_placeholder_errors() {
        let result = render_template("<html>$body$</html>", &[("title", "x")]);
        assert!(result.is_err());
    }
}
