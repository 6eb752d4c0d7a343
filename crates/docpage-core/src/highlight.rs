/*
 * highlight.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Syntax highlighting capability and the post-render highlighting pass.
 */

//! Syntax highlighting capability and the post-render highlighting pass.
//!
//! The highlighter is an explicit capability passed into the page renderer
//! by reference, resolved once at process start and held read-only. The
//! renderer invokes it in a single pass over the code blocks present when
//! the page is mounted; code added afterward is never highlighted.

use once_cell::sync::Lazy;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;

use crate::markdown::html_unescape;

/// A syntax highlighting capability.
///
/// Given a code block's verbatim text and its fence language, produce
/// highlighted HTML suitable as the inner markup of a `<code>` element.
///
/// Implementations must be `Send + Sync`: the capability is resolved once
/// and shared for the life of the process.
pub trait Highlighter: Send + Sync {
    /// Highlight one code block.
    fn highlight(&self, code: &str, lang: Option<&str>) -> String;
}

/// Highlighter backed by syntect's default syntax definitions.
///
/// Emits class-annotated spans (no inline colors), leaving presentation to
/// the page stylesheet. An unrecognized language falls back to plain text:
/// the enhancement degrades, the content survives.
pub struct SyntectHighlighter {
    syntaxes: SyntaxSet,
}

impl SyntectHighlighter {
    /// Load the default syntax set. This is the expensive step, done once.
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
        }
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, code: &str, lang: Option<&str>) -> String {
        let syntax = lang
            .and_then(|l| self.syntaxes.find_syntax_by_token(l))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntaxes, ClassStyle::Spaced);

        for line in code.lines() {
            // ClassedHTMLGenerator expects each line with its newline
            let _ = generator.parse_html_for_line_which_includes_newline(&format!("{line}\n"));
        }

        generator.finalize()
    }
}

static DEFAULT_HIGHLIGHTER: Lazy<SyntectHighlighter> = Lazy::new(SyntectHighlighter::new);

/// The process-wide default highlighter, resolved on first use.
pub fn default_highlighter() -> &'static SyntectHighlighter {
    &DEFAULT_HIGHLIGHTER
}

/// Rewrite every code block in rendered HTML with highlighted markup.
///
/// This is the one-time pass the renderer runs after the page is mounted.
/// It locates `<pre><code …>` elements produced by the markdown converter,
/// recovers each block's verbatim text from its entity-escaped form, hands
/// it to the capability, and replaces the element's inner markup in place.
/// Markup that does not match that shape is left untouched.
pub fn highlight_code_blocks(html: &str, highlighter: &dyn Highlighter) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find("<pre><code") {
        let after_pre = &rest[start..];
        let Some(tag_len) = after_pre.find('>').map(|i| i + 1) else {
            break;
        };
        let open_tags = &after_pre[..tag_len];
        let body_start = start + tag_len;
        let Some(body_len) = rest[body_start..].find("</code></pre>") else {
            break;
        };

        let lang = language_from_open_tag(open_tags);
        let code = html_unescape(&rest[body_start..body_start + body_len]);

        tracing::debug!(lang = lang.unwrap_or("plain"), bytes = code.len(), "highlighting code block");

        out.push_str(&rest[..start]);
        out.push_str(open_tags);
        out.push_str(&highlighter.highlight(&code, lang));
        out.push_str("</code></pre>");

        rest = &rest[body_start + body_len + "</code></pre>".len()..];
    }

    out.push_str(rest);
    out
}

/// Extract the fence language from a `<pre><code class="language-…">` tag.
fn language_from_open_tag(open_tags: &str) -> Option<&str> {
    let rest = open_tags.split("language-").nth(1)?;
    let lang = rest.split('"').next()?;
    if lang.is_empty() { None } else { Some(lang) }
}
