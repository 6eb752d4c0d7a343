/*
 * markdown.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Markdown to HTML conversion.
 */

//! Markdown to HTML conversion.
//!
//! Thin wrapper over pulldown-cmark. Fenced code blocks are intercepted at
//! the event level and emitted as `<pre><code class="language-LANG">` with
//! entity-escaped content, so the rendered page contains each block's text
//! verbatim until the highlighting pass rewrites it.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

/// Convert markdown text to HTML.
///
/// Conversion is total: any input produces output. Tables, strikethrough
/// and footnotes are enabled on top of CommonMark.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::new();
    let mut in_code_block = false;
    let mut code_block_lang: Option<String> = None;
    let mut code_block_content = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                in_code_block = true;
                code_block_lang = match kind {
                    CodeBlockKind::Fenced(lang) => {
                        let lang_str = lang.to_string();
                        if lang_str.is_empty() {
                            None
                        } else {
                            Some(lang_str)
                        }
                    }
                    CodeBlockKind::Indented => None,
                };
                code_block_content.clear();
            }
            Event::End(TagEnd::CodeBlock) => {
                let lang_class = code_block_lang
                    .as_ref()
                    .map(|l| format!(" class=\"language-{l}\""))
                    .unwrap_or_default();

                html_output.push_str(&format!(
                    "<pre><code{lang_class}>{}</code></pre>\n",
                    html_escape(&code_block_content)
                ));
                in_code_block = false;
                code_block_lang = None;
            }
            Event::Text(text) if in_code_block => {
                code_block_content.push_str(&text);
            }
            other => {
                pulldown_cmark::html::push_html(&mut html_output, std::iter::once(other));
            }
        }
    }

    html_output
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Reverse [`html_escape`]. `&amp;` goes last so escaped ampersands in the
/// original text survive the round trip.
pub fn html_unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
