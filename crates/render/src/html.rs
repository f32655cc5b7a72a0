// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown to HTML conversion

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// URL schemes links and images may keep
const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Convert Markdown to an HTML fragment.
///
/// Raw HTML in the input is escaped and shown as text, and link or image
/// targets with any scheme but http, https or mailto are replaced by `#`.
/// Playbook values end up in the Markdown verbatim and must never become
/// live markup.
pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Keep relative URLs and allowed schemes; anything else becomes `#`.
fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    // Browsers drop whitespace and control characters inside schemes
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    let scheme = match compact.find(':') {
        Some(colon) => &compact[..colon],
        None => return url,
    };
    // A colon after a path, query or fragment start is not a scheme
    if scheme.contains(|c: char| matches!(c, '/' | '?' | '#')) {
        return url;
    }
    if ALLOWED_SCHEMES
        .iter()
        .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
    {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
