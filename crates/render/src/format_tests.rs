// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    json = { "json", OutputFormat::Json },
    markdown = { "markdown", OutputFormat::Markdown },
    md = { "md", OutputFormat::Markdown },
    html = { "html", OutputFormat::Html },
    uppercase = { "HTML", OutputFormat::Html },
    padded = { " json ", OutputFormat::Json },
)]
fn parse_format(input: &str, expected: OutputFormat) {
    assert_eq!(input.parse::<OutputFormat>().unwrap(), expected);
}

#[test]
fn unknown_format_lists_options() {
    let err = "pdf".parse::<OutputFormat>().unwrap_err();
    assert_eq!(err, FormatError::Unknown("pdf".to_string()));
    let msg = err.to_string();
    assert!(msg.contains("\"pdf\""));
    assert!(msg.contains("json, markdown, html"));
}

#[test]
fn display_round_trips_through_from_str() {
    for format in OutputFormat::ALL {
        assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
    }
}

#[test]
fn default_is_json() {
    assert_eq!(OutputFormat::default(), OutputFormat::Json);
}

#[test]
fn deserialize_lowercase_and_alias() {
    let formats: Vec<OutputFormat> = serde_json::from_str(r#"["html", "md"]"#).unwrap();
    assert_eq!(formats, vec![OutputFormat::Html, OutputFormat::Markdown]);
}

#[parameterized(
    json = { "docs.json", Some(OutputFormat::Json) },
    markdown = { "docs/PHISHING.md", Some(OutputFormat::Markdown) },
    upper = { "README.MD", Some(OutputFormat::Markdown) },
    html = { "site/index.html", Some(OutputFormat::Html) },
    other = { "docs.txt", None },
    none = { "docs", None },
)]
fn format_from_path(path: &str, expected: Option<OutputFormat>) {
    assert_eq!(OutputFormat::from_path(Path::new(path)), expected);
}
