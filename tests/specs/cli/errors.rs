//! Error reporting specs
//!
//! Verify failures exit non-zero with actionable messages on stderr.

use crate::prelude::*;

#[test]
fn missing_input_file() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["generate", "missing.json"])
        .fails()
        .stderr_has("error: Cannot read playbook 'missing.json'")
        .stderr_has("suggestions:");
}

#[test]
fn malformed_json() {
    let temp = Project::empty();
    temp.file("broken.json", "{\"jobList\": [");

    temp.pbdoc()
        .args(&["generate", "broken.json"])
        .fails()
        .stderr_has("Cannot document playbook from 'broken.json'")
        .stderr_has("invalid playbook JSON");
}

#[test]
fn json_that_is_not_an_object() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["generate"])
        .stdin("[]")
        .fails()
        .stderr_has("Cannot document playbook from stdin")
        .stderr_has("playbook must be a JSON object, found an array");
}

#[test]
fn unknown_format() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["generate", "--format", "pdf", "-"])
        .fails()
        .stderr_has("the specified output format (\"pdf\") is not available")
        .stderr_has("json, markdown, html");
}

#[test]
fn invalid_config_file() {
    let temp = Project::empty();
    temp.file("pbdoc.toml", "[output]\nformat = \"pdf\"\n");

    temp.pbdoc()
        .args(&["generate"])
        .fails()
        .stderr_has("Invalid configuration in 'pbdoc.toml'");
}

#[test]
fn missing_explicit_config_file() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["--config", "nope.toml", "generate"])
        .fails()
        .stderr_has("nope.toml");
}

#[test]
fn errors_keep_stdout_clean() {
    let temp = Project::empty();

    let run = temp
        .pbdoc()
        .args(&["generate", "missing.json"])
        .fails();
    assert_eq!(run.stdout(), "");
}
