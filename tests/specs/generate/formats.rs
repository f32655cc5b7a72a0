//! Output format specs
//!
//! Verify each output format and where output is written.

use crate::prelude::*;

#[test]
fn json_is_the_default() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["generate"])
        .stdin(TIMER_PLAYBOOK)
        .passes()
        .stdout_eq("{\n  \"trigger\": [\n    \"Timer\"\n  ]\n}\n");
}

#[test]
fn markdown_format() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["generate", "--format", "markdown"])
        .stdin(TIMER_PLAYBOOK)
        .passes()
        .stdout_eq("## Documentation\n\n### Triggers\n\n- Timer\n");
}

#[test]
fn md_is_an_alias_for_markdown() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["generate", "-f", "MD"])
        .stdin(TIMER_PLAYBOOK)
        .passes()
        .stdout_has("### Triggers");
}

#[test]
fn html_format() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["generate", "--format", "html"])
        .stdin(TIMER_PLAYBOOK)
        .passes()
        .stdout_has("<h2>Documentation</h2>")
        .stdout_has("<li>Timer</li>");
}

#[test]
fn reads_playbook_file() {
    let temp = Project::empty();
    temp.file("exports/cleanup.json", TIMER_PLAYBOOK);

    temp.pbdoc()
        .args(&["generate", "exports/cleanup.json"])
        .passes()
        .stdout_has("\"Timer\"");
}

#[test]
fn writes_output_file() {
    let temp = Project::empty();
    temp.file("playbook.json", FULL_PLAYBOOK);

    temp.pbdoc()
        .args(&["generate", "playbook.json", "-f", "markdown", "-o", "DOCS.md"])
        .passes()
        .stdout_eq("");

    let docs = temp.read("DOCS.md");
    assert!(docs.starts_with("## Documentation\n"));
    assert!(docs.contains("- Parse Report: body\n"));
}

#[test]
fn output_extension_picks_format() {
    let temp = Project::empty();
    temp.file("playbook.json", TIMER_PLAYBOOK);

    temp.pbdoc()
        .args(&["generate", "playbook.json", "-o", "docs.html"])
        .passes();

    assert!(temp.read("docs.html").contains("<li>Timer</li>"));
}

#[test]
fn empty_playbook_has_only_a_heading() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["generate", "-f", "markdown"])
        .stdin("{}")
        .passes()
        .stdout_eq("## Documentation\n");
}

#[test]
fn verbose_logs_go_to_stderr() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["-vv", "generate", "-f", "markdown"])
        .stdin(TIMER_PLAYBOOK)
        .passes()
        .stdout_eq("## Documentation\n\n### Triggers\n\n- Timer\n")
        .stderr_has("generated documentation");
}

#[test]
fn quiet_by_default() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["generate"])
        .stdin(TIMER_PLAYBOOK)
        .passes()
        .stderr_lacks("generated documentation");
}
