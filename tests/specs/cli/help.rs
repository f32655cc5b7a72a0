//! Help and completion specs
//!
//! Verify the command surface is discoverable.

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["--help"])
        .passes()
        .stdout_has("generate")
        .stdout_has("serve")
        .stdout_has("completions");
}

#[test]
fn generate_help_lists_formats() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["generate", "--help"])
        .passes()
        .stdout_has("--format")
        .stdout_has("--output")
        .stdout_has("json, markdown (md), or html");
}

#[test]
fn serve_help_shows_default_bind() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["serve", "--help"])
        .passes()
        .stdout_has("127.0.0.1:5000");
}

#[test]
fn version_flag() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["--version"])
        .passes()
        .stdout_has("pbdoc");
}

#[test]
fn completions_for_bash() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("_pbdoc()");
}
