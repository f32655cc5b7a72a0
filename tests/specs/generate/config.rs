//! Configuration specs
//!
//! Verify config file discovery and precedence.

use crate::prelude::*;

const METRIC_PLAYBOOK: &str = r#"{
  "jobList": [
    {
      "name": "Record",
      "appCatalogItem": {"displayName": "Metric Writer"},
      "jobParameterList": [
        {"appCatalogItemParameter": {"paramName": "metric_name"}, "value": "Records"}
      ]
    }
  ]
}"#;

#[test]
fn working_directory_config_sets_format() {
    let temp = Project::empty();
    temp.file("pbdoc.toml", "[output]\nformat = \"markdown\"\n");

    temp.pbdoc()
        .args(&["generate"])
        .stdin(TIMER_PLAYBOOK)
        .passes()
        .stdout_has("## Documentation");
}

#[test]
fn format_flag_overrides_config() {
    let temp = Project::empty();
    temp.file("pbdoc.toml", "[output]\nformat = \"markdown\"\n");

    temp.pbdoc()
        .args(&["generate", "--format", "json"])
        .stdin(TIMER_PLAYBOOK)
        .passes()
        .stdout_has("\"trigger\"");
}

#[test]
fn config_from_environment() {
    let temp = Project::empty();
    let path = temp.file("conf/pbdoc.toml", "[output]\nformat = \"html\"\n");

    temp.pbdoc()
        .env("PBDOC_CONFIG", path.to_str().unwrap())
        .args(&["generate"])
        .stdin(TIMER_PLAYBOOK)
        .passes()
        .stdout_has("<h2>Documentation</h2>");
}

#[test]
fn config_flag_wins_over_environment() {
    let temp = Project::empty();
    let env_path = temp.file("env.toml", "[output]\nformat = \"html\"\n");
    temp.file("flag.toml", "[output]\nformat = \"markdown\"\n");

    temp.pbdoc()
        .env("PBDOC_CONFIG", env_path.to_str().unwrap())
        .args(&["--config", "flag.toml", "generate"])
        .stdin(TIMER_PLAYBOOK)
        .passes()
        .stdout_has("## Documentation")
        .stdout_lacks("<h2>");
}

#[test]
fn extract_apps_are_configurable() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["generate"])
        .stdin(METRIC_PLAYBOOK)
        .passes()
        .stdout_lacks("Records");

    temp.file(
        "pbdoc.toml",
        "[extract]\ncustom_metric_apps = [\"Metric Writer\"]\n",
    );
    temp.pbdoc()
        .args(&["generate"])
        .stdin(METRIC_PLAYBOOK)
        .passes()
        .stdout_has("\"name\": \"Records\"");
}
