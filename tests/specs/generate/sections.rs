//! Documentation section specs
//!
//! Verify what is recovered from a realistic playbook export.

use crate::prelude::*;
use serde_json::json;

#[test]
fn json_sections() {
    let temp = Project::empty();

    let run = temp
        .pbdoc()
        .args(&["generate"])
        .stdin(FULL_PLAYBOOK)
        .passes();
    let docs = run.stdout_json();

    assert_eq!(docs["trigger"], json!(["HttpLink", "UserAction"]));
    assert_eq!(
        docs["http_link"],
        json!([{"part": "body", "app": "Parse Report"}])
    );
    assert_eq!(docs["custom_metrics"][0]["name"], "Phishing Reports");
    assert_eq!(docs["custom_metrics"][0]["weight"], "1");
    assert_eq!(docs["datastores"][0]["db_method"], "GET");
    assert_eq!(docs["datastores"][0]["request_entity"], "sender");
    assert_eq!(
        docs["variables"]["user_variables"],
        json!([{"type": "text", "name": "analyst_email"}])
    );
    assert_eq!(
        docs["variables"]["org_variables"],
        json!([{"type": "keychain", "name": "smtp_password"}])
    );
    assert_eq!(docs["internal_variables"][0]["key"], "#status");
    assert_eq!(docs["internal_variables"][0]["value"], "triaged");
}

#[test]
fn markdown_sections() {
    let temp = Project::empty();

    temp.pbdoc()
        .args(&["generate", "--format", "markdown"])
        .stdin(FULL_PLAYBOOK)
        .passes()
        .stdout_has("### Triggers\n\n- HttpLink\n- UserAction\n")
        .stdout_has("### HTTP Link Trigger")
        .stdout_has("- Parse Report: body\n")
        .stdout_has("- Custom Metric Name: Phishing Reports\n  - Weight: 1\n  - Value: 5\n")
        .stdout_has("- `GET organization/senders/#App:1:sender!String`\n  - Datastore Entity: `sender`\n")
        .stdout_has("### User Variables")
        .stdout_has("- text: analyst_email\n")
        .stdout_has("### Organization Variables")
        .stdout_has("- keychain: smtp_password\n")
        .stdout_has("### Variables Declared in the Playbook")
        .stdout_has("- #status: triaged\n");
}

#[test]
fn http_link_requires_http_trigger() {
    let temp = Project::empty();
    let playbook = FULL_PLAYBOOK.replace("\"HttpLink\"", "\"Timer\"");

    let run = temp
        .pbdoc()
        .args(&["generate"])
        .stdin(&playbook)
        .passes();
    let docs = run.stdout_json();

    assert_eq!(docs["trigger"], json!(["Timer", "UserAction"]));
    assert!(docs.get("http_link").is_none());
}

#[test]
fn html_escapes_playbook_content() {
    let temp = Project::empty();
    let playbook = r#"{"playbookTriggerList": [{"id": 1, "type": "<script>alert(1)</script>"}]}"#;

    temp.pbdoc()
        .args(&["generate", "--format", "html"])
        .stdin(playbook)
        .passes()
        .stdout_lacks("<script>")
        .stdout_has("&lt;script&gt;");
}
