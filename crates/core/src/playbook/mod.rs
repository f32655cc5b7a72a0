// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Playbook definitions.
//!
//! A playbook is exported as a JSON document describing the configured
//! jobs (app instances), their parameters, and the triggers that start it.
//! This module provides:
//!
//! - **types**: Lenient data types that mirror the exported JSON
//! - **parser**: JSON parsing from text, decoded values, or files
//!
//! # Example
//!
//! ```ignore
//! use pbdoc_core::playbook::{parse_playbook, parse_playbook_file};
//!
//! let playbook = parse_playbook(r#"{"jobList": [], "playbookTriggerList": []}"#)?;
//! let playbook = parse_playbook_file(Path::new("exports/phishing.pbx"))?;
//! ```

pub mod parser;
pub mod types;

pub use parser::{parse_playbook, parse_playbook_file, parse_playbook_value, ParseError};
pub use types::{AppCatalogItem, Job, JobParameter, ParameterDef, Playbook, Trigger};
