// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pbdoc-core: playbook model and documentation extraction
//!
//! This crate provides:
//! - A lenient model of serialized playbook definitions (jobs, triggers, parameters)
//! - Independent extraction passes that recover documentation from the job graph
//! - The `Documentation` structure every output format is rendered from

pub mod docs;
pub mod extract;
pub mod playbook;

pub use docs::{
    CustomMetric, Datastore, Documentation, HttpLinkUsage, InternalVariable, PlaybookVariables,
    Variable,
};
pub use extract::{extract, ExtractError, ExtractOptions};
pub use playbook::{
    parse_playbook, parse_playbook_file, parse_playbook_value, AppCatalogItem, Job,
    JobParameter, ParameterDef, ParseError, Playbook, Trigger,
};
