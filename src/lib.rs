//! Thin blocking client over the Jira Cloud REST API.
//!
//! Fetches epics and issues for one configured project and maps them into
//! plain records with calendar dates and flattened descriptions.

pub mod config;
pub mod error;
pub mod jira;
pub mod model;
pub mod util;

pub use config::{Credentials, ProjectMetadata};
pub use error::{Error, Result};
pub use jira::JiraClient;
pub use model::{Epic, EpicSummary, Issue};
