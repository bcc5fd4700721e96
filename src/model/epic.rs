use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::issue::Issue;

/// An epic together with every issue linked to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epic {
    pub key: String,
    pub summary: String,
    /// Plain-text rendering of the ADF description.
    pub description: String,
    pub status: String,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// An open epic as returned by the epic listing, without its issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpicSummary {
    pub key: String,
    pub summary: String,
    /// Description exactly as Jira returned it (ADF document or null).
    pub description: Value,
    pub status: String,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
}
