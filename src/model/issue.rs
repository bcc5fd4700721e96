use serde::{Deserialize, Serialize};

/// A single Jira issue reduced to the fields reporting cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub issue_id: String,
    pub title: String,
    pub status: String,
    /// Calendar date (`YYYY-MM-DD`) the issue was created.
    pub created_date: String,
    pub start_date: Option<String>,
    pub done_date: Option<String>,
}
