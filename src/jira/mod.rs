//! Blocking client for the Jira Cloud REST API.

pub mod jql;
pub mod mapper;
pub mod transport;


use serde_json::Value;
use tracing::{debug, info};

use crate::config::{Credentials, ProjectMetadata};
use crate::error::Result;
use crate::model::{Epic, EpicSummary, Issue};
use jql::Jql;
use transport::{HttpTransport, Request, Transport};

pub struct JiraClient<T = HttpTransport> {
    project: ProjectMetadata,
    auth_header: String,
    transport: T,
}

impl JiraClient<HttpTransport> {
    pub fn new(project: ProjectMetadata, credentials: &Credentials) -> Self {
        Self::with_transport(project, credentials, HttpTransport::new())
    }
}

impl<T: Transport> JiraClient<T> {
    pub fn with_transport(
        project: ProjectMetadata,
        credentials: &Credentials,
        transport: T,
    ) -> Self {
        Self {
            project,
            auth_header: credentials.to_basic_auth(),
            transport,
        }
    }

    pub fn project(&self) -> &ProjectMetadata {
        &self.project
    }

    fn get(&self, path: &str, query: Vec<(&'static str, String)>) -> Result<Value> {
        let request = Request {
            url: format!("{}/{path}", self.project.base_url),
            query,
            auth_header: &self.auth_header,
        };
        self.transport.get_json(&request)
    }

    fn search(&self, jql: &str, fields: String) -> Result<Vec<Value>> {
        debug!(jql, "searching");
        let query = vec![("jql", jql.to_string()), ("fields", fields)];
        let mut body = self.get("search/jql", query)?;
        match body.get_mut("issues").map(Value::take) {
            Some(Value::Array(issues)) => Ok(issues),
            _ => Ok(Vec::new()),
        }
    }

    /// Raw server metadata; handy as a connectivity check.
    pub fn get_server_info(&self) -> Result<Value> {
        self.get("serverInfo", Vec::new())
    }

    /// Every epic in the project whose status category is not Done.
    pub fn list_epics(&self) -> Result<Vec<EpicSummary>> {
        let jql = Jql::new()
            .project(&self.project.project_key)
            .equals("issuetype", "Epic")
            .not_equals("statusCategory", "Done");
        let epics = self
            .search(&jql.to_string(), mapper::epic_fields(&self.project))?
            .iter()
            .map(|raw| mapper::map_epic_summary(raw, &self.project))
            .collect::<Result<Vec<_>>>()?;
        info!(count = epics.len(), "listed open epics");
        Ok(epics)
    }

    pub fn get_in_progress_issues(&self) -> Result<Vec<Issue>> {
        self.get_issues_by_status_category("In Progress")
    }

    pub fn get_done_issues(&self) -> Result<Vec<Issue>> {
        self.get_issues_by_status_category("Done")
    }

    /// Non-epic issues of the project in the given status category.
    pub fn get_issues_by_status_category(&self, category: &str) -> Result<Vec<Issue>> {
        let jql = Jql::new()
            .project(&self.project.project_key)
            .status_category(category)
            .not_equals("issuetype", "Epic");
        self.get_issues_by_jql(&jql.to_string())
    }

    /// Run an arbitrary JQL query and map every hit to an [`Issue`].
    pub fn get_issues_by_jql(&self, jql: &str) -> Result<Vec<Issue>> {
        let issues = self
            .search(jql, mapper::issue_fields(&self.project))?
            .iter()
            .map(|raw| mapper::map_issue(raw, &self.project))
            .collect::<Result<Vec<_>>>()?;
        info!(count = issues.len(), "fetched issues");
        Ok(issues)
    }

    /// Fetch one epic and every issue linked to it.
    pub fn get_epic_with_issues(&self, epic_key: &str) -> Result<Epic> {
        let path = format!("issue/{}", urlencoding::encode(epic_key));
        let mut body = self.get(&path, vec![("fields", mapper::epic_fields(&self.project))])?;
        let fields = body
            .get_mut("fields")
            .map(Value::take)
            .unwrap_or_else(|| Value::Object(Default::default()));

        let issues = self.get_issues_by_jql(&Jql::new().epic_link(epic_key).to_string())?;
        // Summary and status are required here as for every other epic; a
        // response without `fields` fails mapping instead of yielding blanks.
        mapper::map_epic(epic_key, &fields, &self.project, issues)
    }
}
