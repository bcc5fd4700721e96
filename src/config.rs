use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const USERNAME_VAR: &str = "JIRA_USERNAME";
pub const API_TOKEN_VAR: &str = "JIRA_API_TOKEN";
pub const CONFIG_PATH_VAR: &str = "JIRA_CLIENT_CONFIG";

/// Per-project settings: where the API lives and which custom fields hold
/// the planning dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// REST root, e.g. `https://acme.atlassian.net/rest/api/3`.
    pub base_url: String,
    pub project_key: String,
    /// Epic start date.
    pub start_date_field_id: String,
    pub actual_start_date_field_id: String,
    pub actual_end_date_field_id: String,
}

impl fmt::Display for ProjectMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "base_url:                   {}", self.base_url)?;
        writeln!(f, "project_key:                {}", self.project_key)?;
        writeln!(f, "start_date_field_id:        {}", self.start_date_field_id)?;
        writeln!(
            f,
            "actual_start_date_field_id: {}",
            self.actual_start_date_field_id
        )?;
        write!(
            f,
            "actual_end_date_field_id:   {}",
            self.actual_end_date_field_id
        )
    }
}

/// Username and API token used for HTTP Basic auth.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    api_token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_token", &"***")
            .finish()
    }
}

impl Credentials {
    pub fn new(username: String, api_token: String) -> Self {
        Self {
            username,
            api_token,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve credentials through `lookup`, treating unset and empty values
    /// the same way.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());
        match (get(USERNAME_VAR), get(API_TOKEN_VAR)) {
            (Some(username), Some(api_token)) => Ok(Self::new(username, api_token)),
            _ => Err(Error::Config(format!(
                "{USERNAME_VAR} and {API_TOKEN_VAR} environment variables must be set"
            ))),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn to_basic_auth(&self) -> String {
        use base64::Engine;
        let creds = format!("{}:{}", self.username, self.api_token);
        let encoded = base64::engine::general_purpose::STANDARD.encode(creds);
        format!("Basic {encoded}")
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".jira-client")
        .join("config.toml")
}

/// The config file named by `JIRA_CLIENT_CONFIG`, or the default location.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

pub fn load_project(path: &Path) -> Result<ProjectMetadata> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config from {}: {e}", path.display()))
    })?;
    parse_project(&contents)
}

pub fn parse_project(contents: &str) -> Result<ProjectMetadata> {
    let mut project: ProjectMetadata = toml::from_str(contents)
        .map_err(|e| Error::Config(format!("Failed to parse project config: {e}")))?;
    project.base_url = project.base_url.trim_end_matches('/').to_string();
    Ok(project)
}
