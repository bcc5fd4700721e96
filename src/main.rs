mod cli;

use std::io;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use cli::Command;
use jira_api_client::{config, Credentials, JiraClient};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = cli::parse_args(&args)?;
    if command == Command::Help {
        cli::print_help();
        return Ok(());
    }

    let path = config::config_path();
    let project = config::load_project(&path)
        .with_context(|| format!("Failed to load project config from {}", path.display()))?;

    if !command.needs_network() {
        println!("{project}");
        return Ok(());
    }

    let credentials = Credentials::from_env()?;
    let client = JiraClient::new(project, &credentials);
    tracing::info!(
        user = credentials.username(),
        project = %client.project().project_key,
        base_url = %client.project().base_url,
        "connecting"
    );

    match command {
        Command::ServerInfo => print_json(&client.get_server_info()?),
        Command::Epics => print_json(&client.list_epics()?),
        Command::Epic(key) => print_json(
            &client
                .get_epic_with_issues(&key)
                .with_context(|| format!("Failed to fetch epic {key}"))?,
        ),
        Command::Issues(category) => {
            print_json(&client.get_issues_by_status_category(&category)?)
        }
        Command::InProgress => print_json(&client.get_in_progress_issues()?),
        Command::Done => print_json(&client.get_done_issues()?),
        Command::Jql(query) => print_json(&client.get_issues_by_jql(&query)?),
        Command::Config | Command::Help => Ok(()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
