use anyhow::{bail, Result};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    ServerInfo,
    Epics,
    Epic(String),
    Issues(String),
    InProgress,
    Done,
    Jql(String),
    Config,
    Help,
}

impl Command {
    /// Whether running the command talks to Jira.
    pub fn needs_network(&self) -> bool {
        !matches!(self, Command::Config | Command::Help)
    }
}

/// Parse everything after the program name.
///
/// Multi-word arguments may be quoted or passed as separate words:
///   jira-client issues In Progress
///   jira-client jql "project = ACME AND assignee = currentUser()"
pub fn parse_args(args: &[String]) -> Result<Command> {
    let Some((cmd, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };
    let joined = rest.join(" ");

    let command = match cmd.as_str() {
        "server-info" => Command::ServerInfo,
        "epics" => Command::Epics,
        "in-progress" => Command::InProgress,
        "done" => Command::Done,
        "config" => Command::Config,
        "help" | "-h" | "--help" => Command::Help,
        "epic" => match rest {
            [key] => Command::Epic(key.clone()),
            _ => bail!("Usage: jira-client epic <KEY>"),
        },
        "issues" => {
            if joined.trim().is_empty() {
                bail!("Usage: jira-client issues <status category>");
            }
            Command::Issues(joined)
        }
        "jql" => {
            if joined.trim().is_empty() {
                bail!("Usage: jira-client jql <query>");
            }
            Command::Jql(joined)
        }
        other => bail!("Unknown command: {other}\n\nRun `jira-client help` for usage."),
    };
    Ok(command)
}

pub fn print_help() {
    println!("jira-client — query epics and issues of a Jira project\n");
    println!("USAGE:");
    println!("  jira-client server-info          Check connectivity");
    println!("  jira-client epics                List open epics");
    println!("  jira-client epic <KEY>           Show an epic with its issues");
    println!("  jira-client issues <category>    Issues in a status category");
    println!("  jira-client in-progress          Issues in progress");
    println!("  jira-client done                 Done issues");
    println!("  jira-client jql <query>          Issues matching a JQL query");
    println!("  jira-client config               Show the loaded project config");
    println!();
    println!("ENVIRONMENT:");
    println!("  JIRA_USERNAME, JIRA_API_TOKEN    Credentials (required)");
    println!("  JIRA_CLIENT_CONFIG               Config file (default ~/.jira-client/config.toml)");
    println!("  RUST_LOG                         Log filter, e.g. jira_api_client=debug");
}
