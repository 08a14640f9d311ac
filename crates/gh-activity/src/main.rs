//! `gh-activity` CLI: show a GitHub user's recent public activity, or query
//! any JSON document with dotted/bracketed paths.
//!
//! ## Usage
//!
//! ```sh
//! # Recent activity straight from the GitHub API
//! gh-activity activity octocat
//!
//! # Same, from a saved events listing (use `-` for stdin)
//! gh-activity activity octocat -i events.json
//!
//! # Pull a field out of every record of a JSON document
//! gh-activity query payload.pages[0].action -i events.json
//!
//! # List the event types that can be described
//! gh-activity kinds
//! ```

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use json_reader::parser::DEFAULT_MAX_DEPTH;
use json_reader::{Document, ParseOptions, Value};
use std::io::{self, Read};
use tracing::{debug, warn};

mod events;
mod github;
mod logging;
mod username;

use events::{format_event, EventKind};
use github::{GitHubClient, DEFAULT_API_URL};
use username::{is_valid_username, USERNAME_RULES};

#[derive(Parser)]
#[command(
    name = "gh-activity",
    version,
    about = "Show a GitHub user's recent public activity"
)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a one-line summary of each recent public event of a user
    Activity {
        /// GitHub username
        username: String,
        /// Read the events listing from a file ("-" for stdin) instead of the API
        #[arg(short, long)]
        input: Option<String>,
        /// Base URL of the GitHub REST API
        #[arg(long, env = "GH_ACTIVITY_API_URL", default_value = DEFAULT_API_URL)]
        api_url: String,
        /// Token sent as a bearer credential
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
    /// Resolve a path such as `payload.pages[0].action` in every record
    Query {
        /// Path to resolve
        path: String,
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Separator between path segments
        #[arg(short, long, default_value = ".")]
        delimiter: String,
        /// Deepest nesting of objects and arrays accepted in the input
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// List the event types that can be described
    Kinds,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Activity {
            username,
            input,
            api_url,
            token,
        } => {
            if !is_valid_username(&username) {
                bail!(USERNAME_RULES);
            }

            let payload = match input.as_deref() {
                Some(path) => read_input(Some(path))?,
                None => {
                    let mut client = GitHubClient::new(api_url);
                    if let Some(token) = token {
                        client = client.with_token(token);
                    }
                    client.fetch_events(&username)?
                }
            };

            let doc = Document::parse(&payload).context("Failed to parse the events listing")?;
            let records = doc
                .records()
                .context("Events listing is not an object or an array of objects")?;
            debug!(count = records.len(), %username, "parsed events");

            if records.is_empty() {
                println!("No recent public activity for {username}.");
            }
            for (i, record) in records.iter().enumerate() {
                let summary =
                    format_event(record).with_context(|| format!("Failed to describe event #{i}"))?;
                match summary {
                    Some(text) => {
                        for line in text.lines() {
                            println!("- {line}");
                        }
                    }
                    None => {
                        let event_type = record.get_str("type").unwrap_or("<unknown>");
                        warn!(event_type, "skipping unsupported event type");
                    }
                }
            }
        }
        Commands::Query {
            path,
            input,
            delimiter,
            max_depth,
        } => {
            if delimiter.is_empty() {
                bail!("Path delimiter must not be empty");
            }
            let text = read_input(input.as_deref())?;
            let options = ParseOptions {
                max_depth,
                ..ParseOptions::default()
            };
            let doc = Document::parse_with(&text, &options).context("Failed to parse JSON input")?;
            let records = doc
                .records_with_delimiter(&delimiter)
                .context("Input is not an object or an array of objects")?;
            debug!(count = records.len(), %path, "querying records");

            for record in records {
                let value = record
                    .get(&path)
                    .with_context(|| format!("Failed to resolve `{path}`"))?;
                println!("{}", render(value)?);
            }
        }
        Commands::Kinds => {
            for kind in EventKind::ALL {
                println!("{:<32}{}", kind.type_name(), kind.description());
            }
        }
    }

    Ok(())
}

/// Text prints raw; everything else prints as pretty JSON.
fn render(value: &Value) -> Result<String> {
    match value {
        Value::Text(s) => Ok(s.clone()),
        other => Ok(serde_json::to_string_pretty(&serde_json::Value::from(other))?),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) if path != "-" => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
