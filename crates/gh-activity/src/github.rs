//! Retrieval of a user's public events from the GitHub REST API.

use anyhow::{bail, Context, Result};
use json_reader::{parse, JsonReader};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("gh-activity/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the public events endpoint.
pub struct GitHubClient {
    agent: ureq::Agent,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Fetch the raw JSON listing of `username`'s recent public events.
    ///
    /// The username must already be validated; it is placed in the URL as is.
    pub fn fetch_events(&self, username: &str) -> Result<String> {
        let url = format!("{}/users/{}/events", self.base_url, username);
        debug!(%url, "fetching events");

        let mut request = self
            .agent
            .get(&url)
            .set("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {token}"));
        }

        match request.call() {
            Ok(response) => response
                .into_string()
                .context("failed to read the events response body"),
            Err(ureq::Error::Status(404, response)) => {
                let body = response.into_string().unwrap_or_default();
                if is_not_found(&body) {
                    bail!("User '{username}' does not exist on GitHub.");
                }
                bail!("request failed with status 404: {body}");
            }
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                bail!("request failed with status {code}: {body}");
            }
            Err(ureq::Error::Transport(err)) => {
                Err(err).with_context(|| format!("request to {url} failed"))
            }
        }
    }
}

/// GitHub answers unknown users with `{"message":"Not Found", ...}`.
fn is_not_found(body: &str) -> bool {
    let Ok(root) = parse(body) else {
        return false;
    };
    matches!(
        JsonReader::new(&root).get_as::<Option<&str>>("message"),
        Ok(Some("Not Found"))
    )
}
