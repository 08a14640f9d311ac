//! Human-readable summaries of GitHub events.
//!
//! Every formatter reads its fields through [`JsonReader`] paths such as
//! `repo.name` or `payload.pull_request.number`. Fields GitHub may omit or
//! null out are read as `Option`s; everything else is required and a missing
//! or mistyped value surfaces as a [`JsonError`].

use json_reader::error::Result;
use json_reader::JsonReader;

/// The event types this tool knows how to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    CommitComment,
    Create,
    Delete,
    Fork,
    Gollum,
    IssueComment,
    Issues,
    Member,
    Public,
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
    Push,
    Release,
    Sponsorship,
    Watch,
}

impl EventKind {
    pub const ALL: [EventKind; 16] = [
        EventKind::CommitComment,
        EventKind::Create,
        EventKind::Delete,
        EventKind::Fork,
        EventKind::Gollum,
        EventKind::IssueComment,
        EventKind::Issues,
        EventKind::Member,
        EventKind::Public,
        EventKind::PullRequest,
        EventKind::PullRequestReview,
        EventKind::PullRequestReviewComment,
        EventKind::Push,
        EventKind::Release,
        EventKind::Sponsorship,
        EventKind::Watch,
    ];

    /// The `type` field value GitHub uses for this event.
    pub fn type_name(self) -> &'static str {
        match self {
            EventKind::CommitComment => "CommitCommentEvent",
            EventKind::Create => "CreateEvent",
            EventKind::Delete => "DeleteEvent",
            EventKind::Fork => "ForkEvent",
            EventKind::Gollum => "GollumEvent",
            EventKind::IssueComment => "IssueCommentEvent",
            EventKind::Issues => "IssuesEvent",
            EventKind::Member => "MemberEvent",
            EventKind::Public => "PublicEvent",
            EventKind::PullRequest => "PullRequestEvent",
            EventKind::PullRequestReview => "PullRequestReviewEvent",
            EventKind::PullRequestReviewComment => "PullRequestReviewCommentEvent",
            EventKind::Push => "PushEvent",
            EventKind::Release => "ReleaseEvent",
            EventKind::Sponsorship => "SponsorshipEvent",
            EventKind::Watch => "WatchEvent",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            EventKind::CommitComment => "Commented on a commit",
            EventKind::Create => "Created a repository, branch, or tag",
            EventKind::Delete => "Deleted a branch or tag",
            EventKind::Fork => "Forked a repository",
            EventKind::Gollum => "Created or updated a wiki page",
            EventKind::IssueComment => "Commented on an issue or pull request",
            EventKind::Issues => "Opened, closed, or otherwise changed an issue",
            EventKind::Member => "Added a collaborator to a repository",
            EventKind::Public => "Made a repository public",
            EventKind::PullRequest => "Opened, closed, or reopened a pull request",
            EventKind::PullRequestReview => "Reviewed a pull request",
            EventKind::PullRequestReviewComment => "Commented on a pull request review",
            EventKind::Push => "Pushed to a repository",
            EventKind::Release => "Published a release",
            EventKind::Sponsorship => "Sponsored a developer",
            EventKind::Watch => "Starred a repository",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }
}

/// Describe one event. Returns `Ok(None)` for event types without a formatter.
/// Wiki (Gollum) events produce one line per page, joined with `\n`.
pub fn format_event(event: &JsonReader<'_>) -> Result<Option<String>> {
    let type_name = event.get_str("type")?;
    let Some(kind) = EventKind::from_type_name(type_name) else {
        return Ok(None);
    };
    let repo = event.get_str("repo.name")?;

    let line = match kind {
        EventKind::CommitComment => {
            let commit = event.get_str("payload.comment.commit_id")?;
            let short: String = commit.chars().take(7).collect();
            format!("Commented on commit {short} in {repo}")
        }
        EventKind::Create => {
            let ref_type = event.get_str("payload.ref_type")?;
            match event.get_as::<Option<&str>>("payload.ref")? {
                Some(name) => format!("Created {ref_type} {name} in {repo}"),
                None => format!("Created {ref_type} {repo}"),
            }
        }
        EventKind::Delete => {
            let ref_type = event.get_str("payload.ref_type")?;
            let name = event.get_str("payload.ref")?;
            format!("Deleted {ref_type} {name} from {repo}")
        }
        EventKind::Fork => {
            let fork = event.get_str("payload.forkee.full_name")?;
            format!("Forked {repo} -> {fork}")
        }
        EventKind::Gollum => {
            let pages = event.array_len("payload.pages")?;
            let mut lines = Vec::with_capacity(pages);
            for i in 0..pages {
                let action = event.get_str(&format!("payload.pages[{i}].action"))?;
                let page = event.get_str(&format!("payload.pages[{i}].page_name"))?;
                lines.push(format!("{} wiki page \"{page}\" in {repo}", capitalize(action)));
            }
            lines.join("\n")
        }
        EventKind::IssueComment => {
            let action = event.get_as::<Option<&str>>("payload.action")?.unwrap_or("created");
            let number = event.get_i64("payload.issue.number")?;
            let target = if event.has_key("payload.issue", "pull_request")? {
                "pull request"
            } else {
                "issue"
            };
            format!("{} a comment on {target} #{number} in {repo}", capitalize(action))
        }
        EventKind::Issues => {
            let action = event.get_str("payload.action")?;
            let number = event.get_i64("payload.issue.number")?;
            let title = event.get_str("payload.issue.title")?;
            format!("{} issue #{number} '{title}' in {repo}", capitalize(action))
        }
        EventKind::Member => {
            let member = event.get_str("payload.member.login")?;
            format!("Added {member} as a collaborator to {repo}")
        }
        EventKind::Public => format!("Made {repo} public"),
        EventKind::PullRequest => {
            let action = event.get_str("payload.action")?;
            let number = event.get_i64("payload.pull_request.number")?;
            let title = event.get_as::<Option<&str>>("payload.pull_request.title")?;
            match title {
                Some(title) => format!(
                    "{} pull request #{number} '{title}' in {repo}",
                    capitalize(action)
                ),
                None => format!("{} pull request #{number} in {repo}", capitalize(action)),
            }
        }
        EventKind::PullRequestReview => {
            let state = event
                .get_as::<Option<&str>>("payload.review.state")?
                .unwrap_or("reviewed");
            let number = event.get_i64("payload.pull_request.number")?;
            format!("{} pull request #{number} in {repo}", capitalize(state))
        }
        EventKind::PullRequestReviewComment => {
            let number = event.get_i64("payload.pull_request.number")?;
            let verb = if event.has_key("payload", "changes")? {
                "Edited"
            } else {
                "Added"
            };
            format!("{verb} a review comment on pull request #{number} in {repo}")
        }
        EventKind::Push => {
            let commits = match event.get_as::<Option<i64>>("payload.distinct_size")? {
                Some(n) => Some(n),
                None => event.get_as::<Option<i64>>("payload.size")?,
            };
            match commits {
                Some(1) => format!("Pushed 1 commit to {repo}"),
                Some(n) => format!("Pushed {n} commits to {repo}"),
                None => format!("Pushed to {repo}"),
            }
        }
        EventKind::Release => {
            let action = event.get_str("payload.action")?;
            let name = match event.get_as::<Option<&str>>("payload.release.name")? {
                Some(name) if !name.is_empty() => name,
                _ => event.get_str("payload.release.tag_name")?,
            };
            format!("{} release {name} in {repo}", capitalize(action))
        }
        EventKind::Sponsorship => {
            let action = event.get_str("payload.action")?;
            let sponsorable = match event
                .get_as::<Option<&str>>("payload.sponsorship.sponsorable.login")?
            {
                Some(login) => login,
                None => event.get_str("payload.sponsorable.login")?,
            };
            if action == "pending_tier_change" {
                format!("Requested a sponsorship tier change for {sponsorable}")
            } else {
                format!("{} a sponsorship for {sponsorable}", capitalize(action))
            }
        }
        EventKind::Watch => format!("Starred {repo}"),
    };
    Ok(Some(line))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
