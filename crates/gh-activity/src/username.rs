//! GitHub username rules.

/// Longest username GitHub accepts.
pub const MAX_USERNAME_LEN: usize = 39;

/// Shown when a username fails [`is_valid_username`].
pub const USERNAME_RULES: &str = "\
Please provide a valid username.
GitHub usernames may only contain alphanumeric characters or hyphens.
GitHub usernames cannot have multiple consecutive hyphens.
GitHub usernames cannot begin or end with a hyphen.
GitHub usernames are at most 39 characters long.";

/// Whether `name` is an acceptable GitHub username: 1 to 39 ASCII
/// alphanumerics or hyphens, with no leading, trailing or doubled hyphen.
pub fn is_valid_username(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_USERNAME_LEN
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        && !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
}
