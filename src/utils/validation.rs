use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Whether a login looks like an email address.
///
/// Student accounts use email logins, teacher accounts do not; the login flow
/// branches on this exactly once.
pub fn is_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}
