use serde_json::Value;
use url::{form_urlencoded, Url};

const GITHUB_HOSTS: [&str; 2] = ["github.com", "www.github.com"];

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {path} failed with status {status}")]
    Status { path: String, status: u16 },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("not a GitHub issue url: {0}")]
    InvalidIssueUrl(String),
    #[error("{field} must not be empty")]
    EmptyInput { field: &'static str },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Issue-tracker request function used by inspection panels.
pub trait ApiClient {
    fn request(&self, path: &str) -> Result<Value, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTarget {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl IssueTarget {
    /// Parses `https://github.com/<owner>/<repo>/(issues|pull)/<number>`.
    /// Query and fragment are ignored.
    pub fn from_url(url: &str) -> Result<Self, ApiError> {
        let invalid = || ApiError::InvalidIssueUrl(url.to_string());
        let parsed = parse_github_url(url).ok_or_else(invalid)?;
        let segments = path_segments(&parsed);

        let [owner, repo, kind, number] = segments.as_slice() else {
            return Err(invalid());
        };
        if owner.is_empty() || repo.is_empty() || !matches!(*kind, "issues" | "pull") {
            return Err(invalid());
        }
        let number = number.parse::<u64>().map_err(|_| invalid())?;

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
        })
    }

    fn query(&self) -> form_urlencoded::Serializer<'static, String> {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("owner", &self.owner)
            .append_pair("repo", &self.repo)
            .append_pair("id", &self.number.to_string());
        query
    }
}

pub fn assign_path(target: &IssueTarget, assignee: &str) -> String {
    let mut query = target.query();
    query.append_pair("assignee", assignee);
    format!("/github/assign?{}", query.finish())
}

pub fn add_metadata_path(target: &IssueTarget, metadata: &str) -> String {
    let mut query = target.query();
    query.append_pair("metadata", metadata);
    format!("/github/issue/add/metadata?{}", query.finish())
}

/// Display name for a profile link: `https://github.com/moul` -> `moul`.
/// Anything that is not a GitHub profile link is returned trimmed.
pub fn github_login(profile_url: &str) -> String {
    if let Some(parsed) = parse_github_url(profile_url) {
        if let [login] = path_segments(&parsed)[..] {
            if !login.is_empty() {
                return login.to_string();
            }
        }
    }
    profile_url.trim_end_matches('/').to_string()
}

fn parse_github_url(raw: &str) -> Option<Url> {
    let parsed = Url::parse(raw).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    let host = parsed.host_str()?;
    let is_github = GITHUB_HOSTS
        .iter()
        .any(|known| host.eq_ignore_ascii_case(known));
    is_github.then_some(parsed)
}

/// Path segments without the empty one a trailing slash leaves behind.
fn path_segments(parsed: &Url) -> Vec<&str> {
    let mut segments: Vec<&str> = parsed.path_segments().into_iter().flatten().collect();
    if segments.last() == Some(&"") {
        segments.pop();
    }
    segments
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/api.rs"]
mod tests;
