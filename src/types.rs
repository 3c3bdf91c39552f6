use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One search hit as returned by `GET /repos?query=...`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Repo {
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub repo_name: Option<String>,
    pub full_name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    #[serde(default)]
    pub private: Option<bool>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub watchers_count: Option<u64>,
}

impl Repo {
    /// Route path of this repo's detail page, if the gateway sent both halves.
    pub fn detail_path(&self) -> Option<String> {
        match (&self.owner, &self.repo_name) {
            (Some(owner), Some(name)) => Some(format!("/repos/{}/{}", owner, name)),
            _ => None,
        }
    }
}

/// Body of `GET /repos/{owner}/{repo_name}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RepoDetails {
    pub full_name: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub license: Option<Map<String, Value>>,
    pub repos_url: String,
}

impl RepoDetails {
    /// Best-effort license label. The gateway nests GitHub's license object
    /// under `name`, so both `{"name": "MIT"}` and `{"name": {"name": ...}}` occur.
    pub fn license_name(&self) -> Option<String> {
        let license = self.license.as_ref()?;
        let name = license.get("name")?;
        match name {
            Value::String(s) => Some(s.clone()),
            Value::Object(inner) => {
                let label = inner
                    .get("spdx_id")
                    .or_else(|| inner.get("name"))
                    .and_then(Value::as_str)?;
                Some(label.to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_repo(i: usize) -> Repo {
    Repo {
        owner: Some(format!("owner{}", i)),
        repo_name: Some(format!("repo{}", i)),
        full_name: format!("owner{}/repo{}", i, i),
        html_url: format!("https://github.com/owner{}/repo{}", i, i),
        description: Some(format!("Repository number {}", i)),
        stargazers_count: i as u64 * 10,
        forks_count: i as u64,
        private: Some(false),
        avatar_url: None,
        watchers_count: Some(i as u64 * 10),
    }
}

#[cfg(test)]
pub(crate) fn sample_repos(n: usize) -> Vec<Repo> {
    (1..=n).map(sample_repo).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_accepts_nulls_and_missing_optionals() {
        let json = r#"{
            "owner": null,
            "full_name": "octocat/Hello-World",
            "html_url": "https://github.com/octocat/Hello-World",
            "description": null,
            "stargazers_count": 42,
            "forks_count": 7
        }"#;
        let repo: Repo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.owner, None);
        assert_eq!(repo.repo_name, None);
        assert_eq!(repo.watchers_count, None);
        assert_eq!(repo.detail_path(), None);
    }

    #[test]
    fn detail_path_uses_owner_and_name() {
        let repo = sample_repo(3);
        assert_eq!(repo.detail_path().as_deref(), Some("/repos/owner3/repo3"));
    }

    #[test]
    fn license_name_handles_both_shapes() {
        let json = r#"{
            "full_name": "torvalds/linux",
            "name": "linux",
            "description": "Linux kernel source tree",
            "stargazers_count": 1,
            "forks_count": 2,
            "open_issues_count": 3,
            "language": "C",
            "license": {"name": {"key": "gpl-2.0", "name": "GNU General Public License v2.0", "spdx_id": "GPL-2.0"}},
            "repos_url": "https://github.com/torvalds"
        }"#;
        let details: RepoDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.license_name().as_deref(), Some("GPL-2.0"));

        let flat = RepoDetails {
            license: serde_json::from_str(r#"{"name": "MIT"}"#).unwrap(),
            ..details.clone()
        };
        assert_eq!(flat.license_name().as_deref(), Some("MIT"));

        let none = RepoDetails { license: None, ..details };
        assert_eq!(none.license_name(), None);
    }
}
