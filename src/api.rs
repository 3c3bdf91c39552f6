use crate::error::ApiError;
use crate::types::{Repo, RepoDetails};
use serde::de::DeserializeOwned;

pub const DEFAULT_USER_AGENT: &str = concat!("reposearch/", env!("CARGO_PKG_VERSION"));

/// The repo-search gateway, as seen by the views.
pub trait RepoApi {
    /// `GET {base}/repos?query={term}`
    fn search(&self, term: &str) -> Result<Vec<Repo>, ApiError>;

    /// `GET {base}/repos/{owner}/{repo_name}`
    fn details(&self, owner: &str, repo_name: &str) -> Result<RepoDetails, ApiError>;
}

impl<T: RepoApi + ?Sized> RepoApi for &T {
    fn search(&self, term: &str) -> Result<Vec<Repo>, ApiError> {
        (**self).search(term)
    }

    fn details(&self, owner: &str, repo_name: &str) -> Result<RepoDetails, ApiError> {
        (**self).details(owner, repo_name)
    }
}

pub fn search_url(base_url: &str, term: &str) -> String {
    format!("{}/repos?query={}", base_url, urlencoding::encode(term))
}

pub fn details_url(base_url: &str, owner: &str, repo_name: &str) -> String {
    format!(
        "{}/repos/{}/{}",
        base_url,
        urlencoding::encode(owner),
        urlencoding::encode(repo_name)
    )
}

/// Blocking HTTP implementation. One request at a time, no retries, and
/// only the transport's own timeouts.
pub struct HttpRepoApi {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpRepoApi {
    pub fn new(base_url: impl Into<String>, user_agent: Option<&str>) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::blocking::Client) -> Self {
        HttpRepoApi {
            base_url: base_url.into(),
            client,
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        log::debug!("GET {}", url);
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        if let Some(err) = ApiError::from_status(status) {
            log::debug!("GET {} -> {}", url, status);
            return Err(err);
        }
        let body = resp.text()?;
        let parsed = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

impl RepoApi for HttpRepoApi {
    fn search(&self, term: &str) -> Result<Vec<Repo>, ApiError> {
        self.get_json(&search_url(&self.base_url, term))
    }

    fn details(&self, owner: &str, repo_name: &str) -> Result<RepoDetails, ApiError> {
        self.get_json(&details_url(&self.base_url, owner, repo_name))
    }
}
