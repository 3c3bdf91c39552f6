use thiserror::Error;

pub const MSG_EMPTY_TERM: &str = "Please enter a search term";
pub const MSG_RATE_LIMITED: &str = "Rate limit exceeded";
pub const MSG_NOT_FOUND: &str = "Repository not found";
pub const MSG_GENERIC: &str = "Something went wrong";

/// Failure of a single call to the repo-search gateway.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("gateway rate limit hit (HTTP 429)")]
    RateLimited,

    #[error("gateway returned HTTP 404")]
    NotFound,

    #[error("gateway returned HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode gateway response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Maps a non-200 status onto the error taxonomy. `None` for 200.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200 => None,
            429 => Some(ApiError::RateLimited),
            404 => Some(ApiError::NotFound),
            other => Some(ApiError::Status(other)),
        }
    }

    /// Text shown to the user in place of results.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::RateLimited => MSG_RATE_LIMITED,
            ApiError::NotFound => MSG_NOT_FOUND,
            ApiError::Status(_) | ApiError::Transport(_) | ApiError::Decode(_) => MSG_GENERIC,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no API base URL configured; pass --base-url, set REPOSEARCH_BASE_URL or add base_url to {0}")]
    MissingBaseUrl(String),

    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("can't locate a config directory on this system")]
    NoConfigDir,

    #[error("can't read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("can't locate a data directory on this system")]
    NoDataDir,

    #[error("can't access store file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed store file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no view for path {0:?}")]
    UnknownRoute(String),

    #[error("expected <owner>/<repo_name>, got {0:?}")]
    BadSlug(String),
}

/// Everything that can abort a command before a view gets to render.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("can't build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("can't serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_taxonomy() {
        assert!(ApiError::from_status(200).is_none());
        assert!(matches!(ApiError::from_status(429), Some(ApiError::RateLimited)));
        assert!(matches!(ApiError::from_status(404), Some(ApiError::NotFound)));
        assert!(matches!(ApiError::from_status(500), Some(ApiError::Status(500))));
        assert!(matches!(ApiError::from_status(201), Some(ApiError::Status(201))));
    }

    #[test]
    fn user_messages_are_flattened() {
        assert_eq!(ApiError::RateLimited.user_message(), "Rate limit exceeded");
        assert_eq!(ApiError::NotFound.user_message(), "Repository not found");
        assert_eq!(ApiError::Status(502).user_message(), "Something went wrong");
        let decode = serde_json::from_str::<u8>("nope").unwrap_err();
        assert_eq!(ApiError::Decode(decode).user_message(), "Something went wrong");
    }
}
