use crate::error::RouteError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Search,
    Detail { owner: String, repo_name: String },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Search => "/".to_string(),
            Route::Detail { owner, repo_name } => format!("/repos/{}/{}", owner, repo_name),
        }
    }
}

/// `/` → search, `/repos/{owner}/{repo_name}` → detail.
pub fn parse_route(path: &str) -> Result<Route, RouteError> {
    let trimmed = path.trim();
    let segments: Vec<&str> = trimmed
        .trim_start_matches('/')
        .trim_end_matches('/')
        .split('/')
        .collect();

    match segments.as_slice() {
        [""] => Ok(Route::Search),
        ["repos", owner, repo_name] if !owner.is_empty() && !repo_name.is_empty() => {
            Ok(Route::Detail {
                owner: owner.to_string(),
                repo_name: repo_name.to_string(),
            })
        }
        _ => Err(RouteError::UnknownRoute(trimmed.to_string())),
    }
}

/// Parses the `owner/repo_name` shorthand accepted by `show`.
pub fn parse_slug(slug: &str) -> Result<Route, RouteError> {
    match slug.trim().trim_end_matches(".git").split_once('/') {
        Some((owner, repo_name))
            if !owner.is_empty() && !repo_name.is_empty() && !repo_name.contains('/') =>
        {
            Ok(Route::Detail {
                owner: owner.to_string(),
                repo_name: repo_name.to_string(),
            })
        }
        _ => Err(RouteError::BadSlug(slug.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(owner: &str, repo_name: &str) -> Route {
        Route::Detail {
            owner: owner.into(),
            repo_name: repo_name.into(),
        }
    }

    #[test]
    fn root_is_search() {
        assert_eq!(parse_route("/"), Ok(Route::Search));
        assert_eq!(parse_route(""), Ok(Route::Search));
    }

    #[test]
    fn detail_routes() {
        assert_eq!(parse_route("/repos/torvalds/linux"), Ok(detail("torvalds", "linux")));
        assert_eq!(parse_route("/repos/torvalds/linux/"), Ok(detail("torvalds", "linux")));
        assert_eq!(detail("torvalds", "linux").path(), "/repos/torvalds/linux");
    }

    #[test]
    fn unknown_routes() {
        assert!(parse_route("/repos/torvalds").is_err());
        assert!(parse_route("/repos//linux").is_err());
        assert!(parse_route("/users/torvalds").is_err());
        assert!(parse_route("/repos/a/b/c").is_err());
    }

    #[test]
    fn slugs() {
        assert_eq!(parse_slug("rust-lang/rust"), Ok(detail("rust-lang", "rust")));
        assert_eq!(parse_slug("rust-lang/rust.git"), Ok(detail("rust-lang", "rust")));
        assert!(parse_slug("rust").is_err());
        assert!(parse_slug("a/b/c").is_err());
        assert!(parse_slug("/rust").is_err());
    }
}
