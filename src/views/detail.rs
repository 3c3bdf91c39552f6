use crate::api::RepoApi;
use crate::types::RepoDetails;
use std::fmt;

/// One repository's page. State is local to the view and never persisted.
#[derive(Debug, Default)]
pub struct DetailView {
    pub owner: String,
    pub repo_name: String,
    pub details: Option<RepoDetails>,
    pub loading: bool,
    pub error: Option<String>,
    mounted: bool,
}

impl DetailView {
    pub fn new(owner: impl Into<String>, repo_name: impl Into<String>) -> Self {
        DetailView {
            owner: owner.into(),
            repo_name: repo_name.into(),
            ..Default::default()
        }
    }

    /// Fetches the details the first time the view is shown. Later calls
    /// keep whatever the first fetch produced.
    pub fn mount<A: RepoApi + ?Sized>(&mut self, api: &A) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.loading = true;

        match api.details(&self.owner, &self.repo_name) {
            Ok(details) => self.details = Some(details),
            Err(e) => {
                log::warn!("details for {}/{} failed: {}", self.owner, self.repo_name, e);
                self.error = Some(e.user_message().to_string());
            }
        }
        self.loading = false;
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.loading {
            writeln!(f, "Loading...")?;
        }
        if let Some(error) = &self.error {
            writeln!(f, "{}", error)?;
        }
        let Some(details) = &self.details else {
            return Ok(());
        };

        writeln!(f, "{}", details.name)?;
        if let Some(desc) = &details.description {
            writeln!(f, "  {}", desc)?;
        }
        writeln!(f)?;
        writeln!(f, "  Stars:       {}", details.stargazers_count)?;
        writeln!(f, "  Forks:       {}", details.forks_count)?;
        writeln!(f, "  Open issues: {}", details.open_issues_count)?;
        writeln!(
            f,
            "  Language:    {}",
            details.language.as_deref().unwrap_or("-")
        )?;
        if let Some(license) = details.license_name() {
            writeln!(f, "  License:     {}", license)?;
        }
        writeln!(f, "  GitHub:      {}", details.repos_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::error::ApiError;

    fn linux() -> RepoDetails {
        RepoDetails {
            full_name: "torvalds/linux".into(),
            name: "linux".into(),
            description: Some("Linux kernel source tree".into()),
            stargazers_count: 180_000,
            forks_count: 55_000,
            open_issues_count: 300,
            language: Some("C".into()),
            license: None,
            repos_url: "https://github.com/torvalds".into(),
        }
    }

    #[test]
    fn mount_fetches_and_renders() {
        let api = FakeApi::with_details(Ok(linux()));
        let mut view = DetailView::new("torvalds", "linux");
        view.mount(&api);

        assert_eq!(api.calls.borrow().as_slice(), ["details:torvalds/linux"]);
        assert!(!view.loading);
        assert!(view.error.is_none());
        let text = view.render();
        assert!(text.starts_with("linux\n"));
        assert!(text.contains("Stars:       180000"));
        assert!(text.contains("Language:    C"));
        assert!(text.contains("https://github.com/torvalds"));
    }

    #[test]
    fn not_found_shows_message_without_details() {
        let api = FakeApi::with_details(Err(ApiError::NotFound));
        let mut view = DetailView::new("torvalds", "linux");
        view.mount(&api);

        assert_eq!(view.error.as_deref(), Some("Repository not found"));
        assert!(view.details.is_none());
        assert!(!view.loading);
        assert_eq!(view.render(), "Repository not found\n");
    }

    #[test]
    fn rate_limit_and_other_failures() {
        let api = FakeApi::with_details(Err(ApiError::RateLimited));
        let mut view = DetailView::new("a", "b");
        view.mount(&api);
        assert_eq!(view.error.as_deref(), Some("Rate limit exceeded"));

        let api = FakeApi::with_details(Err(ApiError::Status(502)));
        let mut view = DetailView::new("a", "b");
        view.mount(&api);
        assert_eq!(view.error.as_deref(), Some("Something went wrong"));
    }

    #[test]
    fn mount_only_fetches_once() {
        let api = FakeApi::with_details(Ok(linux()));
        let mut view = DetailView::new("torvalds", "linux");
        view.mount(&api);
        view.mount(&api);
        assert_eq!(api.call_count(), 1);
        assert!(view.details.is_some());
    }
}
