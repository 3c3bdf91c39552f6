use crate::api::RepoApi;
use crate::error::{ApiError, MSG_EMPTY_TERM};
use crate::pagination::{self, PageInfo};
use crate::store::{RequestTicket, SearchState};
use crate::types::Repo;
use serde::Serialize;
use std::fmt;

/// Search box, result list and pager over a [`SearchState`].
pub struct SearchView<A> {
    api: A,
    state: SearchState,
}

/// JSON shape of one rendered page.
#[derive(Debug, Serialize)]
pub struct SearchPage<'a> {
    pub search_term: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
    pub page: PageInfo,
    pub items: &'a [Repo],
}

impl<A: RepoApi> SearchView<A> {
    pub fn new(api: A, state: SearchState) -> Self {
        SearchView { api, state }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn into_state(self) -> SearchState {
        self.state
    }

    /// Runs a search for `term`. Blank terms never reach the network.
    pub fn submit_search(&mut self, term: &str) {
        self.state.set_search_term(term);

        if term.trim().is_empty() {
            self.state.set_error(MSG_EMPTY_TERM);
            return;
        }

        let ticket = self.state.begin_request();
        self.state.reset_page();
        let result = self.api.search(term);
        self.settle_search(ticket, result);
    }

    /// Applies a finished search. Replies to superseded requests are dropped.
    pub fn settle_search(&mut self, ticket: RequestTicket, result: Result<Vec<Repo>, ApiError>) {
        if !self.state.is_current(ticket) {
            log::debug!("discarding reply to superseded search request");
            return;
        }
        match result {
            Ok(repos) => {
                log::info!("search {:?} returned {} repos", self.state.search_term, repos.len());
                self.state.set_repos(repos);
            }
            Err(e) => {
                log::warn!("search {:?} failed: {}", self.state.search_term, e);
                self.state.set_error(e.user_message());
            }
        }
        self.state.set_loading(false);
    }

    /// Live edit of the search box. Emptying it wipes the whole search.
    pub fn change_search_term(&mut self, text: &str) {
        self.state.set_search_term(text);
        if text.trim().is_empty() {
            self.state.clear_search();
        }
    }

    pub fn go_to_previous_page(&mut self) {
        let page = pagination::previous_page(self.state.current_page);
        self.state.set_current_page(page);
    }

    pub fn go_to_next_page(&mut self) {
        let info = self.state.page_info();
        if !info.has_next {
            return;
        }
        let page = pagination::next_page(self.state.current_page, self.state.repos.len());
        self.state.set_current_page(page);
    }

    /// Item `k` (1-based) of the page currently shown.
    pub fn item_on_page(&self, k: usize) -> Option<&Repo> {
        k.checked_sub(1).and_then(|i| self.state.page_items().get(i))
    }

    pub fn page(&self) -> SearchPage<'_> {
        SearchPage {
            search_term: &self.state.search_term,
            error: Some(self.state.error.as_str()).filter(|e| !e.is_empty()),
            page: self.state.page_info(),
            items: self.state.page_items(),
        }
    }

    pub fn render(&self) -> String {
        render_search(&self.state)
    }
}

pub fn render_search(state: &SearchState) -> String {
    SearchScreen(state).to_string()
}

/// Text rendering of the search screen.
pub struct SearchScreen<'a>(pub &'a SearchState);

impl fmt::Display for SearchScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        if state.loading {
            writeln!(f, "Loading...")?;
        }
        if state.has_error() {
            writeln!(f, "{}", state.error)?;
        }

        let info = state.page_info();
        for (offset, repo) in state.page_items().iter().enumerate() {
            let name = repo.repo_name.as_deref().unwrap_or(&repo.full_name);
            writeln!(f, "  {}. {}", info.first_shown + offset, name)?;
            if let Some(owner) = &repo.owner {
                writeln!(f, "     {}", owner)?;
            }
            if let Some(desc) = &repo.description {
                writeln!(f, "     {}", desc)?;
            }
            let watchers = repo
                .watchers_count
                .map(|w| w.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(f, "     ⭐ {}  👁 {}", repo.stargazers_count, watchers)?;
            let link = repo.detail_path().unwrap_or_else(|| repo.html_url.clone());
            writeln!(f, "     {}", link)?;
            writeln!(f)?;
        }

        if !state.repos.is_empty() {
            let prev = if info.has_previous { "<" } else { " " };
            let next = if info.has_next { ">" } else { " " };
            writeln!(
                f,
                "{}   {} {} {}",
                info.range_label(),
                prev,
                info.page_label(),
                next
            )?;
        }
        Ok(())
    }
}
