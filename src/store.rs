//! Process-wide search state. Only the search view holds a `&mut`, so the
//! mutators are plain field replacements with no locking or validation.

use crate::pagination;
use crate::types::Repo;
use serde::{Deserialize, Serialize};

/// Handle for one in-flight request. Settling an outdated ticket is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub repos: Vec<Repo>,
    pub search_term: String,
    pub current_page: usize,
    pub loading: bool,
    /// Empty means no error.
    pub error: String,
    latest_request: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState {
            repos: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            loading: false,
            error: String::new(),
            latest_request: 0,
        }
    }
}

impl SearchState {
    pub fn set_repos(&mut self, repos: Vec<Repo>) {
        self.repos = repos;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = error.into();
    }

    /// Resets results, term, page and error. `loading` is left alone.
    pub fn clear_search(&mut self) {
        self.repos.clear();
        self.search_term.clear();
        self.current_page = 1;
        self.error.clear();
    }

    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Issues a fresh ticket, marks the store as loading and drops any
    /// error left over from the previous request.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.latest_request += 1;
        self.loading = true;
        self.error.clear();
        RequestTicket(self.latest_request)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest_request
    }

    pub fn page_info(&self) -> pagination::PageInfo {
        pagination::PageInfo::new(self.current_page, self.repos.len())
    }

    pub fn page_items(&self) -> &[Repo] {
        pagination::page_items(&self.repos, self.current_page)
    }

    /// The durable subset of the state, as selected by `everything`.
    pub fn snapshot(&self, everything: bool) -> PersistedSearch {
        if !everything {
            return PersistedSearch::default();
        }
        PersistedSearch {
            repos: Some(self.repos.clone()),
            search_term: Some(self.search_term.clone()),
            current_page: Some(self.current_page),
        }
    }

    /// Rebuilds state from a stored projection: stored fields over defaults,
    /// with the page pulled back into range.
    pub fn rehydrate(saved: PersistedSearch) -> Self {
        let mut state = SearchState::default();
        if let Some(repos) = saved.repos {
            state.repos = repos;
        }
        if let Some(term) = saved.search_term {
            state.search_term = term;
        }
        if let Some(page) = saved.current_page {
            state.current_page = page;
        }
        state.current_page = pagination::clamp_page(state.current_page, state.repos.len());
        state
    }
}

/// Stored projection of [`SearchState`]. Absent fields fall back to defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSearch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repos: Option<Vec<Repo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<usize>,
}
