use super::{Context, EXIT_VIEW_ERROR};
use crate::api::RepoApi;
use crate::error::{ApiError, AppError};
use crate::types::{Repo, RepoDetails};
use crate::views::SearchView;

pub fn search_command(ctx: &Context, term: &str, page: usize, json: bool) -> Result<i32, AppError> {
    let api = ctx.api()?;
    let state = ctx.storage.hydrate()?;
    let mut view = SearchView::new(api, state);

    view.submit_search(term);
    while view.state().current_page < page && view.page().page.has_next {
        view.go_to_next_page();
    }

    print_page(&view, json)?;
    let failed = view.state().has_error();
    ctx.storage.persist(view.state(), ctx.config.persist)?;
    Ok(if failed { EXIT_VIEW_ERROR } else { 0 })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

/// Moves through the results saved by the previous session. Needs
/// `"persist": "everything"` to have anything to show.
pub fn step_command(ctx: &Context, step: Step, json: bool) -> Result<i32, AppError> {
    let state = ctx.storage.hydrate()?;
    if state.repos.is_empty() {
        println!("No saved results. Run a search first (and set \"persist\": \"everything\" to keep them).");
        return Ok(0);
    }

    let mut view = SearchView::new(NoNetwork, state);
    match step {
        Step::Next => view.go_to_next_page(),
        Step::Previous => view.go_to_previous_page(),
    }

    print_page(&view, json)?;
    ctx.storage.persist(view.state(), ctx.config.persist)?;
    Ok(0)
}

fn print_page<A: RepoApi>(view: &SearchView<A>, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&view.page())?);
    } else {
        print!("{}", view.render());
    }
    Ok(())
}

/// Stand-in gateway for commands that only page through stored results.
struct NoNetwork;

impl RepoApi for NoNetwork {
    fn search(&self, _term: &str) -> Result<Vec<Repo>, ApiError> {
        Err(ApiError::Status(0))
    }

    fn details(&self, _owner: &str, _repo_name: &str) -> Result<RepoDetails, ApiError> {
        Err(ApiError::Status(0))
    }
}
