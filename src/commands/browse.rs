use super::Context;
use crate::api::RepoApi;
use crate::error::AppError;
use crate::router::{self, Route};
use crate::store::SearchState;
use crate::views::{DetailView, SearchView};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Type a search term and press enter.
  :n / :next        next page
  :p / :prev        previous page
  :o K / :open K    open result K of the current page
  /repos/OWNER/NAME open a repository by path
  :c / :clear       clear the search
  :q / :quit        leave
An empty line clears the search as well.";

#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Term(&'a str),
    Next,
    Previous,
    Open(usize),
    Path(&'a str),
    Clear,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Clear;
    }
    if trimmed.starts_with('/') {
        return Input::Path(trimmed);
    }
    let Some(command) = trimmed.strip_prefix(':') else {
        return Input::Term(line);
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("n" | "next"), None) => Input::Next,
        (Some("p" | "prev"), None) => Input::Previous,
        (Some("c" | "clear"), None) => Input::Clear,
        (Some("h" | "help"), None) => Input::Help,
        (Some("q" | "quit"), None) => Input::Quit,
        (Some("o" | "open"), Some(k)) => match k.parse() {
            Ok(k) => Input::Open(k),
            Err(_) => Input::Unknown(trimmed),
        },
        _ => Input::Unknown(trimmed),
    }
}

pub fn browse(ctx: &Context) -> Result<i32, AppError> {
    let api = ctx.api()?;
    let state = ctx.storage.hydrate()?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    let state = run_session(&api, state, stdin.lock(), stdout.lock())?;
    ctx.storage.persist(&state, ctx.config.persist)?;
    Ok(0)
}

/// Drives the search and detail views from line-oriented input until EOF
/// or `:q`, and hands back the final search state.
pub fn run_session<A, R, W>(api: &A, state: SearchState, input: R, mut out: W) -> io::Result<SearchState>
where
    A: RepoApi,
    R: BufRead,
    W: Write,
{
    let mut view = SearchView::new(api, state);
    writeln!(out, "GitHub Repo Search (:h for help)")?;
    if !view.state().repos.is_empty() {
        write!(out, "{}", view.render())?;
    }

    for line in input.lines() {
        let line = line?;
        match parse_input(&line) {
            Input::Term(term) => {
                view.change_search_term(term);
                view.submit_search(term);
                write!(out, "{}", view.render())?;
            }
            Input::Clear => {
                view.change_search_term("");
                writeln!(out, "Cleared.")?;
            }
            Input::Next => {
                view.go_to_next_page();
                write!(out, "{}", view.render())?;
            }
            Input::Previous => {
                view.go_to_previous_page();
                write!(out, "{}", view.render())?;
            }
            Input::Open(k) => match view.item_on_page(k) {
                Some(repo) => match (&repo.owner, &repo.repo_name) {
                    (Some(owner), Some(name)) => {
                        let mut detail = DetailView::new(owner.as_str(), name.as_str());
                        detail.mount(api);
                        write!(out, "{}", detail.render())?;
                    }
                    _ => writeln!(out, "{} has no owner/name to open", repo.full_name)?,
                },
                None => writeln!(out, "No result {} on this page", k)?,
            },
            Input::Path(path) => match router::parse_route(path) {
                Ok(Route::Search) => write!(out, "{}", view.render())?,
                Ok(Route::Detail { owner, repo_name }) => {
                    let mut detail = DetailView::new(owner, repo_name);
                    detail.mount(api);
                    write!(out, "{}", detail.render())?;
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            Input::Help => writeln!(out, "{}", HELP)?,
            Input::Quit => break,
            Input::Unknown(text) => writeln!(out, "Unknown command {:?} (:h for help)", text)?,
        }
    }

    Ok(view.into_state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::error::ApiError;
    use crate::types::{sample_repos, RepoDetails};
    use std::io::Cursor;

    fn run(api: &FakeApi, script: &str) -> (SearchState, String) {
        let mut out = Vec::new();
        let state = run_session(api, SearchState::default(), Cursor::new(script), &mut out).unwrap();
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_inputs() {
        assert_eq!(parse_input("octocat"), Input::Term("octocat"));
        assert_eq!(parse_input("  "), Input::Clear);
        assert_eq!(parse_input(":n"), Input::Next);
        assert_eq!(parse_input(":prev"), Input::Previous);
        assert_eq!(parse_input(":o 3"), Input::Open(3));
        assert_eq!(parse_input(":open x"), Input::Unknown(":open x"));
        assert_eq!(parse_input("/repos/a/b"), Input::Path("/repos/a/b"));
        assert_eq!(parse_input(":q"), Input::Quit);
    }

    #[test]
    fn search_then_next_page() {
        let api = FakeApi::with_search(Ok(sample_repos(12)));
        let (state, out) = run(&api, "octocat\n:n\n");
        assert!(out.contains("Page 1 of 3"));
        assert!(out.contains("Page 2 of 3"));
        assert!(out.contains("Showing 6-10 of 12 results"));
        assert_eq!(state.current_page, 2);
        assert_eq!(state.search_term, "octocat");
    }

    #[test]
    fn empty_line_clears_search() {
        let api = FakeApi::with_search(Ok(sample_repos(12)));
        let (state, _) = run(&api, "octocat\n:n\n\n");
        assert!(state.repos.is_empty());
        assert_eq!(state.current_page, 1);
        assert_eq!(state.search_term, "");
    }

    #[test]
    fn open_result_fetches_details() {
        let api = FakeApi::with_search(Ok(sample_repos(7)));
        api.detail_replies.borrow_mut().push_back(Ok(RepoDetails {
            full_name: "owner6/repo6".into(),
            name: "repo6".into(),
            description: None,
            stargazers_count: 60,
            forks_count: 6,
            open_issues_count: 0,
            language: Some("Rust".into()),
            license: None,
            repos_url: "https://github.com/owner6".into(),
        }));

        let (_, out) = run(&api, "x\n:n\n:o 1\n:q\nignored\n");
        assert!(out.contains("Language:    Rust"));
        assert_eq!(
            api.calls.borrow().as_slice(),
            ["search:x", "details:owner6/repo6"]
        );
    }

    #[test]
    fn path_with_not_found() {
        let api = FakeApi::with_details(Err(ApiError::NotFound));
        let (_, out) = run(&api, "/repos/torvalds/linux\n");
        assert!(out.contains("Repository not found"));
    }

    #[test]
    fn rate_limited_search_shows_message() {
        let api = FakeApi::with_search(Err(ApiError::RateLimited));
        let (state, out) = run(&api, "octocat\n");
        assert!(out.contains("Rate limit exceeded"));
        assert!(!state.loading);
    }
}
