use super::{Context, EXIT_VIEW_ERROR};
use crate::error::AppError;
use crate::router::{self, Route};
use crate::views::DetailView;

pub fn show_command(ctx: &Context, slug: &str, json: bool) -> Result<i32, AppError> {
    let route = router::parse_slug(slug)?;
    render_route(ctx, &route, json)
}

pub fn open_command(ctx: &Context, path: &str, json: bool) -> Result<i32, AppError> {
    let route = router::parse_route(path)?;
    render_route(ctx, &route, json)
}

fn render_route(ctx: &Context, route: &Route, json: bool) -> Result<i32, AppError> {
    let Route::Detail { owner, repo_name } = route else {
        println!("Use `reposearch search <term>` or `reposearch browse` for the search view.");
        return Ok(0);
    };

    log::info!("opening {}", route.path());
    let api = ctx.api()?;
    let mut view = DetailView::new(owner.as_str(), repo_name.as_str());
    view.mount(&api);

    if json {
        match (&view.details, &view.error) {
            (Some(details), _) => println!("{}", serde_json::to_string_pretty(details)?),
            (None, error) => println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "error": error }))?
            ),
        }
    } else {
        print!("{}", view.render());
    }

    Ok(if view.error.is_some() { EXIT_VIEW_ERROR } else { 0 })
}
