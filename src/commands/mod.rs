pub mod browse;
pub mod misc;
pub mod search;
pub mod show;
pub mod state;

pub use browse::browse;
pub use misc::generate_completions;
pub use search::{search_command, step_command, Step};
pub use show::{open_command, show_command};
pub use state::{config_command, state_command};

use crate::api::HttpRepoApi;
use crate::config::{RepoSearchConfig, BASE_URL_ENV};
use crate::error::AppError;
use crate::storage::Storage;

/// Exit status when a view finished with an error message on screen.
pub const EXIT_VIEW_ERROR: i32 = 1;

/// What every command gets handed by `main`.
pub struct Context {
    pub config: RepoSearchConfig,
    pub base_url_flag: Option<String>,
    pub storage: Storage,
}

impl Context {
    /// Strict load for commands that talk to the gateway.
    pub fn load(base_url_flag: Option<String>) -> Result<Self, AppError> {
        Ok(Context {
            config: RepoSearchConfig::load()?,
            base_url_flag,
            storage: Storage::open_default()?,
        })
    }

    pub fn api(&self) -> Result<HttpRepoApi, AppError> {
        let env = std::env::var(BASE_URL_ENV).ok();
        let base_url = self
            .config
            .resolve_base_url(self.base_url_flag.as_deref(), env.as_deref())?;
        log::debug!("using gateway {}", base_url);
        HttpRepoApi::new(base_url, self.config.user_agent.as_deref()).map_err(AppError::Client)
    }
}
