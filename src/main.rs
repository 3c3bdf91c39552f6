mod api;
mod commands;
mod config;
mod error;
mod pagination;
mod router;
mod storage;
mod store;
mod types;
mod views;

use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::Shell;
use commands::{Context, Step};
use config::RepoSearchConfig;
use error::AppError;
use storage::Storage;

#[derive(Parser)]
#[command(name = "reposearch")]
#[command(about = "Search GitHub repositories, page through the hits, open one", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Root URL of the repo-search API (overrides REPOSEARCH_BASE_URL and the config file)
    #[arg(long, global = true, value_hint = ValueHint::Url)]
    base_url: Option<String>,

    /// More log output (-v info, -vv debug). RUST_LOG wins when set.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search repositories by keyword and show one page of results
    #[command(short_flag = 's', visible_alias = "find")]
    Search {
        /// Search term
        term: String,
        /// Page to show (clamped to the last page)
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the next page of the saved results
    Next {
        #[arg(long)]
        json: bool,
    },
    /// Show the previous page of the saved results
    Prev {
        #[arg(long)]
        json: bool,
    },
    /// Show one repository's details
    #[command(short_flag = 'd', visible_alias = "details")]
    Show {
        /// Repository as OWNER/NAME (e.g. torvalds/linux)
        repo: String,
        #[arg(long)]
        json: bool,
    },
    /// Open a route path such as /repos/torvalds/linux
    Open {
        path: String,
        #[arg(long)]
        json: bool,
    },
    /// Interactive search session on stdin
    #[command(short_flag = 'b')]
    Browse,
    /// Show or edit the config file
    Config {
        /// Store this gateway root in the config file
        #[arg(long = "set-base-url", value_hint = ValueHint::Url)]
        set_base_url: Option<String>,
        /// What survives between sessions
        #[arg(long, value_enum)]
        persist: Option<config::PersistPolicy>,
    },
    /// Print or clear the saved search state
    State {
        /// Remove the saved entry
        #[arg(long)]
        clear: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logger(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<i32, AppError> {
    let Some(command) = cli.command else {
        let mut cmd = Cli::command();
        cmd.print_help()?;
        println!();
        return Ok(0);
    };

    let base_url = cli.base_url;
    match command {
        Commands::Search { term, page, json } => {
            commands::search_command(&Context::load(base_url)?, &term, page, json)
        }
        Commands::Next { json } => commands::step_command(&Context::load(base_url)?, Step::Next, json),
        Commands::Prev { json } => {
            commands::step_command(&Context::load(base_url)?, Step::Previous, json)
        }
        Commands::Show { repo, json } => commands::show_command(&Context::load(base_url)?, &repo, json),
        Commands::Open { path, json } => commands::open_command(&Context::load(base_url)?, &path, json),
        Commands::Browse => commands::browse(&Context::load(base_url)?),
        Commands::Config { set_base_url, persist } => {
            commands::config_command(RepoSearchConfig::load_or_default(), set_base_url, persist)
        }
        Commands::State { clear } => {
            let ctx = Context {
                config: RepoSearchConfig::load_or_default(),
                base_url_flag: base_url,
                storage: Storage::open_default()?,
            };
            commands::state_command(&ctx, clear)
        }
        Commands::Completions { shell } => {
            commands::generate_completions(shell);
            Ok(0)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("Error: {}", e);
            2
        }
    };
    std::process::exit(code);
}
