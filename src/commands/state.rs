use super::Context;
use crate::config::{normalize_base_url, PersistPolicy, RepoSearchConfig};
use crate::error::AppError;

pub fn state_command(ctx: &Context, clear: bool) -> Result<i32, AppError> {
    if clear {
        if ctx.storage.remove_entry()? {
            println!("✓ Cleared saved search state");
        } else {
            println!("Nothing saved.");
        }
        return Ok(0);
    }

    println!("Store:   {}", ctx.storage.path().display());
    println!("Persist: {:?}", ctx.config.persist);
    match ctx.storage.load_entry()? {
        Some(entry) => {
            println!("Saved:   {}", entry.saved_at.to_rfc3339());
            println!("{}", serde_json::to_string_pretty(&entry.state)?);
        }
        None => println!("Nothing saved."),
    }
    Ok(0)
}

pub fn config_command(
    mut config: RepoSearchConfig,
    set_base_url: Option<String>,
    persist: Option<PersistPolicy>,
) -> Result<i32, AppError> {
    if set_base_url.is_none() && persist.is_none() {
        println!("Config:   {}", RepoSearchConfig::config_path()?.display());
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(0);
    }

    if let Some(url) = set_base_url {
        config.base_url = Some(normalize_base_url(&url)?);
    }
    if let Some(persist) = persist {
        config.persist = persist;
    }
    let path = config.save()?;
    println!("✓ Config saved to {}", path.display());
    Ok(0)
}
