use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Creates the config directory, writes the default configuration
/// (skipped with --test) and an empty events file if none exists.
pub fn handle(cli: &Cli, conf_path: &Path) -> AppResult<()> {
    info("Initializing dayaxis…");

    let conf = Config::init_all(Some(conf_path), cli.test)?;
    log::info!("initialized configuration at {}", conf.display());

    success("dayaxis initialization completed!");
    Ok(())
}
