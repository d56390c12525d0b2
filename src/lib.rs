//! dayaxis library root.
//! Exposes the CLI parser, the high-level run() function and the layout
//! modules (day axis, sizing, snapping, drag & drop, week composer).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod render;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, conf_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, conf_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, conf_path),
        Commands::Position { .. } => cli::commands::position::handle(&cli.command, cfg),
        Commands::Layout { .. } => cli::commands::layout::handle(&cli.command, cfg, !cli.no_color),
        Commands::Grid { .. } => cli::commands::grid::handle(&cli.command, cfg, cli.no_color),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Sizing { .. } => cli::commands::sizing::handle(&cli.command, cfg),
        Commands::Slot { .. } => cli::commands::slot::handle(&cli.command, cfg),
        Commands::Drop { .. } => cli::commands::drop::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ resolve and load the config once
    let conf_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);

    // init writes the config, so it must not fail on a broken one
    let cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load(Some(&conf_path))?,
    };

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &conf_path)
}
