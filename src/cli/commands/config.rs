use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::check_file;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Current configuration ({}):\n", path.display()));
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            check_config(cfg, path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor)?;
        }
    }

    Ok(())
}

fn check_config(cfg: &Config, path: &Path) -> AppResult<()> {
    if !path.exists() {
        warning(format!(
            "No configuration file at {}: defaults are in use.",
            path.display()
        ));
        return Ok(());
    }

    let report = check_file(path)?;
    for key in &report.missing {
        warning(format!("Missing field '{key}' (default used)"));
    }
    for key in &report.unknown {
        warning(format!("Unknown field '{key}' (ignored)"));
    }

    cfg.validate()?;

    if report.is_clean() {
        success(format!("Configuration OK: {}", path.display()));
    }
    Ok(())
}

fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
            return Ok(());
        }
        _ => warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            editor_to_use, default_editor
        )),
    }

    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using fallback '{}'",
                default_editor
            ));
            Ok(())
        }
        _ => {
            error(format!(
                "Failed to edit configuration file using fallback '{}'",
                default_editor
            ));
            Err(AppError::Config(format!(
                "no usable editor for {}",
                path.display()
            )))
        }
    }
}
