// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Decide whether the layout export may write `path`.
///
/// A new file is always fine, and so is `--force`. Otherwise the user is
/// asked on stdin; anything but y/yes keeps the old export.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("{} holds a previous export.", path.display()));
    print!("Replace it with this week's layout? [y/N]: ");
    io::stdout().flush()?;

    let mut reply = String::new();
    io::stdin().lock().read_line(&mut reply)?;

    match reply.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Replacing the previous export.");
            Ok(())
        }
        _ => Err(AppError::Export(format!(
            "kept existing {} (use --force to replace it)",
            path.display()
        ))),
    }
}
