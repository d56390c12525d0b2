// src/export/mod.rs

mod fs_utils;
mod model;

pub use model::PlacedEventExport;

use crate::core::layout::WeekLayout;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use clap::ValueEnum;
use fs_utils::ensure_writable;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Guess the format from the output file extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(AppError::InvalidExportFormat(other.to_string())),
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write every placed rectangle of `layout` to `file`.
    pub fn export(
        layout: &WeekLayout,
        format: Option<ExportFormat>,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let format = match format {
            Some(f) => f,
            None => ExportFormat::from_path(path)?,
        };

        ensure_writable(path, force)?;

        let rows = model::layout_rows(layout);
        if rows.is_empty() {
            warning(format!("No events in the week {}.", layout.range_text));
        }

        info(format!(
            "Exporting {} rectangles to {}: {}",
            rows.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        match format {
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Csv => export_csv(&rows, path)?,
        }

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        Ok(())
    }
}

/// Export JSON pretty-printed.
fn export_json(rows: &[PlacedEventExport], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)?;
    Ok(())
}

/// Export CSV (header from the serde field names).
fn export_csv(rows: &[PlacedEventExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    if rows.is_empty() {
        wtr.write_record([
            "id", "title", "date", "day", "top", "height", "left", "width", "color",
            "truncated", "continued",
        ])?;
    }

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
