mod fs_utils;
mod json_csv;
mod model;

pub mod diary;
pub mod pdf;
pub mod xlsx;

pub use model::{FlatRow, build_flat_rows};

pub(crate) use fs_utils::ensure_writable;
pub(crate) use json_csv::{export_csv, export_json};

use crate::core::grouper::ReportRange;
use crate::ui::messages::success;
use crate::utils::tz;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export path.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Suggested timesheet filename, embedding the requested civil dates.
pub fn xlsx_filename(range: &ReportRange) -> String {
    format!(
        "Folha de Ponto de {} a {}.xlsx",
        tz::fmt_date_dashed(range.start),
        tz::fmt_date_dashed(range.end)
    )
}

/// Suggested diary filename, embedding the employee display name.
pub fn pdf_filename(employee_name: &str) -> String {
    format!("Folha de Ponto - {}.pdf", employee_name)
}
