use std::fs;
use std::path::PathBuf;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grouper::{ReportRange, group_by_month};
use crate::errors::AppResult;
use crate::models::Punch;
use crate::report::{self, ExportFormat, build_flat_rows, xlsx};
use crate::store;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        input,
        start,
        end,
        format,
        flat,
        file,
        force,
    } = cmd
    {
        let range = ReportRange::parse(start, end)?;
        let punches = store::load_punches(&expand_tilde(input))?;

        let out = output_path(file.as_deref(), &range, format);
        report::ensure_writable(&out, *force)?;

        let in_range: Vec<Punch> = punches
            .iter()
            .filter(|p| range.contains(&p.timestamp))
            .cloned()
            .collect();

        if in_range.is_empty() {
            warning("No punches found for the selected period.");
        }

        match format {
            ExportFormat::Xlsx => {
                info(format!("Exporting to XLSX: {}", out.display()));
                let buffer = if *flat {
                    xlsx::render_flat(&in_range)?
                } else {
                    let groups = group_by_month(&punches, &range);
                    xlsx::render_grouped(&groups)?
                };
                fs::write(&out, buffer)?;
                report::notify_export_success("XLSX", &out);
            }
            ExportFormat::Csv => {
                let rows = build_flat_rows(&in_range);
                report::export_csv(&rows, &out)?;
            }
            ExportFormat::Json => {
                let rows = build_flat_rows(&in_range);
                report::export_json(&rows, &out)?;
            }
        }
    }
    Ok(())
}

/// Explicit output path, or the suggested filename with the extension of
/// the chosen format.
fn output_path(file: Option<&str>, range: &ReportRange, format: &ExportFormat) -> PathBuf {
    match file {
        Some(f) => expand_tilde(f),
        None => {
            let mut path = PathBuf::from(report::xlsx_filename(range));
            path.set_extension(format.as_str());
            path
        }
    }
}
