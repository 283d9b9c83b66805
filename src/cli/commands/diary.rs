use std::fs;
use std::path::PathBuf;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grouper::{ReportRange, group_by_month};
use crate::errors::{AppError, AppResult};
use crate::report::{self, diary::render_diary};
use crate::store;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Diary {
        input,
        employee,
        start,
        end,
        file,
        force,
    } = cmd
    {
        let range = ReportRange::parse(start, end)?;
        let punches = store::load_punches(&expand_tilde(input))?;

        let mine = store::for_employee(&punches, employee);
        let identity = mine
            .first()
            .map(|p| p.employee.clone())
            .ok_or_else(|| AppError::UnknownEmployee(employee.clone()))?;

        let groups = group_by_month(&mine, &range);

        let out = match file {
            Some(f) => expand_tilde(f),
            None => PathBuf::from(report::pdf_filename(&identity.name)),
        };
        report::ensure_writable(&out, *force)?;

        info(format!("Exporting to PDF: {}", out.display()));
        let buffer = render_diary(&identity, &groups, &range)?;
        fs::write(&out, buffer)?;
        report::notify_export_success("PDF", &out);
    }
    Ok(())
}
