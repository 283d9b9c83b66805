//! Spreadsheet rendering: the grouped per-month timesheet and the flat
//! one-row-per-punch listing. Both return the finished workbook as an
//! in-memory buffer; writing it anywhere is the caller's business.

use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

use crate::core::grouper::MonthGroup;
use crate::errors::AppResult;
use crate::models::{Punch, PunchType};
use crate::report::model::{build_flat_rows, flat_headers, has_origin, row_values};
use crate::utils::minutes_to_hhmm;
use crate::utils::tz;

/// Fixed column widths of the grouped layout: Data, Entrada, Saída p/
/// Almoço, Retorno do Almoço, Saída, Total. These never vary per request.
const GROUPED_WIDTHS: [f64; 6] = [14.0, 12.0, 16.0, 20.0, 12.0, 16.0];

const GROUPED_HEADERS: [&str; 6] = [
    "Data",
    "Entrada",
    "Saída p/ Almoço",
    "Retorno do Almoço",
    "Saída",
    "Total",
];

/// Excel caps sheet names at 31 characters.
const SHEET_NAME_LIMIT: usize = 31;

pub(crate) fn sheet_title(group: &MonthGroup) -> String {
    group.title().chars().take(SHEET_NAME_LIMIT).collect()
}

/// Render the grouped layout: one sheet per month, one block per employee.
/// With no month groups at all, a single informational sheet is produced
/// instead.
pub fn render_grouped(groups: &[MonthGroup]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    if groups.is_empty() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Sem Registros")?;
        worksheet.write(0, 0, "Não há registros de ponto no período informado.")?;
        return Ok(workbook.save_to_buffer()?);
    }

    let bold = Format::new().set_bold();
    let bold_right = Format::new().set_bold().set_align(FormatAlign::Right);

    for group in groups {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_title(group))?;

        for (col, width) in GROUPED_WIDTHS.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width)?;
        }

        let mut row: u32 = 0;

        for block in &group.employees {
            worksheet.merge_range(
                row,
                0,
                row,
                5,
                &format!("Funcionário (Código): {}", block.employee.code),
                &bold,
            )?;
            row += 1;

            worksheet.merge_range(
                row,
                0,
                row,
                5,
                &format!("Funcionário (Nome): {}", block.employee.name),
                &bold,
            )?;
            row += 1;

            // blank row
            row += 1;

            for (col, header) in GROUPED_HEADERS.iter().enumerate() {
                worksheet.write_with_format(row, col as u16, *header, &bold)?;
            }
            row += 1;

            let mut total_minutes: i64 = 0;

            for day in &block.days {
                let worked = day.worked_minutes();
                total_minutes += worked;

                worksheet.write(row, 0, tz::fmt_civil_date(day.date))?;
                worksheet.write(row, 1, first_time_of(&day.punches, PunchType::In))?;
                worksheet.write(row, 2, first_time_of(&day.punches, PunchType::LunchStart))?;
                worksheet.write(row, 3, first_time_of(&day.punches, PunchType::LunchEnd))?;
                worksheet.write(row, 4, first_time_of(&day.punches, PunchType::Out))?;
                worksheet.write(row, 5, minutes_to_hhmm(worked))?;
                row += 1;
            }

            worksheet.write_with_format(
                row,
                5,
                format!("Total de Horas: {} hs", minutes_to_hhmm(total_minutes)),
                &bold_right,
            )?;
            row += 1;

            // blank row between employee blocks
            row += 1;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// `HH:MM` of the first punch of `kind` on the day, or empty when absent.
fn first_time_of(punches: &[Punch], kind: PunchType) -> String {
    punches
        .iter()
        .find(|p| p.kind == kind)
        .map(|p| tz::fmt_time_hm(&p.timestamp))
        .unwrap_or_default()
}

/// Render the flat layout: a single sheet with one row per punch, bold
/// frozen header, columns auto-sized to their content.
pub fn render_flat(punches: &[Punch]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Registros de Ponto")?;

    let with_origin = has_origin(punches);
    let headers = flat_headers(with_origin);
    let rows = build_flat_rows(punches);

    let header_format = Format::new().set_bold();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    for (index, flat) in rows.iter().enumerate() {
        let values = row_values(flat, with_origin);
        for (col, value) in values.iter().enumerate() {
            worksheet.write((index + 1) as u32, col as u16, value.as_str())?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    set_widths(worksheet, &col_widths)?;

    Ok(workbook.save_to_buffer()?)
}

fn set_widths(worksheet: &mut Worksheet, widths: &[usize]) -> AppResult<()> {
    for (col, width) in widths.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width as f64 + 2.0)?;
    }
    Ok(())
}
