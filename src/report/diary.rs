//! The single-employee punch diary: a paged document with one section per
//! month and every punch rendered as a long-form line.

use crate::core::grouper::{MonthGroup, ReportRange};
use crate::errors::AppResult;
use crate::models::Employee;
use crate::report::pdf::DocWriter;
use crate::utils::tz;

/// Render the diary document for one employee over `range`.
///
/// `groups` must come from the grouper already filtered to this employee.
/// Formatting here is the long form (`DD/MM/YYYY, HH:MM:SS` plus the
/// uppercase label); the tabular report's short forms are a separate
/// policy and must not leak in.
pub fn render_diary(
    employee: &Employee,
    groups: &[MonthGroup],
    range: &ReportRange,
) -> AppResult<Vec<u8>> {
    let title = format!("Folha de Ponto de {}", employee.name);

    let mut doc = DocWriter::new();
    doc.set_metadata(&title, &employee.name);

    doc.title(&title);
    doc.centered(
        &format!(
            "Período: {} até {}",
            tz::fmt_date_dashed(range.start),
            tz::fmt_date_dashed(range.end)
        ),
        12.0,
    );

    for group in groups {
        doc.heading(&format!("Mês: {}", tz::month_name(group.month)));

        for block in &group.employees {
            for day in &block.days {
                for punch in &day.punches {
                    doc.line(&format!(
                        "• {} — {}",
                        tz::fmt_long(&punch.timestamp),
                        punch.kind.long_label()
                    ));
                }
            }
        }
    }

    Ok(doc.save_to_buffer())
}
