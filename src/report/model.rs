use serde::Serialize;

use crate::models::Punch;
use crate::utils::collation_key;
use crate::utils::tz;

/// Flat one-row-per-punch shape used by the flat spreadsheet layout and the
/// CSV/JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct FlatRow {
    pub codigo: String,
    pub funcionario: String,
    pub data: String,
    pub hora: String,
    pub tipo: String,
    pub origem: Option<String>,
}

/// Headers for the flat layouts, with the origin column only when the
/// snapshot carries it.
pub(crate) fn flat_headers(with_origin: bool) -> Vec<&'static str> {
    let mut headers = vec!["Código", "Funcionário", "Data", "Hora", "Tipo"];
    if with_origin {
        headers.push("Origem");
    }
    headers
}

pub(crate) fn row_values(row: &FlatRow, with_origin: bool) -> Vec<String> {
    let mut values = vec![
        row.codigo.clone(),
        row.funcionario.clone(),
        row.data.clone(),
        row.hora.clone(),
        row.tipo.clone(),
    ];
    if with_origin {
        values.push(row.origem.clone().unwrap_or_default());
    }
    values
}

pub(crate) fn has_origin(punches: &[Punch]) -> bool {
    punches.iter().any(|p| p.source.is_some())
}

/// Build the flat rows: employee name (collation order), then code, then
/// timestamp ascending.
pub fn build_flat_rows(punches: &[Punch]) -> Vec<FlatRow> {
    let mut sorted: Vec<&Punch> = punches.iter().collect();
    sorted.sort_by_key(|p| {
        (
            collation_key(&p.employee.name),
            p.employee.code.clone(),
            p.timestamp,
        )
    });

    sorted
        .into_iter()
        .map(|p| FlatRow {
            codigo: p.employee.code.clone(),
            funcionario: p.employee.name.clone(),
            data: tz::fmt_date(&p.timestamp),
            hora: tz::fmt_time_hms(&p.timestamp),
            tipo: p.kind.label().to_string(),
            origem: p.source.clone(),
        })
        .collect()
}
