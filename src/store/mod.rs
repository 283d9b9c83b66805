//! Punch store collaborator: a flat file (JSON array or CSV) holding the
//! complete punch snapshot the core consumes.
//!
//! The reporting core never touches this module; commands load the snapshot
//! here and hand the in-memory collection over.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::{Employee, Punch, PunchType};

/// Wire shape of one punch row, shared by the JSON and CSV stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRecord {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PunchType,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub source: Option<String>,
}

impl PunchRecord {
    fn from_punch(punch: &Punch) -> Self {
        Self {
            code: punch.employee.code.clone(),
            name: punch.employee.name.clone(),
            kind: punch.kind,
            timestamp: punch.timestamp,
            source: punch.source.clone(),
        }
    }

    fn into_punch(self) -> Punch {
        Punch::new(
            Employee::new(self.code, self.name),
            self.kind,
            self.timestamp,
            self.source,
        )
    }
}

enum StoreFormat {
    Json,
    Csv,
}

fn detect_format(path: &Path) -> AppResult<StoreFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(StoreFormat::Json),
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(StoreFormat::Csv),
        _ => Err(AppError::UnsupportedStore(path.display().to_string())),
    }
}

/// Load the full punch snapshot from `path`.
pub fn load_punches(path: &Path) -> AppResult<Vec<Punch>> {
    let records = load_records(path)?;
    Ok(records.into_iter().map(PunchRecord::into_punch).collect())
}

/// Append one punch and rewrite the snapshot in place.
pub fn append_punch(path: &Path, punch: &Punch) -> AppResult<()> {
    let mut records = if path.exists() {
        load_records(path)?
    } else {
        Vec::new()
    };
    records.push(PunchRecord::from_punch(punch));
    save_records(path, &records)
}

/// Restrict a snapshot to one employee by code.
pub fn for_employee(punches: &[Punch], code: &str) -> Vec<Punch> {
    punches
        .iter()
        .filter(|p| p.employee.code == code)
        .cloned()
        .collect()
}

fn load_records(path: &Path) -> AppResult<Vec<PunchRecord>> {
    match detect_format(path)? {
        StoreFormat::Json => {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        StoreFormat::Csv => {
            let mut reader = csv::Reader::from_path(path)?;
            let mut records = Vec::new();
            for row in reader.deserialize() {
                records.push(row?);
            }
            Ok(records)
        }
    }
}

fn save_records(path: &Path, records: &[PunchRecord]) -> AppResult<()> {
    match detect_format(path)? {
        StoreFormat::Json => {
            let json = serde_json::to_string_pretty(records)?;
            fs::write(path, json)?;
        }
        StoreFormat::Csv => {
            let mut writer = csv::Writer::from_path(path)?;
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
