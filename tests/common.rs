#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use ponto::models::{Employee, Punch, PunchType};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ponto() -> Command {
    cargo_bin_cmd!("ponto")
}

/// Create a unique temp file path and remove any leftover from prior runs
pub fn temp_file(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ponto.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Build an absolute instant from wall-clock components in the report
/// timezone (UTC−3).
pub fn brt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    FixedOffset::west_opt(3 * 3600)
        .unwrap()
        .with_ymd_and_hms(y, mo, d, h, mi, 0)
        .unwrap()
        .with_timezone(&Utc)
}

pub fn punch(code: &str, name: &str, kind: PunchType, ts: DateTime<Utc>) -> Punch {
    Punch::new(Employee::new(code, name), kind, ts, None)
}

/// Write a JSON punch snapshot the CLI can consume.
pub fn write_snapshot_json(path: &str, punches: &[Punch]) {
    let rows: Vec<serde_json::Value> = punches
        .iter()
        .map(|p| {
            serde_json::json!({
                "code": p.employee.code,
                "name": p.employee.name,
                "type": p.kind.as_str(),
                "timestamp": p.timestamp.to_rfc3339(),
            })
        })
        .collect();
    fs::write(path, serde_json::to_string_pretty(&rows).unwrap()).unwrap();
}
