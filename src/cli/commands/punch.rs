use chrono::{DateTime, Utc};

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sequencer::{PunchMode, Sequencer};
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, Punch};
use crate::store;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use crate::utils::tz;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        input,
        employee,
        name,
        at,
        simple,
    } = cmd
    {
        let path = expand_tilde(input);
        let punches = if path.exists() {
            store::load_punches(&path)?
        } else {
            Vec::new()
        };

        let at_ts: DateTime<Utc> = match at {
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map_err(|_| AppError::InvalidTimestamp(raw.clone()))?
                .with_timezone(&Utc),
            None => Utc::now(),
        };

        // Sequencer state: how many punches this employee already has on
        // the civil day of the new instant.
        let day = tz::civil_date(&at_ts);
        let registered_today = punches
            .iter()
            .filter(|p| p.employee.code == *employee && tz::civil_date(&p.timestamp) == day)
            .count();

        let mode = if *simple {
            PunchMode::Simple
        } else {
            PunchMode::from_detailed_flag(cfg.detailed)
        };
        let kind = Sequencer::new(mode).next_type(registered_today, day)?;

        let display_name = match name {
            Some(n) => n.clone(),
            None => punches
                .iter()
                .find(|p| p.employee.code == *employee)
                .map(|p| p.employee.name.clone())
                .ok_or_else(|| AppError::UnknownEmployee(employee.clone()))?,
        };

        let punch = Punch::new(
            Employee::new(employee.clone(), display_name),
            kind,
            at_ts,
            Some(cfg.source_label.clone()),
        );
        store::append_punch(&path, &punch)?;

        success(format!(
            "Registered {} ({}) for employee {} at {}",
            kind.as_str(),
            kind.label(),
            employee,
            tz::fmt_long(&at_ts)
        ));
    }
    Ok(())
}
