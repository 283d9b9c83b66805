//! Punch sequencing: which event type comes next on an employee's day.

use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};
use crate::models::PunchType;

static DETAILED_SEQUENCE: [PunchType; 4] = [
    PunchType::In,
    PunchType::LunchStart,
    PunchType::LunchEnd,
    PunchType::Out,
];

static SIMPLE_SEQUENCE: [PunchType; 2] = [PunchType::In, PunchType::Out];

/// Daily punch sequence mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchMode {
    /// Entry, lunch out, lunch in, exit.
    Detailed,
    /// Entry and exit only.
    Simple,
}

impl PunchMode {
    pub fn from_detailed_flag(detailed: bool) -> Self {
        if detailed {
            PunchMode::Detailed
        } else {
            PunchMode::Simple
        }
    }

    pub fn sequence(self) -> &'static [PunchType] {
        match self {
            PunchMode::Detailed => &DETAILED_SEQUENCE,
            PunchMode::Simple => &SIMPLE_SEQUENCE,
        }
    }
}

/// Strictly forward state machine over the fixed daily sequence.
///
/// The state is just the number of punches already registered on the day;
/// once it reaches the sequence length the day is exhausted and further
/// registrations are rejected. There is no way back to an earlier state.
#[derive(Debug, Clone, Copy)]
pub struct Sequencer {
    mode: PunchMode,
}

impl Sequencer {
    pub fn new(mode: PunchMode) -> Self {
        Self { mode }
    }

    /// Decide the type of the next punch given how many were already
    /// registered today. `Err(DayExhausted)` is a domain rejection for the
    /// caller to display, not a system fault.
    pub fn next_type(&self, registered_today: usize, day: NaiveDate) -> AppResult<PunchType> {
        match self.mode.sequence().get(registered_today) {
            Some(kind) => Ok(*kind),
            None => Err(AppError::DayExhausted(day.format("%d/%m/%Y").to_string())),
        }
    }

    pub fn is_exhausted(&self, registered_today: usize) -> bool {
        registered_today >= self.mode.sequence().len()
    }
}
