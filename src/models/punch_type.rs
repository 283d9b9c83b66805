use serde::{Deserialize, Serialize};
use std::fmt;

/// The four recognized clock events of a working day.
///
/// The declaration order is also the canonical display order used to break
/// timestamp ties when sorting a day's punches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PunchType {
    In,
    LunchStart,
    LunchEnd,
    Out,
}

impl PunchType {
    /// Canonical ordering: IN < LUNCH_START < LUNCH_END < OUT.
    pub fn display_order(self) -> u8 {
        match self {
            PunchType::In => 0,
            PunchType::LunchStart => 1,
            PunchType::LunchEnd => 2,
            PunchType::Out => 3,
        }
    }

    /// Wire name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            PunchType::In => "IN",
            PunchType::LunchStart => "LUNCH_START",
            PunchType::LunchEnd => "LUNCH_END",
            PunchType::Out => "OUT",
        }
    }

    /// Short pt-BR label used in the tabular report.
    pub fn label(self) -> &'static str {
        match self {
            PunchType::In => "Entrada",
            PunchType::LunchStart => "Saída p/ Almoço",
            PunchType::LunchEnd => "Retorno do Almoço",
            PunchType::Out => "Saída",
        }
    }

    /// Long uppercase pt-BR label used in the paged document.
    pub fn long_label(self) -> &'static str {
        match self {
            PunchType::In => "ENTRADA",
            PunchType::LunchStart => "SAÍDA PARA O ALMOÇO",
            PunchType::LunchEnd => "RETORNO DO ALMOÇO",
            PunchType::Out => "SAÍDA",
        }
    }
}

impl fmt::Display for PunchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
