pub mod aggregator;
pub mod grouper;
pub mod sequencer;

pub use aggregator::worked_duration;
pub use grouper::{DayBucket, EmployeeMonth, MonthGroup, ReportRange, group_by_month};
pub use sequencer::{PunchMode, Sequencer};
