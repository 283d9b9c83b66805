pub mod employee;
pub mod punch;
pub mod punch_type;

pub use employee::Employee;
pub use punch::Punch;
pub use punch_type::PunchType;
