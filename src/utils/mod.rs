pub mod collate;
pub mod path;
pub mod time;
pub mod tz;

pub use collate::collation_key;
pub use time::minutes_to_hhmm;
