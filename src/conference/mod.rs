// src/conference/mod.rs

//! Conference records and their input format.
//!
//! - [`date`] converts `YYYY-MM-DD` strings into comparable day offsets.
//! - [`record`] holds the immutable [`Conference`] value.
//! - [`loader`] reads conferences from the headerless CSV input.
//! - [`filter`] narrows the loaded set before graph construction.

pub mod date;
pub mod filter;
pub mod loader;
pub mod record;

pub use date::{compute_day, DayOffset, DAYS_PER_YEAR};
pub use filter::{apply_filter, AreaFilter};
pub use loader::{load_conferences, parse_conferences};
pub use record::Conference;
