pub mod constants;
pub mod filename;
pub mod progress;

pub use filename::{date_prefix, master_filename, prefixed_filename, today_date_string};
pub use progress::ProgressReporter;
