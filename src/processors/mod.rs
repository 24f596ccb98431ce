pub mod file_selector;
pub mod join_engine;

pub use file_selector::ForecastFileSelector;
pub use join_engine::{JoinEngine, JoinStats};
