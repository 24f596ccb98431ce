pub mod population_threshold;
pub mod us_bounds;

pub use population_threshold::PopulationThresholdFilter;
pub use us_bounds::{in_us_bounds, UsBoundsFilter};

/// Kept/removed counters of a single filter pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub kept: u64,
    pub removed: u64,
}

impl FilterStats {
    pub fn total(&self) -> u64 {
        self.kept + self.removed
    }

    pub fn summary(&self) -> String {
        format!(
            "Kept {} out of {} rows ({} removed)",
            self.kept,
            self.total(),
            self.removed
        )
    }
}
