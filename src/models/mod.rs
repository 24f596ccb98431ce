pub mod coordinate;
pub mod forecast;
pub mod merged;
pub mod population;

pub use coordinate::{round2, CoordinateKey};
pub use forecast::ForecastRecord;
pub use merged::MergedRecord;
pub use population::PopulationIndex;
