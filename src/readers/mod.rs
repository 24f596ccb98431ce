pub mod forecast;
pub mod population;

pub use forecast::{ForecastReader, ForecastRows, ParsedRow};
pub use population::PopulationReader;
