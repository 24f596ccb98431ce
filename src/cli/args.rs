use crate::utils::constants::DEFAULT_POPULATION_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "forecast-merger")]
#[command(about = "Joins daily weather forecasts with a population-density grid")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the master dataset for a date by joining forecasts with the population grid
    Merge {
        #[arg(short, long, help = "Run date in MM-DD-YYYY format [default: today]")]
        date: Option<String>,

        #[arg(
            short,
            long,
            help = "Directory containing forecast files [default: ./<date>]"
        )]
        forecast_dir: Option<PathBuf>,

        #[arg(
            short,
            long,
            default_value = DEFAULT_POPULATION_FILE,
            help = "Population grid CSV (longitude,latitude,population)"
        )]
        population_file: PathBuf,

        #[arg(
            short,
            long,
            help = "Output CSV path [default: master_<date>.csv]"
        )]
        output_file: Option<PathBuf>,
    },

    /// Keep only master rows with population > 0
    FilterPopulation {
        #[arg(short, long, help = "Master CSV to filter")]
        input: PathBuf,

        #[arg(short, long, help = "Output path [default: filtered_<input>]")]
        output: Option<PathBuf>,
    },

    /// Keep only master rows inside the contiguous-US bounding box
    FilterUs {
        #[arg(short, long, help = "Master CSV to filter")]
        input: PathBuf,

        #[arg(short, long, help = "Output path [default: us_<input>]")]
        output: Option<PathBuf>,
    },
}
