use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::filters::{PopulationThresholdFilter, UsBoundsFilter};
use crate::processors::{ForecastFileSelector, JoinEngine};
use crate::readers::PopulationReader;
use crate::utils::constants::{FILTERED_PREFIX, US_PREFIX};
use crate::utils::progress::ProgressReporter;
use crate::utils::{master_filename, prefixed_filename, today_date_string};
use crate::writers::MasterWriter;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Merge {
            date,
            forecast_dir,
            population_file,
            output_file,
        } => {
            let date = date.unwrap_or_else(today_date_string);
            let forecast_dir = forecast_dir.unwrap_or_else(|| PathBuf::from(&date));
            let output_file = output_file.unwrap_or_else(|| master_filename(&date));

            println!("Merging forecasts for {}", date);
            println!("Forecast directory: {}", forecast_dir.display());
            println!("Population file: {}", population_file.display());

            let spinner = ProgressReporter::new_spinner("Reading population data...", false);
            let index = PopulationReader::new().read_index(&population_file)?;
            spinner.finish_with_message(&format!(
                "Loaded {} population entries ({} collisions)",
                index.len(),
                index.collisions()
            ));

            let files = ForecastFileSelector::new().select(&forecast_dir, &date)?;
            if files.is_empty() {
                println!(
                    "⚠️  No forecast files for {} in {}",
                    date,
                    forecast_dir.display()
                );
            }

            let progress =
                ProgressReporter::new(files.len() as u64, "Joining forecast files...", false);
            let mut writer = MasterWriter::create(&output_file)?;
            let stats = JoinEngine::new(&index).run(&files, &mut writer, Some(&progress))?;
            writer.flush()?;
            progress.finish_with_message("Join complete");

            println!("✅ Done. Output saved to {}", output_file.display());
            println!("{}", stats.summary());
        }

        Commands::FilterPopulation { input, output } => {
            let output = output.unwrap_or_else(|| prefixed_filename(&input, FILTERED_PREFIX));

            println!("Filtering zero-population rows from {}", input.display());
            let stats = PopulationThresholdFilter::new().apply(&input, &output)?;

            println!("✅ Done. Output saved to {}", output.display());
            println!("{}", stats.summary());
        }

        Commands::FilterUs { input, output } => {
            let output = output.unwrap_or_else(|| prefixed_filename(&input, US_PREFIX));

            println!("Filtering to contiguous-US rows from {}", input.display());
            let stats = UsBoundsFilter::new().apply(&input, &output)?;

            println!("✅ Done. Output saved to {}", output.display());
            println!("{}", stats.summary());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error when a test harness has already installed a subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
