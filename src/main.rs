use clap::Parser;
use forecast_merger::cli::{run, Cli};
use forecast_merger::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
