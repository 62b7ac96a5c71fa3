mod app;
mod config;
mod data;
mod report;
mod state;
mod stats;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;

use config::{Cli, Config, Mode};
use data::loader::load_series;
use report::{write_report, Summary};
use state::ChartState;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from(Cli::parse());
    log::debug!("{config:?}");

    let series = load_series(&config.input, &config.extract_options())?;

    let summary = Summary::of(&series);
    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &series, config.value_column, &summary)
        .context("writing report")?;

    if config.mode == Mode::Plot {
        app::show(ChartState::new(series))?;
    }
    Ok(())
}
