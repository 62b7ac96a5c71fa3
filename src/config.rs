use std::path::PathBuf;

use clap::Parser;

use crate::data::loader::ExtractOptions;

pub const DEFAULT_INPUT: &str = "sensors_2025-06-22.csv";

#[derive(Parser, Debug)]
#[command(name = "sensor-stats")]
#[command(about = "Standard deviation (and optional chart) of one column of a sensor CSV log", long_about = None)]
pub struct Cli {
    /// CSV file to read; the first row is the header
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Zero-based index of the label (timestamp) column
    #[arg(short, long, default_value_t = 0)]
    pub label_column: usize,

    /// Zero-based index of the measurement column
    #[arg(short = 'c', long, default_value_t = 2)]
    pub value_column: usize,

    /// Also open a line chart of the column against the labels
    #[arg(long)]
    pub plot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the values and their standard deviation.
    Report,
    /// Report, then show the chart.
    Plot,
}

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub label_column: usize,
    pub value_column: usize,
    pub mode: Mode,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            input: cli.input,
            label_column: cli.label_column,
            value_column: cli.value_column,
            mode: if cli.plot { Mode::Plot } else { Mode::Report },
        }
    }
}

impl Config {
    /// Only the chart needs column names, so only it insists on a header.
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            label_column: self.label_column,
            value_column: self.value_column,
            require_headers: self.mode == Mode::Plot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Cli::try_parse_from(std::iter::once("sensor-stats").chain(args.iter().copied()))
            .unwrap()
            .into()
    }

    #[test]
    fn defaults_match_logger_layout() {
        let config = parse(&[]);
        assert_eq!(config.input, PathBuf::from("sensors_2025-06-22.csv"));
        assert_eq!(config.label_column, 0);
        assert_eq!(config.value_column, 2);
        assert_eq!(config.mode, Mode::Report);
        assert_eq!(config.extract_options(), ExtractOptions::default());
    }

    #[test]
    fn plot_mode_requires_headers() {
        let config = parse(&["--plot", "-c", "3", "readings.csv"]);
        assert_eq!(config.mode, Mode::Plot);
        assert_eq!(config.input, PathBuf::from("readings.csv"));

        let options = config.extract_options();
        assert_eq!(options.value_column, 3);
        assert!(options.require_headers);
    }

    #[test]
    fn rejects_negative_column() {
        let args = ["sensor-stats", "--value-column", "-1"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
