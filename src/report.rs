use std::fmt;
use std::io::{self, Write};

use crate::data::model::Series;
use crate::stats::sample_std_dev;

pub const INSUFFICIENT_DATA: &str = "No hay suficientes datos para calcular la desviación estándar.";

// ---------------------------------------------------------------------------
// Summary – the single statistic reported per run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    /// Fewer than two values were extracted.
    InsufficientData,
    /// Sample standard deviation of the named column.
    StdDev { column: String, value: f64 },
}

impl Summary {
    pub fn of(series: &Series) -> Self {
        match sample_std_dev(series.values()) {
            Some(value) => Summary::StdDev {
                column: series.value_name().to_string(),
                value,
            },
            None => Summary::InsufficientData,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::InsufficientData => write!(f, "{INSUFFICIENT_DATA}"),
            Summary::StdDev { column, value } => {
                write!(f, "Desviación estándar de {column}: {value:.2}")
            }
        }
    }
}

/// Print the extracted values followed by the summary line.
///
/// With insufficient data only the summary line is written.
pub fn write_report<W: Write>(
    out: &mut W,
    series: &Series,
    value_column: usize,
    summary: &Summary,
) -> io::Result<()> {
    if let Summary::StdDev { .. } = summary {
        writeln!(
            out,
            "Datos extraídos (columna {value_column}): {:?}",
            series.values()
        )?;
    }
    writeln!(out, "{summary}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Series {
        let mut series = Series::new("Timestamp", "Temperatura");
        series.extend(
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| (format!("t{i}"), v)),
        );
        series
    }

    fn render(series: &Series) -> String {
        let mut out = Vec::new();
        write_report(&mut out, series, 2, &Summary::of(series)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reports_std_dev_with_two_decimals() {
        let series = series(&[10.0, 20.0]);
        assert_eq!(
            Summary::of(&series),
            Summary::StdDev {
                column: "Temperatura".to_string(),
                value: 50f64.sqrt(),
            }
        );
        assert_eq!(
            render(&series),
            "Datos extraídos (columna 2): [10.0, 20.0]\n\
             Desviación estándar de Temperatura: 7.07\n"
        );
    }

    #[test]
    fn csv_text_to_report() {
        use crate::data::loader::{read_series, ExtractOptions};

        let csv = "Timestamp,Sensor,Temperatura\n\
                   t0,a,10.0\n\
                   t1,b,x\n\
                   t2,c,20.0\n";
        let series = read_series(csv.as_bytes(), &ExtractOptions::default()).unwrap();
        assert_eq!(series.labels(), ["t0", "t2"]);

        assert_eq!(
            render(&series),
            "Datos extraídos (columna 2): [10.0, 20.0]\n\
             Desviación estándar de Temperatura: 7.07\n"
        );
    }

    #[test]
    fn csv_with_one_valid_row_reports_only_the_message() {
        use crate::data::loader::{read_series, ExtractOptions};

        let csv = "Timestamp,Sensor,Temperatura\nt0,a,10.0\nt1,b,x\n";
        let series = read_series(csv.as_bytes(), &ExtractOptions::default()).unwrap();
        assert_eq!(render(&series), format!("{INSUFFICIENT_DATA}\n"));
    }

    #[test]
    fn single_value_is_insufficient() {
        let series = series(&[21.5]);
        assert_eq!(Summary::of(&series), Summary::InsufficientData);
        assert_eq!(render(&series), format!("{INSUFFICIENT_DATA}\n"));
    }

    #[test]
    fn empty_series_is_insufficient() {
        assert_eq!(render(&Series::with_default_names()), format!("{INSUFFICIENT_DATA}\n"));
    }
}
