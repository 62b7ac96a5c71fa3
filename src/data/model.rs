// ---------------------------------------------------------------------------
// Series – the two extracted columns
// ---------------------------------------------------------------------------

/// Axis title used when the header row has no usable label column name.
pub const DEFAULT_LABEL_NAME: &str = "Tiempo";

/// Axis title used when the header row has no usable value column name.
pub const DEFAULT_VALUE_NAME: &str = "Valor";

/// Labels and values pulled out of one CSV file, row order preserved.
///
/// `labels[i]` and `values[i]` always come from the same source row; the
/// fields are private so the two vectors can only grow together.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    label_name: String,
    value_name: String,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Series {
    /// An empty series with the given column names.
    pub fn new(label_name: impl Into<String>, value_name: impl Into<String>) -> Self {
        Series {
            label_name: label_name.into(),
            value_name: value_name.into(),
            labels: Vec::new(),
            values: Vec::new(),
        }
    }

    /// The empty result returned when the header row is missing or too short.
    pub fn with_default_names() -> Self {
        Series::new(DEFAULT_LABEL_NAME, DEFAULT_VALUE_NAME)
    }

    /// Append one observation.
    pub fn push(&mut self, label: String, value: f64) {
        self.labels.push(label);
        self.values.push(value);
    }

    pub fn label_name(&self) -> &str {
        &self.label_name
    }

    pub fn value_name(&self) -> &str {
        &self.value_name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no row produced an observation.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(position, label, value)` in file order.
    pub fn points(&self) -> impl Iterator<Item = (usize, &str, f64)> + '_ {
        self.labels
            .iter()
            .zip(self.values.iter())
            .enumerate()
            .map(|(i, (label, &value))| (i, label.as_str(), value))
    }
}

impl Extend<(String, f64)> for Series {
    fn extend<I: IntoIterator<Item = (String, f64)>>(&mut self, iter: I) {
        for (label, value) in iter {
            self.push(label, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names() {
        let series = Series::with_default_names();
        assert_eq!(series.label_name(), "Tiempo");
        assert_eq!(series.value_name(), "Valor");
        assert!(series.is_empty());
    }

    #[test]
    fn labels_and_values_stay_paired() {
        let mut series = Series::new("ts", "temp");
        series.extend(vec![("t0".to_string(), 1.5), ("t1".to_string(), -2.0)]);

        assert_eq!(series.len(), 2);
        assert_eq!(series.labels().len(), series.values().len());

        let points: Vec<_> = series.points().collect();
        assert_eq!(points, vec![(0, "t0", 1.5), (1, "t1", -2.0)]);
    }
}
