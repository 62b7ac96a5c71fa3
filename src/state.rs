use crate::data::model::Series;

/// Most x tick labels drawn before they are thinned out.
pub const MAX_X_TICKS: usize = 20;

// ---------------------------------------------------------------------------
// Chart state
// ---------------------------------------------------------------------------

/// Everything the chart needs, independent of rendering.
pub struct ChartState {
    /// The extracted column, fully materialised before the window opens.
    pub series: Series,

    /// "<value column> over <label column>".
    pub title: String,

    /// Positions in `series` whose labels are drawn on the x axis.
    pub ticks: Vec<usize>,
}

impl ChartState {
    pub fn new(series: Series) -> Self {
        let title = format!("{} over {}", series.value_name(), series.label_name());
        let ticks = tick_indices(series.len(), MAX_X_TICKS);
        Self {
            series,
            title,
            ticks,
        }
    }

    /// Label drawn at x position `index`, if any.
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.series.labels().get(index).map(String::as_str)
    }
}

/// Evenly spaced positions, at most `max_ticks` of them, starting at 0.
pub fn tick_indices(len: usize, max_ticks: usize) -> Vec<usize> {
    if len <= max_ticks {
        return (0..len).collect();
    }
    let step = len.div_ceil(max_ticks.max(1));
    (0..len).step_by(step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_names_both_columns() {
        let state = ChartState::new(Series::new("Timestamp", "Temperatura"));
        assert_eq!(state.title, "Temperatura over Timestamp");
    }

    #[test]
    fn empty_series_uses_default_title() {
        let state = ChartState::new(Series::with_default_names());
        assert_eq!(state.title, "Valor over Tiempo");
        assert!(state.ticks.is_empty());
        assert_eq!(state.label_at(0), None);
    }

    #[test]
    fn short_series_labels_every_point() {
        assert_eq!(tick_indices(0, 20), Vec::<usize>::new());
        assert_eq!(tick_indices(5, 20), vec![0, 1, 2, 3, 4]);
        assert_eq!(tick_indices(20, 20).len(), 20);
    }

    #[test]
    fn long_series_is_thinned() {
        assert_eq!(tick_indices(21, 20), (0..21).step_by(2).collect::<Vec<_>>());
        assert_eq!(tick_indices(100, 20), (0..100).step_by(5).collect::<Vec<_>>());

        for len in 21..500 {
            let ticks = tick_indices(len, 20);
            assert!(ticks.len() <= 20, "{len} rows gave {} ticks", ticks.len());
            assert_eq!(ticks[0], 0);
            assert!(ticks.windows(2).all(|w| w[1] - w[0] == ticks[1] - ticks[0]));
        }
    }

    #[test]
    fn label_lookup() {
        let mut series = Series::new("ts", "v");
        series.push("2025-06-22 08:00".to_string(), 1.0);
        let state = ChartState::new(series);
        assert_eq!(state.label_at(0), Some("2025-06-22 08:00"));
    }
}
