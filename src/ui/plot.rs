use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_4};
use std::sync::Arc;

use eframe::egui::epaint::TextShape;
use eframe::egui::{self, Galley, Pos2, Shape, TextStyle, Ui};
use egui_plot::{GridInput, GridMark, Legend, Line, Plot, PlotPoint, PlotPoints, Points};

use crate::state::ChartState;

/// Space between the plot frame and the top of the x tick labels.
const LABEL_GAP: f32 = 4.0;

/// The plot never shrinks below this, however long the labels are.
const MIN_PLOT_HEIGHT: f32 = 120.0;

// ---------------------------------------------------------------------------
// Series plot (central panel)
// ---------------------------------------------------------------------------

/// Render the title, the line chart and its rotated x tick labels.
pub fn series_plot(ui: &mut Ui, state: &ChartState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&state.title);
    });

    let text_color = ui.visuals().text_color();
    let font = TextStyle::Small.resolve(ui.style());
    let tick_labels: Vec<(usize, Arc<Galley>)> = state
        .ticks
        .iter()
        .filter_map(|&i| {
            let label = state.label_at(i)?;
            let galley = ui
                .painter()
                .layout_no_wrap(label.to_string(), font.clone(), text_color);
            Some((i, galley))
        })
        .collect();

    // Vertical extent of a label turned by 45°.
    let label_extent = tick_labels
        .iter()
        .map(|(_, g)| (g.size().x + g.size().y) * FRAC_1_SQRT_2)
        .fold(0.0, f32::max);
    let reserved = label_extent
        + LABEL_GAP
        + ui.text_style_height(&TextStyle::Body)
        + 2.0 * ui.spacing().item_spacing.y;
    let plot_height = (ui.available_height() - reserved).max(MIN_PLOT_HEIGHT);

    let name = state.series.value_name();
    let ticks = state.ticks.clone();
    let labels = state.series.labels().to_vec();

    let response = Plot::new("series_plot")
        .height(plot_height)
        .legend(Legend::default())
        .show_grid(true)
        .show_axes([false, true])
        .y_axis_label(name)
        .x_grid_spacer(move |input: GridInput| tick_marks(&ticks, input))
        .label_formatter(move |item, point| hover_text(&labels, item, point))
        .show(ui, |plot_ui| {
            let points = || -> PlotPoints {
                state
                    .series
                    .points()
                    .map(|(i, _, value)| [i as f64, value])
                    .collect()
            };
            plot_ui.line(Line::new(points()).name(name).width(1.5));
            plot_ui.points(Points::new(points()).name(name).radius(2.5));
        });

    let transform = response.transform;
    let frame = *transform.frame();
    let painter = ui.painter();
    for (i, galley) in tick_labels {
        let x = transform.position_from_point(&PlotPoint::new(i as f64, 0.0)).x;
        // panned or zoomed out of view
        if x < frame.left() - 0.5 || x > frame.right() + 0.5 {
            continue;
        }
        let anchor = Pos2::new(x, frame.bottom() + LABEL_GAP);
        painter.add(Shape::Text(
            TextShape::new(anchor, galley, text_color).with_angle(FRAC_PI_4),
        ));
    }

    ui.add_space(label_extent + LABEL_GAP);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(egui::RichText::new(state.series.label_name()).strong());
    });
}

/// Vertical grid lines at the labelled positions only.
fn tick_marks(ticks: &[usize], input: GridInput) -> Vec<GridMark> {
    let step = match ticks {
        [first, second, ..] => (second - first) as f64,
        _ => 1.0,
    };
    let (min, max) = input.bounds;
    ticks
        .iter()
        .map(|&i| i as f64)
        .filter(|&x| x >= min && x <= max)
        .map(|value| GridMark {
            value,
            step_size: step,
        })
        .collect()
}

/// Hover text: the row's label, then the value.
fn hover_text(labels: &[String], item: &str, point: &PlotPoint) -> String {
    let label = if point.x >= 0.0 {
        labels.get(point.x.round() as usize)
    } else {
        None
    };
    match (label, item.is_empty()) {
        (Some(label), false) => format!("{label}\n{item}: {:.2}", point.y),
        (Some(label), true) => format!("{label}\n{:.2}", point.y),
        (None, _) => format!("{:.2}", point.y),
    }
}
