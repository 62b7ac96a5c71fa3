use eframe::egui;

use crate::state::ChartState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SensorPlotApp {
    pub state: ChartState,
}

impl SensorPlotApp {
    pub fn new(state: ChartState) -> Self {
        Self { state }
    }
}

impl eframe::App for SensorPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::series_plot(ui, &self.state);
        });
    }
}

/// Open the chart window and block until it is closed.
pub fn show(state: ChartState) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 650.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    let window_title = state.title.clone();
    eframe::run_native(
        &window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(SensorPlotApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("chart window failed: {e}"))
}
