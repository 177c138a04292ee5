use eframe::egui;

use picker_core::{estimate_both, OrderTimeBreakdown};

use crate::app::PickerUiApp;
use crate::ui::constants::{APP_TITLE, SIDEBAR_WIDTH};
use crate::ui::controls::render_input_sidebar;
use crate::ui::dashboard::render_dashboard;

pub fn run() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1280.0, 820.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(PickerUiApp::new()))),
    )
}

impl eframe::App for PickerUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("inputs")
            .resizable(true)
            .default_width(SIDEBAR_WIDTH)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    render_input_sidebar(ui, self);
                });
            });

        // Recomputed from the inputs as they stand after this frame's edits.
        let config = self.config();
        let breakdown = OrderTimeBreakdown::derive(&config.rates, &config.model);
        let tables = estimate_both(&config);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                render_dashboard(ui, self, &config, &breakdown, &tables);
            });
        });
    }
}
