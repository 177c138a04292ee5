//! Sidebar input form.

use std::ops::RangeInclusive;

use eframe::egui;
use eframe::egui::emath::Numeric;

use picker_core::BinningPolicy;

use crate::app::{ModelKind, PickerUiApp};
use crate::ui::constants::MIN_SHIFT_DURATION_MIN;

/// Labelled drag value clamped to `range`.
fn number_input<N: Numeric>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut N,
    range: RangeInclusive<N>,
    help: Option<&str>,
) -> bool {
    ui.horizontal(|ui| {
        let label = ui.label(label);
        if let Some(help) = help {
            label.on_hover_text(help);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(egui::DragValue::new(value).range(range).speed(1.0))
                .changed()
        })
        .inner
    })
    .inner
}

/// Render the input sidebar.
pub fn render_input_sidebar(ui: &mut egui::Ui, app: &mut PickerUiApp) {
    ui.heading("Input Parameters");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label("Timing model");
        egui::ComboBox::from_id_salt("timing_model")
            .selected_text(app.model_kind.label())
            .show_ui(ui, |ui| {
                for kind in ModelKind::ALL {
                    ui.selectable_value(&mut app.model_kind, kind, kind.label());
                }
            });
    });
    ui.separator();

    render_order_composition(ui, app);
    ui.separator();
    render_task_timings(ui, app);
    ui.separator();
    render_shift_and_volume(ui, app);
    ui.separator();
    render_config_file(ui, app);

    let errors = app.config().validation_errors();
    if !errors.is_empty() {
        ui.separator();
        for err in errors {
            ui.colored_label(egui::Color32::from_rgb(220, 120, 80), err.to_string());
        }
    }
}

fn render_order_composition(ui: &mut egui::Ui, app: &mut PickerUiApp) {
    ui.strong("Order Composition");
    match app.model_kind {
        ModelKind::PerItem => {
            number_input(
                ui,
                "Milk Items per Order",
                &mut app.milk_items_per_order,
                1..=u32::MAX,
                None,
            );
            number_input(
                ui,
                "Non-Milk Items per Order",
                &mut app.non_milk_items_per_order,
                0..=u32::MAX,
                None,
            );
        }
        ModelKind::ContributionSplit => {
            number_input(
                ui,
                "Average Basket Quantity",
                &mut app.average_basket_quantity,
                0.1..=f64::MAX,
                Some("Average number of items in one order."),
            );
            number_input(
                ui,
                "Milk Contribution (%)",
                &mut app.milk_contribution_percent,
                0.0..=100.0,
                Some("Share of items that are milk. Non-milk is the remainder."),
            );
            ui.small(format!(
                "Non-milk contribution: {:.1}%",
                100.0 - app.milk_contribution_percent
            ));
        }
        ModelKind::BasketLevel => {
            number_input(
                ui,
                "Items per Basket",
                &mut app.items_per_basket,
                1..=u32::MAX,
                None,
            );
        }
    }
}

fn render_task_timings(ui: &mut egui::Ui, app: &mut PickerUiApp) {
    ui.strong("Task Timings & Rates");
    if app.model_kind == ModelKind::BasketLevel {
        number_input(
            ui,
            "Picking Time per Basket (seconds)",
            &mut app.picking_time_per_basket_sec,
            1.0..=f64::MAX,
            Some("Time one picker needs to pick a whole basket."),
        );
    } else {
        number_input(
            ui,
            "Milk Picking Rate (Qty/Hour/Picker)",
            &mut app.milk_picking_rate_per_hour,
            1.0..=f64::MAX,
            None,
        );
        number_input(
            ui,
            "Non-Milk Picking Time (seconds)",
            &mut app.non_milk_pick_time_sec,
            1.0..=f64::MAX,
            Some("Time taken to pick a certain quantity of non-milk items."),
        );
        number_input(
            ui,
            "Quantity for Non-Milk Picking Time",
            &mut app.non_milk_pick_qty,
            1..=u32::MAX,
            Some("Number of non-milk items picked in the time above."),
        );
    }
    number_input(
        ui,
        "Binning Time per Order (seconds)",
        &mut app.binning_time_per_order_sec,
        0.0..=f64::MAX,
        None,
    );
    ui.horizontal(|ui| {
        ui.label("Binning staffed by");
        ui.radio_value(
            &mut app.binning_policy,
            BinningPolicy::MergedIntoPicking,
            "pickers",
        );
        ui.radio_value(
            &mut app.binning_policy,
            BinningPolicy::SeparateCategory,
            "own workforce",
        );
    });
}

fn render_shift_and_volume(ui: &mut egui::Ui, app: &mut PickerUiApp) {
    ui.strong("Shift & Order Volume");
    number_input(
        ui,
        "Shift Duration (minutes)",
        &mut app.shift_duration_min,
        MIN_SHIFT_DURATION_MIN..=u32::MAX,
        None,
    );
    if number_input(
        ui,
        "Start Order Count",
        &mut app.start_orders,
        1..=u32::MAX,
        None,
    ) {
        app.clamp_end_orders();
    }
    let start = app.start_orders;
    number_input(
        ui,
        "End Order Count",
        &mut app.end_orders,
        start..=u32::MAX,
        None,
    );
    number_input(ui, "Step Size", &mut app.step, 1..=u32::MAX, None);
    ui.small(format!("{} rows", app.config().sweep.len()));
}

fn render_config_file(ui: &mut egui::Ui, app: &mut PickerUiApp) {
    ui.strong("Saved Inputs");
    ui.add(
        egui::TextEdit::singleline(&mut app.config_path_input)
            .desired_width(f32::INFINITY)
            .hint_text("./picker-config.json"),
    );
    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            app.save_config();
        }
        if ui.button("Load").clicked() {
            app.load_config();
        }
        if ui.button("Reset").clicked() {
            app.reset_inputs();
        }
    });
}
