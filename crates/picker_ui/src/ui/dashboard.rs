use eframe::egui;
use egui_plot::{Legend, Line, Plot};

use picker_core::{EstimatorConfig, OrderTimeBreakdown, Scenario, ScenarioTable, ScenarioTables};
use picker_reports::layout::{column_headers, row_cells};
use picker_reports::summary::binning_note;
use picker_reports::summary_metrics;

use crate::app::PickerUiApp;
use crate::ui::constants::{APP_SUBTITLE, APP_TITLE, CHART_HEIGHT, TABLE_MAX_HEIGHT};

pub fn render_dashboard(
    ui: &mut egui::Ui,
    app: &mut PickerUiApp,
    config: &EstimatorConfig,
    breakdown: &OrderTimeBreakdown,
    tables: &ScenarioTables,
) {
    ui.heading(APP_TITLE);
    ui.label(APP_SUBTITLE);
    ui.separator();

    render_summary(ui, config, breakdown);
    ui.separator();

    ui.horizontal(|ui| {
        for scenario in Scenario::ALL {
            ui.selectable_value(&mut app.active_tab, scenario, scenario.label());
        }
    });
    ui.add_space(4.0);

    let table = tables.get(app.active_tab);
    ui.strong(table.scenario.heading());
    render_result_table(ui, table);
    render_download_row(ui, app, tables);
    ui.separator();

    render_totals_chart(ui, tables);
}

fn render_summary(ui: &mut egui::Ui, config: &EstimatorConfig, breakdown: &OrderTimeBreakdown) {
    ui.strong("Calculated Time per Order (for a single order)");
    let metrics = summary_metrics(breakdown);
    ui.columns(metrics.len(), |columns| {
        for (column, metric) in columns.iter_mut().zip(&metrics) {
            column.vertical(|ui| {
                ui.small(metric.label);
                ui.heading(metric.display_value());
            });
        }
    });
    ui.label(binning_note(breakdown, config.binning_policy));
}

fn render_result_table(ui: &mut egui::Ui, table: &ScenarioTable) {
    if table.is_empty() {
        ui.label("No order counts in the selected range.");
        return;
    }

    let headers = column_headers(&table.categories);
    let available_width = ui.available_width();
    egui::ScrollArea::vertical()
        .id_salt(format!("{}_scroll", table.scenario.file_stem()))
        .auto_shrink([false, true])
        .max_height(TABLE_MAX_HEIGHT)
        .show(ui, |ui| {
            ui.set_min_width(available_width);
            egui::Grid::new(table.scenario.file_stem())
                .min_col_width(available_width / headers.len() as f32)
                .striped(true)
                .show(ui, |ui| {
                    for header in &headers {
                        ui.strong(header);
                    }
                    ui.end_row();

                    for row in &table.rows {
                        for cell in row_cells(row) {
                            ui.label(cell.to_display_string());
                        }
                        ui.end_row();
                    }
                });
        });
}

fn render_download_row(ui: &mut egui::Ui, app: &mut PickerUiApp, tables: &ScenarioTables) {
    let scenario = app.active_tab;
    ui.horizontal(|ui| {
        ui.label("Save to");
        ui.add(egui::TextEdit::singleline(&mut app.export_dir_input).desired_width(220.0));
        let enabled = !tables.get(scenario).is_empty();
        let button = egui::Button::new(format!("📥 Download '{}' as Excel", scenario.label()));
        if ui.add_enabled(enabled, button).clicked() {
            app.download_table(tables, scenario);
        }
    });
    if let Some(message) = &app.status_message {
        ui.small(message);
    }
}

fn render_totals_chart(ui: &mut egui::Ui, tables: &ScenarioTables) {
    ui.strong("Total Pickers by Order Volume");
    Plot::new("total_pickers_plot")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Orders")
        .y_axis_label("Pickers")
        .show(ui, |plot_ui| {
            for table in tables.iter() {
                plot_ui.line(Line::new(table.scenario.label(), total_series(table)));
            }
        });
}

fn total_series(table: &ScenarioTable) -> Vec<[f64; 2]> {
    table
        .rows
        .iter()
        .map(|row| [row.orders as f64, row.total_rounded as f64])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_core::estimate;

    #[test]
    fn total_series_follows_rows() {
        let config = EstimatorConfig::default().with_sweep(100, 300, 100);
        let table = estimate(&config, Scenario::WithBinning);
        let series = total_series(&table);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0], [100.0, 2.0]);
        assert!(series.windows(2).all(|w| w[0][1] <= w[1][1]));
    }
}
