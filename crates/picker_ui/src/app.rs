//! Application state for the calculator UI.
//!
//! Widgets edit plain fields on [`PickerUiApp`]; every frame an immutable
//! [`EstimatorConfig`] snapshot is taken from them and handed to the estimator.

use std::path::PathBuf;

use picker_core::{
    BinningPolicy, EstimatorConfig, RateParameters, Scenario, ScenarioTables, ShiftParameters,
    SweepRange, TimingModel,
};
use picker_reports::{xlsx_bytes, ExportFormat};
use tracing::{info, warn};

const DEFAULT_CONFIG_PATH: &str = "./picker-config.json";
const DEFAULT_EXPORT_DIR: &str = ".";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    PerItem,
    ContributionSplit,
    BasketLevel,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [
        ModelKind::PerItem,
        ModelKind::ContributionSplit,
        ModelKind::BasketLevel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ModelKind::PerItem => "Per-item rates",
            ModelKind::ContributionSplit => "Milk contribution (ABQ)",
            ModelKind::BasketLevel => "Basket level",
        }
    }
}

/// Main application state for the calculator UI.
pub struct PickerUiApp {
    pub model_kind: ModelKind,
    // Order composition
    pub milk_items_per_order: u32,
    pub non_milk_items_per_order: u32,
    pub average_basket_quantity: f64,
    pub milk_contribution_percent: f64,
    pub items_per_basket: u32,
    pub picking_time_per_basket_sec: f64,
    // Task timings & rates
    pub milk_picking_rate_per_hour: f64,
    pub non_milk_pick_time_sec: f64,
    pub non_milk_pick_qty: u32,
    pub binning_time_per_order_sec: f64,
    pub binning_policy: BinningPolicy,
    // Shift & order volume
    pub shift_duration_min: u32,
    pub start_orders: u32,
    pub end_orders: u32,
    pub step: u32,
    // View state
    pub active_tab: Scenario,
    pub config_path_input: String,
    pub export_dir_input: String,
    pub status_message: Option<String>,
}

impl PickerUiApp {
    pub fn new() -> Self {
        Self::from_config(&EstimatorConfig::default())
    }

    pub fn from_config(config: &EstimatorConfig) -> Self {
        let mut app = Self {
            model_kind: ModelKind::PerItem,
            milk_items_per_order: 1,
            non_milk_items_per_order: 2,
            average_basket_quantity: 3.0,
            milk_contribution_percent: 33.3,
            items_per_basket: 3,
            picking_time_per_basket_sec: 66.0,
            milk_picking_rate_per_hour: 0.0,
            non_milk_pick_time_sec: 0.0,
            non_milk_pick_qty: 0,
            binning_time_per_order_sec: 0.0,
            binning_policy: BinningPolicy::default(),
            shift_duration_min: 0,
            start_orders: 0,
            end_orders: 0,
            step: 0,
            active_tab: Scenario::WithBinning,
            config_path_input: DEFAULT_CONFIG_PATH.to_string(),
            export_dir_input: DEFAULT_EXPORT_DIR.to_string(),
            status_message: None,
        };
        app.apply_config(config);
        app
    }

    /// Overwrite the input fields from `config`. Fields of inactive models are kept.
    pub fn apply_config(&mut self, config: &EstimatorConfig) {
        match config.model {
            TimingModel::PerItem {
                milk_items_per_order,
                non_milk_items_per_order,
            } => {
                self.model_kind = ModelKind::PerItem;
                self.milk_items_per_order = milk_items_per_order;
                self.non_milk_items_per_order = non_milk_items_per_order;
            }
            TimingModel::ContributionSplit {
                average_basket_quantity,
                milk_contribution_percent,
            } => {
                self.model_kind = ModelKind::ContributionSplit;
                self.average_basket_quantity = average_basket_quantity;
                self.milk_contribution_percent = milk_contribution_percent;
            }
            TimingModel::BasketLevel {
                items_per_basket,
                picking_time_per_basket_sec,
            } => {
                self.model_kind = ModelKind::BasketLevel;
                self.items_per_basket = items_per_basket;
                self.picking_time_per_basket_sec = picking_time_per_basket_sec;
            }
        }

        self.milk_picking_rate_per_hour = config.rates.milk_picking_rate_per_hour;
        self.non_milk_pick_time_sec = config.rates.non_milk_pick_time_sec;
        self.non_milk_pick_qty = config.rates.non_milk_pick_qty;
        self.binning_time_per_order_sec = config.rates.binning_time_per_order_sec;
        self.binning_policy = config.binning_policy;
        self.shift_duration_min = config.shift.shift_duration_min;
        self.start_orders = config.sweep.start;
        self.end_orders = config.sweep.end;
        self.step = config.sweep.step;
    }

    /// Snapshot of the current inputs.
    pub fn config(&self) -> EstimatorConfig {
        let model = match self.model_kind {
            ModelKind::PerItem => TimingModel::PerItem {
                milk_items_per_order: self.milk_items_per_order,
                non_milk_items_per_order: self.non_milk_items_per_order,
            },
            ModelKind::ContributionSplit => TimingModel::ContributionSplit {
                average_basket_quantity: self.average_basket_quantity,
                milk_contribution_percent: self.milk_contribution_percent,
            },
            ModelKind::BasketLevel => TimingModel::BasketLevel {
                items_per_basket: self.items_per_basket,
                picking_time_per_basket_sec: self.picking_time_per_basket_sec,
            },
        };

        EstimatorConfig {
            rates: RateParameters {
                milk_picking_rate_per_hour: self.milk_picking_rate_per_hour,
                non_milk_pick_time_sec: self.non_milk_pick_time_sec,
                non_milk_pick_qty: self.non_milk_pick_qty,
                binning_time_per_order_sec: self.binning_time_per_order_sec,
            },
            model,
            shift: ShiftParameters::new(self.shift_duration_min),
            sweep: SweepRange::new(self.start_orders, self.end_orders, self.step),
            binning_policy: self.binning_policy,
        }
    }

    /// Keep `end >= start` after the start value changes.
    pub fn clamp_end_orders(&mut self) {
        if self.end_orders < self.start_orders {
            self.end_orders = self.start_orders;
        }
    }

    pub fn reset_inputs(&mut self) {
        self.apply_config(&EstimatorConfig::default());
        self.status_message = Some("Inputs reset to defaults.".to_string());
    }

    pub fn save_config(&mut self) {
        let path = PathBuf::from(self.config_path_input.trim());
        self.status_message = Some(match self.config().save(&path) {
            Ok(()) => {
                info!(path = %path.display(), "saved calculator inputs");
                format!("Saved inputs to {}", path.display())
            }
            Err(err) => {
                warn!(error = %err, "saving calculator inputs failed");
                err.to_string()
            }
        });
    }

    pub fn load_config(&mut self) {
        let path = PathBuf::from(self.config_path_input.trim());
        match EstimatorConfig::load(&path) {
            Ok(config) => {
                self.apply_config(&config);
                self.status_message = Some(format!("Loaded inputs from {}", path.display()));
            }
            Err(err) => {
                warn!(error = %err, "loading calculator inputs failed");
                self.status_message = Some(err.to_string());
            }
        }
    }

    /// Write the scenario's workbook into the export directory.
    pub fn download_table(&mut self, tables: &ScenarioTables, scenario: Scenario) {
        let table = tables.get(scenario);
        let path = PathBuf::from(self.export_dir_input.trim())
            .join(ExportFormat::Xlsx.file_name(scenario));

        let result = xlsx_bytes(table)
            .map_err(|err| err.to_string())
            .and_then(|bytes| std::fs::write(&path, bytes).map_err(|err| err.to_string()));

        self.status_message = Some(match result {
            Ok(()) => {
                info!(path = %path.display(), rows = table.len(), "downloaded picker table");
                format!("Saved {}", path.display())
            }
            Err(message) => {
                warn!(error = %message, "download failed");
                format!("Download failed: {message}")
            }
        });
    }
}

impl Default for PickerUiApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_core::estimate_both;

    #[test]
    fn default_app_reproduces_default_config() {
        assert_eq!(PickerUiApp::new().config(), EstimatorConfig::default());
    }

    #[test]
    fn applying_a_config_switches_model() {
        let config = EstimatorConfig::default()
            .with_model(TimingModel::BasketLevel {
                items_per_basket: 4,
                picking_time_per_basket_sec: 80.0,
            })
            .with_binning_policy(BinningPolicy::SeparateCategory)
            .with_sweep(10, 90, 10);

        let app = PickerUiApp::from_config(&config);
        assert_eq!(app.model_kind, ModelKind::BasketLevel);
        assert_eq!(app.config(), config);
    }

    #[test]
    fn switching_model_keeps_other_model_inputs() {
        let mut app = PickerUiApp::new();
        app.milk_items_per_order = 4;
        app.model_kind = ModelKind::ContributionSplit;
        app.model_kind = ModelKind::PerItem;
        assert_eq!(
            app.config().model,
            TimingModel::PerItem {
                milk_items_per_order: 4,
                non_milk_items_per_order: 2,
            }
        );
    }

    #[test]
    fn end_orders_never_fall_below_start() {
        let mut app = PickerUiApp::new();
        app.start_orders = 2500;
        app.clamp_end_orders();
        assert_eq!(app.end_orders, 2500);
    }

    #[test]
    fn save_and_load_restore_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = PickerUiApp::new();
        app.config_path_input = dir.path().join("inputs.json").display().to_string();
        app.shift_duration_min = 480;
        app.save_config();

        let mut other = PickerUiApp::new();
        other.config_path_input = app.config_path_input.clone();
        other.load_config();
        assert_eq!(other.shift_duration_min, 480);
        assert!(other
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Loaded")));
    }

    #[test]
    fn download_writes_default_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = PickerUiApp::new();
        app.export_dir_input = dir.path().display().to_string();

        let tables = estimate_both(&app.config());
        app.download_table(&tables, Scenario::WithoutBinning);

        assert!(dir.path().join("picker_req_without_binning.xlsx").exists());
    }
}
