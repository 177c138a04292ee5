use serde::{Deserialize, Serialize};

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Default milk picking throughput of one picker (items per hour).
const DEFAULT_MILK_PICKING_RATE_PER_HOUR: f64 = 1800.0;
/// Default reference measurement for non-milk picking: 60 s for 3 items.
const DEFAULT_NON_MILK_PICK_TIME_SEC: f64 = 60.0;
const DEFAULT_NON_MILK_PICK_QTY: u32 = 3;
const DEFAULT_BINNING_TIME_PER_ORDER_SEC: f64 = 20.0;
const DEFAULT_SHIFT_DURATION_MIN: u32 = 120;

/// Rates and reference timings shared by every timing model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateParameters {
    /// Milk items one picker picks per hour.
    pub milk_picking_rate_per_hour: f64,
    /// Time taken to pick `non_milk_pick_qty` non-milk items.
    pub non_milk_pick_time_sec: f64,
    /// Reference quantity for `non_milk_pick_time_sec`. 0 means "not measured".
    pub non_milk_pick_qty: u32,
    /// Sorting/placement time spent on every order after picking.
    pub binning_time_per_order_sec: f64,
}

impl Default for RateParameters {
    fn default() -> Self {
        Self {
            milk_picking_rate_per_hour: DEFAULT_MILK_PICKING_RATE_PER_HOUR,
            non_milk_pick_time_sec: DEFAULT_NON_MILK_PICK_TIME_SEC,
            non_milk_pick_qty: DEFAULT_NON_MILK_PICK_QTY,
            binning_time_per_order_sec: DEFAULT_BINNING_TIME_PER_ORDER_SEC,
        }
    }
}

/// How the items of an order are described.
///
/// Every model feeds the same workload / shift-capacity / ceiling pipeline;
/// only the per-order task times differ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum TimingModel {
    /// Explicit milk and non-milk item counts per order.
    PerItem {
        milk_items_per_order: u32,
        non_milk_items_per_order: u32,
    },
    /// An average basket quantity split by the milk share of items.
    ContributionSplit {
        average_basket_quantity: f64,
        /// Percentage of items that are milk (0-100). Non-milk is the remainder.
        milk_contribution_percent: f64,
    },
    /// One undifferentiated picking task priced per basket (one basket per order).
    BasketLevel {
        items_per_basket: u32,
        picking_time_per_basket_sec: f64,
    },
}

impl TimingModel {
    pub fn per_item() -> Self {
        TimingModel::PerItem {
            milk_items_per_order: 1,
            non_milk_items_per_order: 2,
        }
    }

    pub fn contribution_split() -> Self {
        TimingModel::ContributionSplit {
            average_basket_quantity: 3.0,
            milk_contribution_percent: 33.3,
        }
    }

    pub fn basket_level() -> Self {
        TimingModel::BasketLevel {
            items_per_basket: 3,
            picking_time_per_basket_sec: 66.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimingModel::PerItem { .. } => "Per-item rates",
            TimingModel::ContributionSplit { .. } => "Milk contribution split",
            TimingModel::BasketLevel { .. } => "Basket level",
        }
    }

    pub fn is_basket_level(&self) -> bool {
        matches!(self, TimingModel::BasketLevel { .. })
    }
}

impl Default for TimingModel {
    fn default() -> Self {
        Self::per_item()
    }
}

/// Length of the work period every picker is staffed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftParameters {
    pub shift_duration_min: u32,
}

impl ShiftParameters {
    pub fn new(shift_duration_min: u32) -> Self {
        Self { shift_duration_min }
    }

    /// Capacity of one picker for the whole shift, in seconds.
    pub fn shift_duration_sec(&self) -> f64 {
        self.shift_duration_min as f64 * SECONDS_PER_MINUTE
    }
}

impl Default for ShiftParameters {
    fn default() -> Self {
        Self::new(DEFAULT_SHIFT_DURATION_MIN)
    }
}

/// Where binning work is staffed when it is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinningPolicy {
    /// The non-milk (or basket) picker also bins the order.
    #[default]
    MergedIntoPicking,
    /// Binning gets its own workforce and column.
    SeparateCategory,
}

/// Whether binning time is part of the workload being staffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    WithBinning,
    WithoutBinning,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::WithBinning, Scenario::WithoutBinning];

    pub fn includes_binning(self) -> bool {
        matches!(self, Scenario::WithBinning)
    }

    pub fn label(self) -> &'static str {
        match self {
            Scenario::WithBinning => "With Binning Time",
            Scenario::WithoutBinning => "Without Binning Time",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Scenario::WithBinning => "Scenario 1: Full Process (Picking + Binning)",
            Scenario::WithoutBinning => "Scenario 2: Picking Only (No Binning Time)",
        }
    }

    /// Stem used for exported file names, e.g. `picker_req_with_binning`.
    pub fn file_stem(self) -> &'static str {
        match self {
            Scenario::WithBinning => "picker_req_with_binning",
            Scenario::WithoutBinning => "picker_req_without_binning",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_minutes_convert_to_seconds() {
        assert_eq!(ShiftParameters::new(120).shift_duration_sec(), 7200.0);
        assert_eq!(ShiftParameters::new(0).shift_duration_sec(), 0.0);
    }

    #[test]
    fn timing_model_round_trips_through_tagged_json() {
        let model = TimingModel::ContributionSplit {
            average_basket_quantity: 4.5,
            milk_contribution_percent: 20.0,
        };
        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains("\"model\":\"contribution_split\""));
        let parsed: TimingModel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, model);
    }

    #[test]
    fn rate_parameters_fill_missing_fields_with_defaults() {
        let rates: RateParameters =
            serde_json::from_str(r#"{ "binning_time_per_order_sec": 0.0 }"#).unwrap();
        assert_eq!(rates.binning_time_per_order_sec, 0.0);
        assert_eq!(rates.milk_picking_rate_per_hour, 1800.0);
        assert_eq!(rates.non_milk_pick_qty, 3);
    }
}
