//! Picker requirement estimation.
//!
//! For every swept order count `N` and every staffed category `c`:
//!
//! ```text
//! workload_sec(c) = N * time_per_order(c)
//! exact(c)        = workload_sec(c) / shift_duration_sec   (0 when the shift is 0 s)
//! rounded(c)      = ceil(exact(c))
//! total           = sum of rounded(c)
//! ```
//!
//! Categories are rounded independently before summing because each workforce
//! is staffed on its own.

use tracing::{debug, warn};

use crate::config::EstimatorConfig;
use crate::params::{Scenario, SECONDS_PER_MINUTE};
use crate::table::{CategoryPickers, ResultRow, ScenarioTable, ScenarioTables, TaskCategory};
use crate::timing::OrderTimeBreakdown;

/// Pickers needed to clear `workload_sec` within one shift.
pub fn pickers_required(workload_sec: f64, shift_duration_sec: f64) -> f64 {
    if shift_duration_sec > 0.0 {
        workload_sec / shift_duration_sec
    } else {
        0.0
    }
}

/// Orders one picker completes in a shift; infinite when an order takes no time.
pub fn orders_per_picker_per_shift(shift_duration_min: f64, total_time_per_order_sec: f64) -> f64 {
    if total_time_per_order_sec > 0.0 {
        shift_duration_min / (total_time_per_order_sec / SECONDS_PER_MINUTE)
    } else {
        f64::INFINITY
    }
}

/// `orders / orders_per_picker`, with no capacity at all mapping to 0 pickers.
pub fn pickers_from_capacity(orders: u32, orders_per_picker: f64) -> f64 {
    if orders_per_picker > 0.0 {
        orders as f64 / orders_per_picker
    } else {
        0.0
    }
}

/// Build the table for one scenario.
pub fn estimate(config: &EstimatorConfig, scenario: Scenario) -> ScenarioTable {
    let breakdown = OrderTimeBreakdown::derive(&config.rates, &config.model);
    estimate_with_breakdown(config, &breakdown, scenario)
}

/// Build the with-binning and without-binning tables from one derivation.
pub fn estimate_both(config: &EstimatorConfig) -> ScenarioTables {
    let breakdown = OrderTimeBreakdown::derive(&config.rates, &config.model);
    ScenarioTables {
        with_binning: estimate_with_breakdown(config, &breakdown, Scenario::WithBinning),
        without_binning: estimate_with_breakdown(config, &breakdown, Scenario::WithoutBinning),
    }
}

/// Build the table for one scenario from an already derived per-order breakdown.
///
/// # Arguments
///
/// * `config` - Shift, sweep and binning policy to apply
/// * `breakdown` - Per-order task times, usually from [`OrderTimeBreakdown::derive`]
/// * `scenario` - Whether binning time is part of the workload
///
/// Never fails: a zero-second shift yields 0 pickers and counts too large for
/// `u64` saturate.
pub fn estimate_with_breakdown(
    config: &EstimatorConfig,
    breakdown: &OrderTimeBreakdown,
    scenario: Scenario,
) -> ScenarioTable {
    let shift_duration_sec = config.shift.shift_duration_sec();
    if shift_duration_sec <= 0.0 {
        warn!("shift duration is 0 seconds, every picker count falls back to 0");
    }

    let category_times = breakdown.category_times(scenario, config.binning_policy);
    let rows: Vec<ResultRow> = config
        .sweep
        .order_counts()
        .map(|orders| {
            let categories = category_times
                .iter()
                .map(|time| {
                    let workload_sec = orders as f64 * time.time_per_order_sec;
                    CategoryPickers::new(
                        time.category,
                        pickers_required(workload_sec, shift_duration_sec),
                    )
                })
                .collect();
            ResultRow::new(orders, categories)
        })
        .collect();

    debug!(
        scenario = scenario.label(),
        rows = rows.len(),
        "estimated picker table"
    );

    ScenarioTable {
        scenario,
        categories: category_times.iter().map(|t| t.category).collect(),
        rows,
    }
}

/// Single-workforce table via the orders-per-picker formulation.
///
/// All task time of an order is pooled into [`TaskCategory::Combined`]; results
/// agree with [`estimate`] on an undifferentiated category up to float rounding.
pub fn estimate_by_capacity(config: &EstimatorConfig, scenario: Scenario) -> ScenarioTable {
    let breakdown = OrderTimeBreakdown::derive(&config.rates, &config.model);
    let total_time_per_order_sec = breakdown.total_time_per_order_sec(scenario);
    let orders_per_picker = orders_per_picker_per_shift(
        config.shift.shift_duration_min as f64,
        total_time_per_order_sec,
    );

    let rows = config
        .sweep
        .order_counts()
        .map(|orders| {
            ResultRow::new(
                orders,
                vec![CategoryPickers::new(
                    TaskCategory::Combined,
                    pickers_from_capacity(orders, orders_per_picker),
                )],
            )
        })
        .collect();

    ScenarioTable {
        scenario,
        categories: vec![TaskCategory::Combined],
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_shift_yields_zero_pickers() {
        assert_eq!(pickers_required(6000.0, 0.0), 0.0);
    }

    #[test]
    fn capacity_is_infinite_for_free_orders() {
        let capacity = orders_per_picker_per_shift(120.0, 0.0);
        assert!(capacity.is_infinite());
        assert_eq!(pickers_from_capacity(500, capacity), 0.0);
    }

    #[test]
    fn capacity_for_one_minute_orders() {
        assert_eq!(orders_per_picker_per_shift(120.0, 60.0), 120.0);
        assert_eq!(pickers_from_capacity(240, 120.0), 2.0);
    }

    #[test]
    fn no_capacity_yields_zero_pickers() {
        assert_eq!(pickers_from_capacity(100, orders_per_picker_per_shift(0.0, 60.0)), 0.0);
    }
}
