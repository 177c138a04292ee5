//! Per-order task times derived from rates and the timing model.
//!
//! Degenerate denominators (a zero picking rate, a zero reference quantity,
//! a zero basket size) resolve to a time of 0 instead of an error so a single
//! bad input never takes down the whole table.

use serde::Serialize;
use tracing::warn;

use crate::params::{BinningPolicy, RateParameters, Scenario, TimingModel, SECONDS_PER_HOUR};
use crate::table::TaskCategory;

/// Picking times before binning is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PickingTimes {
    /// Milk and non-milk are picked by separate workforces.
    Split {
        time_per_milk_item_sec: f64,
        time_per_non_milk_item_sec: f64,
        milk_items_per_order: f64,
        non_milk_items_per_order: f64,
        milk_picking_time_per_order_sec: f64,
        non_milk_picking_time_per_order_sec: f64,
    },
    /// A single basket picker handles the whole order.
    Basket {
        time_per_item_sec: f64,
        basket_picking_time_per_order_sec: f64,
    },
}

/// The single-order summary shown above the result tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderTimeBreakdown {
    pub picking: PickingTimes,
    pub binning_time_per_order_sec: f64,
}

/// Time one order costs a given workforce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTime {
    pub category: TaskCategory,
    pub time_per_order_sec: f64,
}

/// `3600 / rate`, or 0 when no rate is configured.
pub fn time_per_milk_item_sec(milk_picking_rate_per_hour: f64) -> f64 {
    if milk_picking_rate_per_hour > 0.0 {
        SECONDS_PER_HOUR / milk_picking_rate_per_hour
    } else {
        warn!(
            milk_picking_rate_per_hour,
            "milk picking rate is not positive, treating milk item time as 0"
        );
        0.0
    }
}

/// `pick_time / pick_qty`, or 0 when the reference quantity is 0.
pub fn time_per_non_milk_item_sec(non_milk_pick_time_sec: f64, non_milk_pick_qty: u32) -> f64 {
    if non_milk_pick_qty > 0 {
        non_milk_pick_time_sec / non_milk_pick_qty as f64
    } else {
        warn!("non-milk pick quantity is 0, treating non-milk item time as 0");
        0.0
    }
}

/// Milk and non-milk item counts for an average basket split by milk share.
///
/// The percentage is clamped to `0..=100` so the two shares never go negative.
pub fn split_basket(average_basket_quantity: f64, milk_contribution_percent: f64) -> (f64, f64) {
    let milk_share = milk_contribution_percent.clamp(0.0, 100.0) / 100.0;
    let milk_items = average_basket_quantity * milk_share;
    let non_milk_items = average_basket_quantity * (1.0 - milk_share);
    (milk_items, non_milk_items)
}

impl OrderTimeBreakdown {
    pub fn derive(rates: &RateParameters, model: &TimingModel) -> Self {
        let picking = match *model {
            TimingModel::PerItem {
                milk_items_per_order,
                non_milk_items_per_order,
            } => split_times(
                rates,
                milk_items_per_order as f64,
                non_milk_items_per_order as f64,
            ),
            TimingModel::ContributionSplit {
                average_basket_quantity,
                milk_contribution_percent,
            } => {
                let (milk_items, non_milk_items) =
                    split_basket(average_basket_quantity, milk_contribution_percent);
                split_times(rates, milk_items, non_milk_items)
            }
            TimingModel::BasketLevel {
                items_per_basket,
                picking_time_per_basket_sec,
            } => {
                let time_per_item_sec = if items_per_basket > 0 {
                    picking_time_per_basket_sec / items_per_basket as f64
                } else {
                    0.0
                };
                PickingTimes::Basket {
                    time_per_item_sec,
                    basket_picking_time_per_order_sec: picking_time_per_basket_sec.max(0.0),
                }
            }
        };

        Self {
            picking,
            binning_time_per_order_sec: rates.binning_time_per_order_sec.max(0.0),
        }
    }

    /// Per-order time of every workforce staffed in `scenario`, in column order.
    pub fn category_times(&self, scenario: Scenario, policy: BinningPolicy) -> Vec<CategoryTime> {
        let binning = if scenario.includes_binning() {
            self.binning_time_per_order_sec
        } else {
            0.0
        };
        let separate = scenario.includes_binning() && policy == BinningPolicy::SeparateCategory;
        let merged_binning = if separate { 0.0 } else { binning };

        let mut times = match self.picking {
            PickingTimes::Split {
                milk_picking_time_per_order_sec,
                non_milk_picking_time_per_order_sec,
                ..
            } => vec![
                CategoryTime {
                    category: TaskCategory::Milk,
                    time_per_order_sec: milk_picking_time_per_order_sec,
                },
                CategoryTime {
                    category: TaskCategory::NonMilk,
                    time_per_order_sec: non_milk_picking_time_per_order_sec + merged_binning,
                },
            ],
            PickingTimes::Basket {
                basket_picking_time_per_order_sec,
                ..
            } => vec![CategoryTime {
                category: TaskCategory::Basket,
                time_per_order_sec: basket_picking_time_per_order_sec + merged_binning,
            }],
        };

        if separate {
            times.push(CategoryTime {
                category: TaskCategory::Binning,
                time_per_order_sec: binning,
            });
        }
        times
    }

    /// Whole-order time across every workforce in `scenario`.
    pub fn total_time_per_order_sec(&self, scenario: Scenario) -> f64 {
        self.category_times(scenario, BinningPolicy::MergedIntoPicking)
            .iter()
            .map(|t| t.time_per_order_sec)
            .sum()
    }
}

fn split_times(rates: &RateParameters, milk_items: f64, non_milk_items: f64) -> PickingTimes {
    let time_per_milk_item_sec = time_per_milk_item_sec(rates.milk_picking_rate_per_hour);
    let time_per_non_milk_item_sec =
        time_per_non_milk_item_sec(rates.non_milk_pick_time_sec, rates.non_milk_pick_qty);

    PickingTimes::Split {
        time_per_milk_item_sec,
        time_per_non_milk_item_sec,
        milk_items_per_order: milk_items,
        non_milk_items_per_order: non_milk_items,
        milk_picking_time_per_order_sec: time_per_milk_item_sec * milk_items,
        non_milk_picking_time_per_order_sec: time_per_non_milk_item_sec * non_milk_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_breakdown() -> OrderTimeBreakdown {
        OrderTimeBreakdown::derive(&RateParameters::default(), &TimingModel::per_item())
    }

    #[test]
    fn item_times_from_default_rates() {
        assert_eq!(time_per_milk_item_sec(1800.0), 2.0);
        assert_eq!(time_per_non_milk_item_sec(60.0, 3), 20.0);
    }

    #[test]
    fn zero_denominators_fall_back_to_zero() {
        assert_eq!(time_per_milk_item_sec(0.0), 0.0);
        assert_eq!(time_per_non_milk_item_sec(60.0, 0), 0.0);
    }

    #[test]
    fn binning_merges_into_non_milk_only_when_counted() {
        let breakdown = default_breakdown();
        let with = breakdown.category_times(Scenario::WithBinning, BinningPolicy::MergedIntoPicking);
        let without =
            breakdown.category_times(Scenario::WithoutBinning, BinningPolicy::MergedIntoPicking);

        assert_eq!(with.len(), 2);
        assert_eq!(with[0].time_per_order_sec, 2.0);
        assert_eq!(with[1].time_per_order_sec, 60.0);
        assert_eq!(without[1].time_per_order_sec, 40.0);
    }

    #[test]
    fn separate_binning_adds_a_third_category() {
        let times =
            default_breakdown().category_times(Scenario::WithBinning, BinningPolicy::SeparateCategory);
        let categories: Vec<TaskCategory> = times.iter().map(|t| t.category).collect();
        assert_eq!(
            categories,
            vec![TaskCategory::Milk, TaskCategory::NonMilk, TaskCategory::Binning]
        );
        assert_eq!(times[1].time_per_order_sec, 40.0);
        assert_eq!(times[2].time_per_order_sec, 20.0);
    }

    #[test]
    fn contribution_split_shares_basket_quantity() {
        let (milk, non_milk) = split_basket(4.0, 25.0);
        assert_eq!(milk, 1.0);
        assert_eq!(non_milk, 3.0);

        let (milk, non_milk) = split_basket(4.0, 140.0);
        assert_eq!(milk, 4.0);
        assert_eq!(non_milk, 0.0);
    }

    #[test]
    fn basket_level_uses_one_category() {
        let breakdown = OrderTimeBreakdown::derive(
            &RateParameters::default(),
            &TimingModel::BasketLevel {
                items_per_basket: 3,
                picking_time_per_basket_sec: 66.0,
            },
        );
        let times = breakdown.category_times(Scenario::WithBinning, BinningPolicy::MergedIntoPicking);
        assert_eq!(times.len(), 1);
        assert_eq!(times[0].category, TaskCategory::Basket);
        assert_eq!(times[0].time_per_order_sec, 86.0);
        assert_eq!(breakdown.total_time_per_order_sec(Scenario::WithoutBinning), 66.0);
    }

    #[test]
    fn empty_basket_has_zero_item_time() {
        let breakdown = OrderTimeBreakdown::derive(
            &RateParameters::default(),
            &TimingModel::BasketLevel {
                items_per_basket: 0,
                picking_time_per_basket_sec: 66.0,
            },
        );
        match breakdown.picking {
            PickingTimes::Basket {
                time_per_item_sec, ..
            } => assert_eq!(time_per_item_sec, 0.0),
            other => panic!("unexpected picking times: {other:?}"),
        }
    }
}
