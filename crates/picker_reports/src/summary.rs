//! Single-order summary values shown above the result tables.

use picker_core::{BinningPolicy, OrderTimeBreakdown, PickingTimes};

pub const BINNING_MERGED_NOTE: &str =
    "In the 'With Binning' scenario, the Binning Time is added to the Non-Milk Picker's workload.";
pub const BINNING_MERGED_BASKET_NOTE: &str =
    "In the 'With Binning' scenario, the Binning Time is added to the Basket Picker's workload.";
pub const BINNING_SEPARATE_NOTE: &str =
    "In the 'With Binning' scenario, binning is staffed by its own workforce.";

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMetric {
    pub label: &'static str,
    pub seconds: f64,
}

impl SummaryMetric {
    /// Whole seconds, e.g. `40 seconds`. Halves go to the even second.
    pub fn display_value(&self) -> String {
        format!("{} seconds", self.seconds.round_ties_even())
    }
}

pub fn summary_metrics(breakdown: &OrderTimeBreakdown) -> Vec<SummaryMetric> {
    let mut metrics = match breakdown.picking {
        PickingTimes::Split {
            milk_picking_time_per_order_sec,
            non_milk_picking_time_per_order_sec,
            ..
        } => vec![
            SummaryMetric {
                label: "Milk Picking Time",
                seconds: milk_picking_time_per_order_sec,
            },
            SummaryMetric {
                label: "Non-Milk Picking Time",
                seconds: non_milk_picking_time_per_order_sec,
            },
        ],
        PickingTimes::Basket {
            basket_picking_time_per_order_sec,
            ..
        } => vec![SummaryMetric {
            label: "Basket Picking Time",
            seconds: basket_picking_time_per_order_sec,
        }],
    };
    metrics.push(SummaryMetric {
        label: "Binning Time",
        seconds: breakdown.binning_time_per_order_sec,
    });
    metrics
}

pub fn binning_note(breakdown: &OrderTimeBreakdown, policy: BinningPolicy) -> &'static str {
    match (policy, breakdown.picking) {
        (BinningPolicy::SeparateCategory, _) => BINNING_SEPARATE_NOTE,
        (BinningPolicy::MergedIntoPicking, PickingTimes::Basket { .. }) => {
            BINNING_MERGED_BASKET_NOTE
        }
        (BinningPolicy::MergedIntoPicking, PickingTimes::Split { .. }) => BINNING_MERGED_NOTE,
    }
}

/// Multi-line text block for terminals.
pub fn render_summary(breakdown: &OrderTimeBreakdown, policy: BinningPolicy) -> String {
    let mut out = String::from("Calculation Summary for a Single Order\n");
    for metric in summary_metrics(breakdown) {
        out.push_str(&format!("  {:<22} {}\n", metric.label, metric.display_value()));
    }
    out.push_str(binning_note(breakdown, policy));
    out.push('\n');
    out
}
