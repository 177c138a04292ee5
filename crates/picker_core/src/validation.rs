//! Input minimums enforced before estimating.
//!
//! The estimator itself never rejects input; front ends call
//! [`EstimatorConfig::validate`] and report every violation at once.

use crate::config::EstimatorConfig;
use crate::params::TimingModel;

pub const MIN_SHIFT_DURATION_MIN: u32 = 30;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("milk items per order must be at least 1 (got {0})")]
    MilkItemsPerOrder(u32),

    #[error("milk picking rate must be at least 1 item per hour (got {0})")]
    MilkPickingRate(f64),

    #[error("non-milk picking time must be at least 1 second (got {0})")]
    NonMilkPickTime(f64),

    #[error("quantity for non-milk picking time must be at least 1 (got {0})")]
    NonMilkPickQty(u32),

    #[error("binning time per order cannot be negative (got {0})")]
    BinningTime(f64),

    #[error("shift duration must be at least {MIN_SHIFT_DURATION_MIN} minutes (got {0})")]
    ShiftDuration(u32),

    #[error("start order count must be at least 1 (got {0})")]
    StartOrders(u32),

    #[error("end order count {end} is below start order count {start}")]
    EndBeforeStart { start: u32, end: u32 },

    #[error("step size must be at least 1")]
    Step,

    #[error("average basket quantity must be positive (got {0})")]
    AverageBasketQuantity(f64),

    #[error("milk contribution must be between 0 and 100 percent (got {0})")]
    MilkContribution(f64),

    #[error("items per basket must be at least 1 (got {0})")]
    ItemsPerBasket(u32),

    #[error("picking time per basket must be at least 1 second (got {0})")]
    BasketPickingTime(f64),
}

/// Every rule a config broke, in field order.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid estimator input: {}", join_messages(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl EstimatorConfig {
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        match self.model {
            TimingModel::PerItem {
                milk_items_per_order,
                ..
            } => {
                if milk_items_per_order < 1 {
                    errors.push(ValidationError::MilkItemsPerOrder(milk_items_per_order));
                }
            }
            TimingModel::ContributionSplit {
                average_basket_quantity,
                milk_contribution_percent,
            } => {
                if !(average_basket_quantity > 0.0) {
                    errors.push(ValidationError::AverageBasketQuantity(average_basket_quantity));
                }
                if !(0.0..=100.0).contains(&milk_contribution_percent) {
                    errors.push(ValidationError::MilkContribution(milk_contribution_percent));
                }
            }
            TimingModel::BasketLevel {
                items_per_basket,
                picking_time_per_basket_sec,
            } => {
                if items_per_basket < 1 {
                    errors.push(ValidationError::ItemsPerBasket(items_per_basket));
                }
                if !(picking_time_per_basket_sec >= 1.0) {
                    errors.push(ValidationError::BasketPickingTime(picking_time_per_basket_sec));
                }
            }
        }

        if !self.model.is_basket_level() {
            let rates = &self.rates;
            if !(rates.milk_picking_rate_per_hour >= 1.0) {
                errors.push(ValidationError::MilkPickingRate(rates.milk_picking_rate_per_hour));
            }
            if !(rates.non_milk_pick_time_sec >= 1.0) {
                errors.push(ValidationError::NonMilkPickTime(rates.non_milk_pick_time_sec));
            }
            if rates.non_milk_pick_qty < 1 {
                errors.push(ValidationError::NonMilkPickQty(rates.non_milk_pick_qty));
            }
        }
        if !(self.rates.binning_time_per_order_sec >= 0.0) {
            errors.push(ValidationError::BinningTime(self.rates.binning_time_per_order_sec));
        }

        if self.shift.shift_duration_min < MIN_SHIFT_DURATION_MIN {
            errors.push(ValidationError::ShiftDuration(self.shift.shift_duration_min));
        }

        let sweep = &self.sweep;
        if sweep.start < 1 {
            errors.push(ValidationError::StartOrders(sweep.start));
        }
        if sweep.end < sweep.start {
            errors.push(ValidationError::EndBeforeStart {
                start: sweep.start,
                end: sweep.end,
            });
        }
        if sweep.step < 1 {
            errors.push(ValidationError::Step);
        }

        errors
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}
