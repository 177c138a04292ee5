//! Picker requirement estimation for warehouse order fulfilment.
//!
//! Given picking rates, an item-mix model and a shift length, this crate computes
//! how many pickers each workforce needs for every order count in a swept range.
//! The computation is pure: an immutable [`EstimatorConfig`] goes in, ordered
//! result rows come out.
//!
//! # Quick Start
//!
//! ```
//! use picker_core::{estimate_both, EstimatorConfig, TaskCategory};
//!
//! let config = EstimatorConfig::default().with_sweep(100, 2000, 50);
//! let tables = estimate_both(&config);
//!
//! let row = tables.with_binning.row_for_orders(100).unwrap();
//! assert_eq!(row.pickers(TaskCategory::Milk).unwrap().rounded, 1);
//! assert_eq!(row.total_rounded, 2);
//! ```
//!
//! # Modules
//!
//! - [`params`]: rates, timing models, shift and scenario types
//! - [`sweep`]: the order-count range
//! - [`timing`]: per-order task times with zero-denominator fallbacks
//! - [`estimator`]: workload / shift capacity / ceiling pipeline
//! - [`table`]: result rows and scenario tables
//! - [`config`]: the immutable input bundle and its JSON form
//! - [`validation`]: input minimums checked by front ends

pub mod config;
pub mod estimator;
pub mod params;
pub mod sweep;
pub mod table;
pub mod timing;
pub mod validation;

pub use config::{ConfigError, EstimatorConfig};
pub use estimator::{
    estimate, estimate_both, estimate_by_capacity, orders_per_picker_per_shift,
    pickers_from_capacity, pickers_required,
};
pub use params::{BinningPolicy, RateParameters, Scenario, ShiftParameters, TimingModel};
pub use sweep::SweepRange;
pub use table::{CategoryPickers, ResultRow, ScenarioTable, ScenarioTables, TaskCategory};
pub use timing::{OrderTimeBreakdown, PickingTimes};
pub use validation::{ValidationError, ValidationErrors};
