//! Constants used throughout the UI.

pub const APP_TITLE: &str = "Comparative Picker Requirement Calculator";

pub const APP_SUBTITLE: &str =
    "Analyze picker needs by including or excluding binning time from the total workload.";

/// Width of the input sidebar in points.
pub const SIDEBAR_WIDTH: f32 = 300.0;

/// Maximum height of a result table before it scrolls.
pub const TABLE_MAX_HEIGHT: f32 = 420.0;

pub const CHART_HEIGHT: f32 = 260.0;

/// Minimum shift length accepted by the input form, in minutes.
pub const MIN_SHIFT_DURATION_MIN: u32 = picker_core::validation::MIN_SHIFT_DURATION_MIN;
