//! Result rows: one per swept order count.

use serde::Serialize;

use crate::params::Scenario;

/// A workforce staffed independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Milk,
    NonMilk,
    Binning,
    /// Whole-basket picking (basket-level model).
    Basket,
    /// All tasks pooled into one workforce (orders-per-picker formulation).
    Combined,
}

impl TaskCategory {
    /// Column header of the rounded picker count.
    pub fn column_label(self) -> &'static str {
        match self {
            TaskCategory::Milk => "Milk Pickers",
            TaskCategory::NonMilk => "Non-Milk Pickers",
            TaskCategory::Binning => "Binning Pickers",
            TaskCategory::Basket => "Basket Pickers",
            TaskCategory::Combined => "Pickers",
        }
    }

    /// Column header of the unrounded picker count.
    pub fn exact_column_label(self) -> String {
        format!("{} (Exact)", self.column_label())
    }
}

/// Picker requirement of one category at one order count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryPickers {
    pub category: TaskCategory,
    /// Unrounded workload / shift capacity.
    pub exact: f64,
    /// `ceil(exact)`.
    pub rounded: u64,
}

impl CategoryPickers {
    pub fn new(category: TaskCategory, exact: f64) -> Self {
        Self {
            category,
            exact,
            rounded: exact.ceil() as u64,
        }
    }

    /// Exact count rounded to two decimals; display only.
    pub fn exact_display(&self) -> f64 {
        round_to_hundredths(self.exact)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub orders: u32,
    pub categories: Vec<CategoryPickers>,
    /// Sum of the independently rounded category counts, saturating at `u64::MAX`.
    pub total_rounded: u64,
}

impl ResultRow {
    pub fn new(orders: u32, categories: Vec<CategoryPickers>) -> Self {
        let total_rounded = categories
            .iter()
            .map(|c| c.rounded)
            .fold(0u64, u64::saturating_add);
        Self {
            orders,
            categories,
            total_rounded,
        }
    }

    pub fn pickers(&self, category: TaskCategory) -> Option<&CategoryPickers> {
        self.categories.iter().find(|c| c.category == category)
    }

    pub fn total_exact(&self) -> f64 {
        self.categories.iter().map(|c| c.exact).sum()
    }
}

/// All rows of one scenario, in sweep order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioTable {
    pub scenario: Scenario,
    /// Column order shared by every row.
    pub categories: Vec<TaskCategory>,
    pub rows: Vec<ResultRow>,
}

impl ScenarioTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn row_for_orders(&self, orders: u32) -> Option<&ResultRow> {
        self.rows.iter().find(|row| row.orders == orders)
    }

    /// Largest total picker count in the table (peak staffing).
    pub fn peak_total(&self) -> u64 {
        self.rows.iter().map(|r| r.total_rounded).max().unwrap_or(0)
    }
}

/// The two tables the estimator offers side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioTables {
    pub with_binning: ScenarioTable,
    pub without_binning: ScenarioTable,
}

impl ScenarioTables {
    pub fn get(&self, scenario: Scenario) -> &ScenarioTable {
        match scenario {
            Scenario::WithBinning => &self.with_binning,
            Scenario::WithoutBinning => &self.without_binning,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScenarioTable> {
        [&self.with_binning, &self.without_binning].into_iter()
    }
}

/// Two-decimal rounding with ties going to the even digit (`0.125` -> `0.12`).
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
