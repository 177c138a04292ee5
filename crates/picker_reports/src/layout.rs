//! Column layout shared by every table surface (terminal, files, UI).
//!
//! Order: `Orders to Fulfill`, one rounded column per category, `Total Pickers`,
//! then one `(Exact)` column per category.

use picker_core::{ResultRow, ScenarioTable, TaskCategory};

pub const ORDERS_HEADER: &str = "Orders to Fulfill";
pub const TOTAL_HEADER: &str = "Total Pickers";

/// Padding added to the widest value of a column.
pub const COLUMN_PADDING: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
    Count(u64),
    /// Exact picker count, already rounded to two decimals.
    Exact(f64),
}

impl CellValue {
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Count(value) => value.to_string(),
            CellValue::Exact(value) => format_decimal(*value),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            CellValue::Count(value) => *value as f64,
            CellValue::Exact(value) => *value,
        }
    }
}

/// Whole numbers keep one decimal (`1.0`) so exact columns read as decimals.
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Header labels in column order.
///
/// # Arguments
///
/// * `categories` - Staffed categories of the table, in column order
pub fn column_headers(categories: &[TaskCategory]) -> Vec<String> {
    let mut headers = Vec::with_capacity(categories.len() * 2 + 2);
    headers.push(ORDERS_HEADER.to_string());
    headers.extend(categories.iter().map(|c| c.column_label().to_string()));
    headers.push(TOTAL_HEADER.to_string());
    headers.extend(categories.iter().map(|c| c.exact_column_label()));
    headers
}

/// Machine-friendly column names (`milk_pickers_exact`), used where spaces are awkward.
pub fn column_keys(categories: &[TaskCategory]) -> Vec<String> {
    column_headers(categories)
        .iter()
        .map(|header| to_key(header))
        .collect()
}

fn to_key(header: &str) -> String {
    header
        .chars()
        .filter_map(|c| match c {
            ' ' | '-' => Some('_'),
            '(' | ')' => None,
            other => Some(other.to_ascii_lowercase()),
        })
        .collect()
}

/// Cells of one row, aligned with [`column_headers`].
///
/// Rounded counts are [`CellValue::Count`]; exact counts are
/// [`CellValue::Exact`], rounded to two decimals.
pub fn row_cells(row: &ResultRow) -> Vec<CellValue> {
    let mut cells = Vec::with_capacity(row.categories.len() * 2 + 2);
    cells.push(CellValue::Count(row.orders as u64));
    cells.extend(row.categories.iter().map(|c| CellValue::Count(c.rounded)));
    cells.push(CellValue::Count(row.total_rounded));
    cells.extend(row.categories.iter().map(|c| CellValue::Exact(c.exact_display())));
    cells
}

/// Width of every column: longest stringified value or header, plus padding.
pub fn column_widths(table: &ScenarioTable) -> Vec<usize> {
    let mut widths: Vec<usize> = column_headers(&table.categories)
        .iter()
        .map(|h| h.chars().count())
        .collect();

    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(row_cells(row)) {
            *width = (*width).max(cell.to_display_string().chars().count());
        }
    }

    widths.iter().map(|w| w + COLUMN_PADDING).collect()
}

/// Plain-text rendering with right-aligned, auto-sized columns.
pub fn render_text_table(table: &ScenarioTable) -> String {
    let widths = column_widths(table);
    let mut out = String::new();

    let headers = column_headers(&table.categories);
    push_line(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(w - 1)).collect();
    push_line(&mut out, &rule, &widths);

    for row in &table.rows {
        let cells: Vec<String> = row_cells(row).iter().map(|c| c.to_display_string()).collect();
        push_line(&mut out, &cells, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    for (cell, width) in cells.iter().zip(widths) {
        out.push_str(&format!("{cell:>width$}"));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_core::{estimate, EstimatorConfig, Scenario};

    fn small_table() -> ScenarioTable {
        let config = EstimatorConfig::default().with_sweep(100, 200, 50);
        estimate(&config, Scenario::WithBinning)
    }

    #[test]
    fn headers_follow_fixed_order() {
        let table = small_table();
        assert_eq!(
            column_headers(&table.categories),
            vec![
                "Orders to Fulfill",
                "Milk Pickers",
                "Non-Milk Pickers",
                "Total Pickers",
                "Milk Pickers (Exact)",
                "Non-Milk Pickers (Exact)",
            ]
        );
        assert_eq!(column_keys(&table.categories)[5], "non_milk_pickers_exact");
    }

    #[test]
    fn cells_line_up_with_headers() {
        let table = small_table();
        let cells = row_cells(&table.rows[0]);
        assert_eq!(cells.len(), column_headers(&table.categories).len());
        assert_eq!(cells[0], CellValue::Count(100));
        assert_eq!(cells[3], CellValue::Count(2));
        assert_eq!(cells[4], CellValue::Exact(0.03));
        assert_eq!(cells[5], CellValue::Exact(0.83));
    }

    #[test]
    fn widths_are_header_driven_for_short_values() {
        let widths = column_widths(&small_table());
        assert_eq!(widths[0], "Orders to Fulfill".len() + 2);
        assert_eq!(widths[5], "Non-Milk Pickers (Exact)".len() + 2);
    }

    #[test]
    fn widths_grow_with_long_values() {
        let config = EstimatorConfig::default()
            .with_model(picker_core::TimingModel::PerItem {
                milk_items_per_order: 1_000_000,
                non_milk_items_per_order: 0,
            })
            .with_shift_minutes(1)
            .with_sweep(4_000_000_000, 4_000_000_000, 1);
        let table = estimate(&config, Scenario::WithoutBinning);
        let widths = column_widths(&table);

        let milk_digits = table.rows[0].categories[0].rounded.to_string().len();
        assert!(milk_digits > "Milk Pickers".len());
        assert_eq!(widths[1], milk_digits + 2);
        assert_eq!(widths[2], "Non-Milk Pickers".len() + 2);
    }

    #[test]
    fn whole_decimals_keep_one_fraction_digit() {
        assert_eq!(format_decimal(1.0), "1.0");
        assert_eq!(format_decimal(0.83), "0.83");
        assert_eq!(format_decimal(0.0), "0.0");
    }

    #[test]
    fn text_table_has_header_rule_and_rows() {
        let text = render_text_table(&small_table());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 + 3);
        assert!(lines[0].contains("Orders to Fulfill"));
        assert!(lines[2].trim_start().starts_with("100"));
    }
}
