//! Presentation and export of picker requirement tables.
//!
//! - [`layout`]: fixed column order, cell formatting and auto-sized widths
//! - [`export`]: CSV, JSON, Parquet and XLSX writers
//! - [`summary`]: the single-order time breakdown shown above the tables
//! - [`logging`]: tracing setup shared by the binaries

pub mod export;
pub mod layout;
pub mod logging;
pub mod summary;

pub use export::{
    export_scenarios, export_table, export_to_csv, export_to_json, export_to_parquet,
    export_to_xlsx, xlsx_bytes, ExportError, ExportFormat,
};
pub use layout::{column_headers, column_widths, render_text_table};
pub use summary::{render_summary, summary_metrics, SummaryMetric};
