//! Table export.
//!
//! Every writer takes one [`ScenarioTable`] and produces a single-sheet /
//! single-file rendering with the columns from [`crate::layout`].

use std::path::{Path, PathBuf};

use picker_core::{Scenario, ScenarioTable, ScenarioTables};
use tracing::info;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/parquet.rs"]
mod parquet;
#[path = "export/writer_utils.rs"]
mod writer_utils;
#[path = "export/xlsx.rs"]
mod xlsx;

pub use xlsx::SHEET_NAME;

/// Failure while writing a table.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no rows to export")]
    EmptyTable,

    #[error("failed to create {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV export failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Arrow batch construction failed: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Parquet export failed: {0}")]
    Parquet(#[from] ::parquet::errors::ParquetError),

    #[error("XLSX export failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),
}

/// File format of an exported table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Parquet,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Parquet => "parquet",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Default file name for a scenario, e.g. `picker_req_with_binning.xlsx`.
    pub fn file_name(self, scenario: Scenario) -> String {
        format!("{}.{}", scenario.file_stem(), self.extension())
    }
}

/// Export one scenario table to CSV with header labels as the first record.
///
/// # Arguments
///
/// * `table` - Scenario table to export
/// * `path` - Path to output CSV file
///
/// # Errors
///
/// Returns an error if the table is empty, or if file creation or CSV writing fails.
pub fn export_to_csv(table: &ScenarioTable, path: impl AsRef<Path>) -> Result<(), ExportError> {
    writer_utils::ensure_not_empty(table)?;
    let file = writer_utils::create_output_file(path.as_ref())?;
    csv::export_to_csv_impl(table, file)
}

/// Export one scenario table to pretty-printed JSON.
///
/// # Arguments
///
/// * `table` - Scenario table to export
/// * `path` - Path to output JSON file
///
/// # Errors
///
/// Returns an error if the table is empty, or if file creation or JSON serialization fails.
pub fn export_to_json(table: &ScenarioTable, path: impl AsRef<Path>) -> Result<(), ExportError> {
    writer_utils::ensure_not_empty(table)?;
    let file = writer_utils::create_output_file(path.as_ref())?;
    json::export_to_json_impl(table, file)
}

/// Export one scenario table to Parquet, one column per table column.
///
/// # Arguments
///
/// * `table` - Scenario table to export
/// * `path` - Path to output Parquet file
///
/// # Errors
///
/// Returns an error if the table is empty, or if batch construction or Parquet writing fails.
pub fn export_to_parquet(
    table: &ScenarioTable,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    writer_utils::ensure_not_empty(table)?;
    let file = writer_utils::create_output_file(path.as_ref())?;
    parquet::export_to_parquet_impl(table, file)
}

/// Export one scenario table to a single-sheet workbook with auto-sized columns.
///
/// # Arguments
///
/// * `table` - Scenario table to export
/// * `path` - Path to output XLSX file
///
/// # Errors
///
/// Returns an error if the table is empty or the workbook cannot be written.
pub fn export_to_xlsx(table: &ScenarioTable, path: impl AsRef<Path>) -> Result<(), ExportError> {
    writer_utils::ensure_not_empty(table)?;
    let mut workbook = xlsx::build_workbook(table)?;
    workbook.save(path.as_ref())?;
    Ok(())
}

/// Same workbook as [`export_to_xlsx`], kept in memory for download buttons.
///
/// # Errors
///
/// Returns an error if the table is empty or the workbook cannot be assembled.
pub fn xlsx_bytes(table: &ScenarioTable) -> Result<Vec<u8>, ExportError> {
    writer_utils::ensure_not_empty(table)?;
    let mut workbook = xlsx::build_workbook(table)?;
    Ok(workbook.save_to_buffer()?)
}

/// Export one scenario table in the given format.
///
/// # Arguments
///
/// * `table` - Scenario table to export
/// * `format` - Output format
/// * `path` - Path to output file
///
/// # Errors
///
/// Returns whatever the format's writer returns.
pub fn export_table(
    table: &ScenarioTable,
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    match format {
        ExportFormat::Csv => export_to_csv(table, path)?,
        ExportFormat::Json => export_to_json(table, path)?,
        ExportFormat::Parquet => export_to_parquet(table, path)?,
        ExportFormat::Xlsx => export_to_xlsx(table, path)?,
    }
    info!(
        scenario = table.scenario.label(),
        rows = table.len(),
        path = %path.display(),
        "exported picker table"
    );
    Ok(())
}

/// Write both scenario tables into `dir` under their default file names.
///
/// `dir` is created if missing. Returns the written paths, with-binning first.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or either export fails.
pub fn export_scenarios(
    tables: &ScenarioTables,
    format: ExportFormat,
    dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, ExportError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    tables
        .iter()
        .map(|table| {
            let path = dir.join(format.file_name(table.scenario));
            export_table(table, format, &path)?;
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_core::{estimate, estimate_both, EstimatorConfig};
    use tempfile::{tempdir, NamedTempFile};

    fn table() -> ScenarioTable {
        estimate(
            &EstimatorConfig::default().with_sweep(100, 300, 100),
            Scenario::WithBinning,
        )
    }

    #[test]
    fn test_export_to_csv() {
        let file = NamedTempFile::new().unwrap();
        export_to_csv(&table(), file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Orders to Fulfill,Milk Pickers,Non-Milk Pickers,Total Pickers,Milk Pickers (Exact),Non-Milk Pickers (Exact)"
        );
        assert_eq!(lines.next().unwrap(), "100,1,1,2,0.03,0.83");
        assert_eq!(contents.lines().count(), 4);
    }

    #[test]
    fn test_export_to_json() {
        let file = NamedTempFile::new().unwrap();
        export_to_json(&table(), file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["scenario"], "with_binning");
        assert_eq!(value["rows"].as_array().unwrap().len(), 3);
        assert_eq!(value["rows"][0]["total_rounded"], 2);
    }

    #[test]
    fn test_export_to_parquet() {
        let file = NamedTempFile::new().unwrap();
        export_to_parquet(&table(), file.path()).unwrap();
        assert!(std::fs::metadata(file.path()).unwrap().len() > 0);
    }

    #[test]
    fn test_xlsx_bytes_are_a_zip_container() {
        let bytes = xlsx_bytes(&table()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn empty_table_is_rejected() {
        let config = EstimatorConfig::default().with_sweep(10, 1, 1);
        let empty = estimate(&config, Scenario::WithoutBinning);
        let file = NamedTempFile::new().unwrap();

        assert!(matches!(
            export_to_csv(&empty, file.path()),
            Err(ExportError::EmptyTable)
        ));
        assert!(matches!(xlsx_bytes(&empty), Err(ExportError::EmptyTable)));
    }

    #[test]
    fn both_scenarios_land_under_default_names() {
        let dir = tempdir().unwrap();
        let tables = estimate_both(&EstimatorConfig::default());
        let paths = export_scenarios(&tables, ExportFormat::Xlsx, dir.path()).unwrap();

        assert_eq!(
            paths,
            vec![
                dir.path().join("picker_req_with_binning.xlsx"),
                dir.path().join("picker_req_without_binning.xlsx"),
            ]
        );
        assert!(paths.iter().all(|p| p.exists()));
    }
}
