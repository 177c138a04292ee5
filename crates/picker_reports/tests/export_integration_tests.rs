use std::fs::File;

use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use picker_core::{estimate_both, BinningPolicy, EstimatorConfig, TimingModel};
use picker_reports::layout::column_headers;
use picker_reports::{export_scenarios, ExportFormat};
use tempfile::tempdir;

#[test]
fn csv_round_trips_through_csv_reader() {
    let dir = tempdir().unwrap();
    let tables = estimate_both(&EstimatorConfig::default());
    let paths = export_scenarios(&tables, ExportFormat::Csv, dir.path()).unwrap();

    for (path, table) in paths.iter().zip(tables.iter()) {
        let mut reader = csv::Reader::from_path(path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, column_headers(&table.categories));

        let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(records.len(), 39);
        assert_eq!(&records[0][0], "100");
        assert_eq!(&records[38][0], "2000");

        for (record, row) in records.iter().zip(&table.rows) {
            let total: u64 = record[3].parse().unwrap();
            assert_eq!(total, row.total_rounded);
        }
    }
}

#[test]
fn parquet_keeps_every_row_and_column() {
    let dir = tempdir().unwrap();
    let config = EstimatorConfig::default()
        .with_model(TimingModel::basket_level())
        .with_binning_policy(BinningPolicy::SeparateCategory);
    let tables = estimate_both(&config);
    let paths = export_scenarios(&tables, ExportFormat::Parquet, dir.path()).unwrap();

    let expected_columns = [
        // orders, basket, binning, total, basket exact, binning exact
        6,
        // orders, basket, total, basket exact
        4,
    ];
    for (path, columns) in paths.iter().zip(expected_columns) {
        let file = File::open(path).unwrap();
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .unwrap()
            .build()
            .unwrap();

        let mut rows = 0;
        for batch in reader {
            let batch = batch.unwrap();
            assert_eq!(batch.num_columns(), columns);
            rows += batch.num_rows();
        }
        assert_eq!(rows, 39);
    }
}

#[test]
fn json_export_lists_categories_in_column_order() {
    let dir = tempdir().unwrap();
    let config = EstimatorConfig::default().with_sweep(100, 100, 1);
    let tables = estimate_both(&config);
    let paths = export_scenarios(&tables, ExportFormat::Json, dir.path()).unwrap();

    let contents = std::fs::read_to_string(&paths[0]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["categories"], serde_json::json!(["milk", "non_milk"]));
    assert_eq!(value["rows"][0]["orders"], 100);
}

#[test]
fn export_creates_missing_directories() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("reports").join("week-42");
    let tables = estimate_both(&EstimatorConfig::default());

    let paths = export_scenarios(&tables, ExportFormat::Xlsx, &nested).unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths.iter().all(|p| p.starts_with(&nested) && p.exists()));
}
