use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, UInt32Array, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use picker_core::{ScenarioTable, TaskCategory};

use super::ExportError;
use crate::layout::column_keys;

pub(crate) fn export_to_parquet_impl(
    table: &ScenarioTable,
    file: std::fs::File,
) -> Result<(), ExportError> {
    let batch = build_record_batch(table)?;
    let props = WriterProperties::builder().build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}

fn build_record_batch(table: &ScenarioTable) -> Result<RecordBatch, arrow::error::ArrowError> {
    let schema = Arc::new(parquet_schema(&table.categories));
    let arrays = build_arrays(table);

    RecordBatch::try_new(schema, arrays)
}

fn parquet_schema(categories: &[TaskCategory]) -> Schema {
    let keys = column_keys(categories);
    let n = categories.len();

    let fields = keys
        .into_iter()
        .enumerate()
        .map(|(idx, key)| {
            let data_type = if idx == 0 {
                DataType::UInt32
            } else if idx <= n + 1 {
                DataType::UInt64
            } else {
                DataType::Float64
            };
            Field::new(key, data_type, false)
        })
        .collect::<Vec<_>>();

    Schema::new(fields)
}

fn build_arrays(table: &ScenarioTable) -> Vec<ArrayRef> {
    let rows = &table.rows;
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(table.categories.len() * 2 + 2);

    arrays.push(Arc::new(UInt32Array::from(
        rows.iter().map(|r| r.orders).collect::<Vec<_>>(),
    )));
    for idx in 0..table.categories.len() {
        arrays.push(Arc::new(UInt64Array::from(
            rows.iter()
                .map(|r| r.categories[idx].rounded)
                .collect::<Vec<_>>(),
        )));
    }
    arrays.push(Arc::new(UInt64Array::from(
        rows.iter().map(|r| r.total_rounded).collect::<Vec<_>>(),
    )));
    for idx in 0..table.categories.len() {
        arrays.push(Arc::new(Float64Array::from(
            rows.iter()
                .map(|r| r.categories[idx].exact_display())
                .collect::<Vec<_>>(),
        )));
    }

    arrays
}
