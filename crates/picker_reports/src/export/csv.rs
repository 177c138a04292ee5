use picker_core::ScenarioTable;

use super::ExportError;
use crate::layout::{column_headers, row_cells};

pub(crate) fn export_to_csv_impl(
    table: &ScenarioTable,
    file: std::fs::File,
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record(column_headers(&table.categories))?;

    for row in &table.rows {
        wtr.write_record(row_cells(row).iter().map(|cell| cell.to_display_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
