use picker_core::ScenarioTable;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::layout::{column_headers, column_widths, row_cells};

pub const SHEET_NAME: &str = "Picker Requirement";

pub(crate) fn build_workbook(table: &ScenarioTable) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, header) in column_headers(&table.categories).iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
    }

    for (idx, row) in table.rows.iter().enumerate() {
        let sheet_row = idx as u32 + 1;
        for (col, cell) in row_cells(row).iter().enumerate() {
            worksheet.write_number(sheet_row, col as u16, cell.as_f64())?;
        }
    }

    for (col, width) in column_widths(table).iter().enumerate() {
        worksheet.set_column_width(col as u16, *width as f64)?;
    }

    Ok(workbook)
}
