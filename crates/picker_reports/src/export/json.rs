use picker_core::ScenarioTable;

use super::ExportError;

pub(crate) fn export_to_json_impl(
    table: &ScenarioTable,
    file: std::fs::File,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(file, table)?;
    Ok(())
}
