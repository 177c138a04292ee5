use std::fs::File;
use std::path::Path;

use picker_core::ScenarioTable;

use super::ExportError;

pub(crate) fn ensure_not_empty(table: &ScenarioTable) -> Result<(), ExportError> {
    if table.is_empty() {
        return Err(ExportError::EmptyTable);
    }

    Ok(())
}

pub(crate) fn create_output_file(path: &Path) -> Result<File, ExportError> {
    File::create(path).map_err(|source| ExportError::CreateFile {
        path: path.to_path_buf(),
        source,
    })
}
