// src/file.rs
// Spreadsheet export: build the .xlsx bytes and deliver them into the output dir.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rust_xlsxwriter::{Format, Workbook};
use time::OffsetDateTime;

use crate::config::consts::{EXPORT_STEM, XLSX_EXT, XLSX_MIME};
use crate::config::options::Category;
use crate::core::clock;
use crate::data::ReportTable;
use crate::error::ReportError;

/// A ready-to-deliver spreadsheet. Nothing has touched the disk yet.
#[derive(Clone, Debug)]
pub struct ExportArtifact {
    pub file_name: String,
    pub label: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// `report_<category>_<YYYY-MM-DD_HH-MM-SS>.xlsx`
///
/// The stamp keeps repeated exports from overwriting each other; the category
/// keeps the full and filtered downloads of the same fetch apart.
pub fn export_file_name(category: Category, fetched_at: OffsetDateTime) -> Result<String, ReportError> {
    let stamp = clock::file_stamp(fetched_at)?;
    Ok(format!("{EXPORT_STEM}_{}_{stamp}.{XLSX_EXT}", category.key()))
}

/// One sheet: header row, then one row per table row, in column order. No index column.
pub fn table_to_xlsx(table: &ReportTable) -> Result<Vec<u8>, ReportError> {
    let bounds = || ReportError::SheetBounds { rows: table.row_count(), cols: table.column_count() };

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (ci, name) in table.columns().iter().enumerate() {
        let col = u16::try_from(ci).map_err(|_| bounds())?;
        sheet.write_string_with_format(0, col, name, &bold)?;
    }

    for (ri, row) in table.rows().iter().enumerate() {
        let r = u32::try_from(ri + 1).map_err(|_| bounds())?;
        for (ci, cell) in row.iter().enumerate() {
            let col = u16::try_from(ci).map_err(|_| bounds())?;
            sheet.write_string(r, col, cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Spreadsheet bytes plus the name and label the frontends show for them.
pub fn export_artifact(
    table: &ReportTable,
    category: Category,
    fetched_at: OffsetDateTime,
) -> Result<ExportArtifact, ReportError> {
    let file_name = export_file_name(category, fetched_at)?;
    let bytes = table_to_xlsx(table)?;
    logf!(
        "Export: Built {} rows={} cols={} bytes={}",
        file_name,
        table.row_count(),
        table.column_count(),
        bytes.len()
    );
    Ok(ExportArtifact { file_name, label: category.export_label(), mime: XLSX_MIME, bytes })
}

/// Deliver an artifact into `dir` (created if needed). Returns the written path.
pub fn write_artifact(dir: &Path, artifact: &ExportArtifact) -> Result<PathBuf, ReportError> {
    if !dir.as_os_str().is_empty() {
        ensure_directory(dir)?;
    }
    let path = dir.join(&artifact.file_name);
    fs::write(&path, &artifact.bytes)?;
    logf!("Export: Wrote {} ({})", path.display(), artifact.mime);
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ReportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))
        .into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
