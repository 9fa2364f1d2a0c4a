// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_csv_records, export_json};
use crate::export::model::StatusRowExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;

/// High level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the status history of one ticket.
    ///
    /// - `format`: csv | json | xlsx
    /// - `path`: output file; an existing file needs `force` or confirmation
    pub fn export(
        rows: &[StatusRowExport],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if rows.is_empty() {
            warning("No status changes found; writing an empty report.");
        }

        match format {
            ExportFormat::Csv => export_csv(rows, path),
            ExportFormat::Json => export_json(rows, path),
            ExportFormat::Xlsx => export_xlsx(rows, path),
        }
    }

    /// Write rows under an explicit header as CSV.
    pub fn export_table(
        header: &[&str],
        rows: &[Vec<String>],
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;
        export_csv_records(header, rows, path)
    }
}
