use crate::db::store::ChoreStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use std::fs;
use std::path::PathBuf;

/// Where an export went and how many records it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub rows: usize,
}

/// High-level export logic. Reporting is left to the caller.
pub struct ExportLogic;

impl ExportLogic {
    /// Write every record to `file` (or the fixed default name).
    pub fn export(
        store: &ChoreStore,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<ExportReport> {
        let path = file
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(format.default_file_name()));

        ensure_writable(&path, force)?;

        let bytes = store.export(format)?;
        let rows = store.count()? as usize;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, bytes)?;

        store.audit(
            "export",
            &path.to_string_lossy(),
            &format!("{} rows exported as {}", rows, format.as_str()),
        );

        Ok(ExportReport { path, rows })
    }
}
