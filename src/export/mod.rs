// src/export/mod.rs

pub mod csv;
pub(crate) mod fs_utils;
pub mod json;
mod model;

pub use model::{ChoreExport, HEADERS};

use crate::errors::AppResult;
use crate::models::ChoreRecord;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path, rows: usize) {
    success(format!(
        "{label} export completed: {} ({rows} rows)",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }

    /// Fixed download name used when no file is given.
    pub fn default_file_name(&self) -> String {
        format!("kaji.{}", self.as_str())
    }

    /// Serialize the full record list.
    pub fn render(&self, records: &[ChoreRecord]) -> AppResult<Vec<u8>> {
        let rows: Vec<ChoreExport> = records.iter().map(ChoreExport::from).collect();
        match self {
            ExportFormat::Csv => self::csv::to_csv_bytes(&rows),
            ExportFormat::Json => self::json::to_json_bytes(&rows),
        }
    }
}
