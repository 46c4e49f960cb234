//! Board export to CSV, JSON and Excel.
//!
//! Exports the board as currently classified: one record per task, in column
//! order (todo, in progress, review, done) and collection order within a
//! column. The JSON export keeps the column structure and counts.

use crate::libs::columns::Columns;
use crate::libs::formatter::format_due_date;
use crate::libs::task::Task;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Excel => "xlsx",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportTask {
    pub id: i64,
    pub column: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub due_date: String,
}

impl ExportTask {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.0,
            column: task.status.title().to_string(),
            title: task.title.clone(),
            description: task.description().unwrap_or_default().to_string(),
            status: task.status.to_string(),
            priority: task.priority.to_string(),
            due_date: task.due_date().map(format_due_date).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportColumn {
    pub status: String,
    pub title: String,
    pub count: usize,
    pub tasks: Vec<ExportTask>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportBoard {
    pub exported_at: String,
    pub total: usize,
    pub columns: Vec<ExportColumn>,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named after the current time,
    /// e.g. `tablero_export_20250101_120000.csv`.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "tablero_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the board and returns the file path.
    pub fn export(&self, columns: &Columns) -> Result<&Path> {
        match self.format {
            ExportFormat::Csv => self.export_csv(columns)?,
            ExportFormat::Json => self.export_json(columns)?,
            ExportFormat::Excel => self.export_excel(columns)?,
        }

        tracing::debug!(path = %self.output_path.display(), format = ?self.format, total = columns.total(), "board exported");
        Ok(&self.output_path)
    }

    fn rows(columns: &Columns) -> Vec<ExportTask> {
        columns.iter().flat_map(|column| column.tasks.iter().map(|task| ExportTask::from_task(task))).collect()
    }

    fn export_csv(&self, columns: &Columns) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        for task in Self::rows(columns) {
            wtr.serialize(task)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, columns: &Columns) -> Result<()> {
        let board = ExportBoard {
            exported_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            total: columns.total(),
            columns: columns
                .iter()
                .map(|column| ExportColumn {
                    status: column.status.to_string(),
                    title: column.title().to_string(),
                    count: column.count(),
                    tasks: column.tasks.iter().map(|task| ExportTask::from_task(task)).collect(),
                })
                .collect(),
        };

        let json = serde_json::to_string_pretty(&board)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, columns: &Columns) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        let headers = ["ID", "Column", "Title", "Description", "Status", "Priority", "Due date"];
        for (col, header) in (0u16..).zip(headers) {
            worksheet.write_string_with_format(0, col, header, &header_format)?;
        }

        for (row, task) in (1u32..).zip(Self::rows(columns)) {
            worksheet.write_number(row, 0, task.id as f64)?;
            worksheet.write_string(row, 1, &task.column)?;
            worksheet.write_string(row, 2, &task.title)?;
            worksheet.write_string(row, 3, &task.description)?;
            worksheet.write_string(row, 4, &task.status)?;
            worksheet.write_string(row, 5, &task.priority)?;
            worksheet.write_string(row, 6, &task.due_date)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
