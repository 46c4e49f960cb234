//! Splits the task collection into the four board columns.

use crate::libs::task::{Task, TaskStatus};

/// One status bucket of the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<'a> {
    pub status: TaskStatus,
    pub tasks: Vec<&'a Task>,
}

impl Column<'_> {
    pub fn title(&self) -> &'static str {
        self.status.title()
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Header text, e.g. `Por Hacer (3)`.
    pub fn header(&self) -> String {
        format!("{} ({})", self.title(), self.count())
    }
}

/// The four columns in display order: todo, in progress, review, done.
#[derive(Debug, Clone, PartialEq)]
pub struct Columns<'a> {
    columns: [Column<'a>; 4],
}

impl<'a> Columns<'a> {
    pub fn iter(&self) -> std::slice::Iter<'_, Column<'a>> {
        self.columns.iter()
    }

    /// The bucket for `status`.
    pub fn column(&self, status: TaskStatus) -> &Column<'a> {
        match status {
            TaskStatus::Todo => &self.columns[0],
            TaskStatus::InProgress => &self.columns[1],
            TaskStatus::Review => &self.columns[2],
            TaskStatus::Done => &self.columns[3],
        }
    }

    pub fn count(&self, status: TaskStatus) -> usize {
        self.column(status).count()
    }

    /// Total number of tasks across all columns.
    pub fn total(&self) -> usize {
        self.columns.iter().map(Column::count).sum()
    }

    /// Tallest column, used to size the rendered table.
    pub fn depth(&self) -> usize {
        self.columns.iter().map(Column::count).max().unwrap_or(0)
    }
}

/// Buckets `tasks` by status. Order inside a bucket follows `tasks`; no
/// secondary sort is applied.
pub fn classify(tasks: &[Task]) -> Columns<'_> {
    let bucket = |status: TaskStatus| Column {
        status,
        tasks: tasks.iter().filter(|task| task.status == status).collect(),
    };

    Columns {
        columns: TaskStatus::ALL.map(bucket),
    }
}
