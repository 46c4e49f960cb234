use super::columns::Columns;
use super::formatter::format_due_date;
use super::task::Task;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Prints the four columns side by side, headers with counts.
    pub fn board(columns: &Columns) {
        Self::board_table(columns).printstd();
    }

    pub fn board_table(columns: &Columns) -> Table {
        let mut table = Table::new();
        table.set_titles(Row::new(columns.iter().map(|column| Cell::new(&column.header()).style_spec("bc")).collect()));

        for index in 0..columns.depth() {
            let cells = columns
                .iter()
                .map(|column| match column.tasks.get(index) {
                    Some(task) => Cell::new(&Self::card(task)).style_spec(task.priority.tag().style_spec()),
                    None => Cell::new(""),
                })
                .collect();
            table.add_row(Row::new(cells));
        }

        table
    }

    /// Card text: id, title and priority badge, then description and due
    /// date when present.
    pub fn card(task: &Task) -> String {
        let mut lines = vec![format!("#{} {} [{}]", task.id, task.title, task.priority)];
        if let Some(description) = task.description() {
            lines.push(description.to_string());
        }
        if let Some(due_date) = task.due_date() {
            lines.push(format!("📅 {}", format_due_date(due_date)));
        }
        lines.join("\n")
    }

    pub fn task(task: &Task) {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row!["DESCRIPTION", task.description().unwrap_or("")]);
        table.add_row(row!["STATUS", format!("{} ({})", task.status.title(), task.status)]);
        table.add_row(Row::new(vec![
            Cell::new("PRIORITY"),
            Cell::new(task.priority.as_str()).style_spec(task.priority.tag().style_spec()),
        ]));
        table.add_row(row!["DUE DATE", task.due_date().map(format_due_date).unwrap_or_default()]);
        table.add_row(row!["CREATED", task.created_at.as_deref().unwrap_or("")]);
        table.add_row(row!["UPDATED", task.updated_at.as_deref().unwrap_or("")]);
        table.printstd();
    }
}
