mod common;

#[cfg(test)]
mod tests {
    use super::common::sample_tasks;
    use tablero::libs::columns::classify;
    use tablero::libs::export::{ExportBoard, ExportFormat, ExportTask, Exporter};
    use tablero::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        tasks: Vec<Task>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let mut tasks = sample_tasks();
            tasks[0].description = Some("Usage and install".to_string());
            tasks[0].due_date = Some("2024-03-15T10:00:00".to_string());
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                tasks,
            }
        }
    }

    #[test]
    fn test_default_file_name() {
        let exporter = Exporter::new(ExportFormat::Excel, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("tablero_export_"));
        assert!(name.ends_with(".xlsx"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_export_in_column_order(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("board.csv");
        let columns = classify(&ctx.tasks);

        Exporter::new(ExportFormat::Csv, Some(path.clone())).export(&columns).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<ExportTask> = reader.deserialize().map(Result::unwrap).collect();
        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 5, 2, 3, 4, 6]);

        assert_eq!(rows[0].column, "Por Hacer");
        assert_eq!(rows[0].status, "todo");
        assert_eq!(rows[0].description, "Usage and install");
        assert_eq!(rows[0].due_date, "15/03/2024");
        assert_eq!(rows[2].status, "in_progress");
        assert_eq!(rows[5].priority, "low");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_export_keeps_columns(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("board.json");
        let columns = classify(&ctx.tasks);

        let written = Exporter::new(ExportFormat::Json, Some(path.clone())).export(&columns).unwrap().to_path_buf();
        assert_eq!(written, path);

        let board: ExportBoard = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(board.total, 6);
        let counts: Vec<(String, usize)> = board.columns.iter().map(|c| (c.status.clone(), c.count)).collect();
        assert_eq!(
            counts,
            vec![
                ("todo".to_string(), 2),
                ("in_progress".to_string(), 1),
                ("review".to_string(), 1),
                ("done".to_string(), 2)
            ]
        );
        assert_eq!(board.columns[3].title, "Completado");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_excel_export_writes_file(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("board.xlsx");
        let columns = classify(&ctx.tasks);

        Exporter::new(ExportFormat::Excel, Some(path.clone())).export(&columns).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_empty_board_export(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("empty.json");
        let columns = classify(&[]);

        Exporter::new(ExportFormat::Json, Some(path.clone())).export(&columns).unwrap();

        let board: ExportBoard = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(board.total, 0);
        assert_eq!(board.columns.len(), 4);
        assert!(board.columns.iter().all(|column| column.tasks.is_empty()));
    }
}
