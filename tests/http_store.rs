#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use tablero::api::{BackendConfig, HttpTaskStore, StoreError, TaskStore};
    use tablero::commands::add::{self, AddArgs};
    use tablero::commands::form::TaskFields;
    use tablero::commands::Context;
    use tablero::libs::board::Board;
    use tablero::libs::task::{Task, TaskId, TaskPayload, TaskPriority, TaskStatus};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// A request as received by the test server.
    #[derive(Debug)]
    struct Recorded {
        method: String,
        path: String,
        body: String,
    }

    impl Recorded {
        fn json(&self) -> Value {
            serde_json::from_str(&self.body).unwrap()
        }
    }

    /// Answers one connection per canned response, in order, and hands back
    /// what it received.
    async fn serve(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<Recorded>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let mut received = Vec::new();
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                received.push(read_request(&mut socket).await);

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    if status < 400 { "OK" } else { "Error" },
                    body.len(),
                    body
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
            }
            received
        });

        (url, handle)
    }

    async fn read_request(socket: &mut TcpStream) -> Recorded {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 1024];

        loop {
            let read = socket.read(&mut chunk).await.unwrap();
            buffer.extend_from_slice(&chunk[..read]);

            if let Some(end) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buffer[..end]).to_string();
                let length = head
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);

                if buffer.len() >= end + 4 + length || read == 0 {
                    let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
                    return Recorded {
                        method: request_line.next().unwrap_or_default().to_string(),
                        path: request_line.next().unwrap_or_default().to_string(),
                        body: String::from_utf8_lossy(&buffer[end + 4..]).to_string(),
                    };
                }
            }

            assert!(read > 0, "connection closed before the request was complete");
        }
    }

    fn store(url: &str) -> HttpTaskStore {
        HttpTaskStore::new(&BackendConfig {
            api_url: format!("{url}/"),
            timeout_secs: 5,
        })
        .unwrap()
    }

    fn task_json(id: i64, status: &str) -> String {
        json!({
            "id": id,
            "title": "Fix bug",
            "description": null,
            "status": status,
            "priority": "high",
            "due_date": "2024-03-15T00:00:00",
            "created_at": "2024-03-01T09:00:00",
            "updated_at": "2024-03-01T09:00:00",
            "user_id": 1
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_list_tasks() {
        let (url, server) = serve(vec![(200, format!("[{}]", task_json(7, "review")))]).await;
        let store = store(&url);
        assert_eq!(store.base_url(), url);

        let tasks = store.list().await.unwrap();
        let requests = server.await.unwrap();

        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/api/tasks");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, TaskStatus::Review);
        assert_eq!(tasks[0].created_at.as_deref(), Some("2024-03-01T09:00:00"));
    }

    #[tokio::test]
    async fn test_create_posts_json_payload() {
        let (url, server) = serve(vec![(201, task_json(7, "todo"))]).await;
        let payload = TaskPayload {
            title: "Fix bug".to_string(),
            description: None,
            status: TaskStatus::Todo,
            priority: TaskPriority::High,
            due_date: Some("2024-03-15".to_string()),
        };

        let task = store(&url).create(&payload).await.unwrap();
        let requests = server.await.unwrap();

        assert_eq!(task.id, TaskId(7));
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/api/tasks");
        assert_eq!(
            requests[0].json(),
            json!({
                "title": "Fix bug",
                "description": null,
                "status": "todo",
                "priority": "high",
                "due_date": "2024-03-15"
            })
        );
    }

    #[tokio::test]
    async fn test_delete_ignores_body() {
        let (url, server) = serve(vec![(200, "{\"message\": \"deleted\"}".to_string())]).await;

        store(&url).delete(TaskId(3)).await.unwrap();
        let requests = server.await.unwrap();

        assert_eq!(requests[0].method, "DELETE");
        assert_eq!(requests[0].path, "/api/tasks/3");
    }

    #[tokio::test]
    async fn test_error_status() {
        let (url, server) = serve(vec![(404, "{\"error\": \"not found\"}".to_string())]).await;

        let payload = TaskPayload::from(&Task::new(TaskId(99), "Gone"));
        let err = store(&url).update(TaskId(99), &payload).await.unwrap_err();
        server.await.unwrap();

        match err {
            StoreError::Status { method, url, status } => {
                assert_eq!(method, "PUT");
                assert!(url.ends_with("/api/tasks/99"));
                assert_eq!(status, 404);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (url, server) = serve(vec![(200, "<html>oops</html>".to_string())]).await;

        let err = store(&url).list().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_store() {
        let err = store("http://127.0.0.1:1").list().await.unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
    }

    #[tokio::test]
    async fn test_board_move_over_http() {
        let (url, server) = serve(vec![
            (200, format!("[{}]", task_json(7, "in_progress"))),
            (200, task_json(7, "done")),
            (200, format!("[{}]", task_json(7, "done"))),
        ])
        .await;

        let mut board = Board::new(store(&url));
        board.mount().await.unwrap();
        board.move_task(TaskId(7), TaskStatus::Done).await.unwrap();
        let requests = server.await.unwrap();

        let lines: Vec<(&str, &str)> = requests.iter().map(|r| (r.method.as_str(), r.path.as_str())).collect();
        assert_eq!(lines, vec![("GET", "/api/tasks"), ("PUT", "/api/tasks/7"), ("GET", "/api/tasks")]);

        let body = requests[1].json();
        assert_eq!(body["status"], "done");
        assert_eq!(body["title"], "Fix bug");
        assert_eq!(body["priority"], "high");
        assert_eq!(body["due_date"], "2024-03-15T00:00:00");
        assert!(body.get("created_at").is_none());
        assert_eq!(board.columns().count(TaskStatus::Done), 1);
    }

    #[tokio::test]
    async fn test_add_creates_task_when_initial_load_fails() {
        let (url, server) = serve(vec![
            (500, "{\"error\": \"database unavailable\"}".to_string()),
            (201, task_json(7, "todo")),
            (200, format!("[{}]", task_json(7, "todo"))),
        ])
        .await;
        let context = Context {
            backend: BackendConfig {
                api_url: url,
                timeout_secs: 5,
            },
        };
        let args = AddArgs {
            fields: TaskFields {
                title: Some("Fix bug".to_string()),
                priority: Some(TaskPriority::High),
                ..TaskFields::default()
            },
        };

        add::cmd(&context, args).await.unwrap();
        let requests = server.await.unwrap();

        let lines: Vec<(&str, &str)> = requests.iter().map(|r| (r.method.as_str(), r.path.as_str())).collect();
        assert_eq!(lines, vec![("GET", "/api/tasks"), ("POST", "/api/tasks"), ("GET", "/api/tasks")]);
        assert_eq!(requests[1].json()["title"], "Fix bug");
        assert_eq!(requests[1].json()["priority"], "high");
    }
}
