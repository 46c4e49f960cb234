use crate::libs::task::TaskId;

#[derive(Debug, Clone)]
pub enum Message {
    // === BOARD MESSAGES ===
    BoardHeader(String), // store URL
    BoardEmpty,
    BoardLoadFailed(String), // error
    BoardStale,
    BoardTotals(usize),

    // === TASK MESSAGES ===
    TaskCreated {
        id: TaskId,
        title: String,
    },
    TaskUpdated {
        id: TaskId,
        title: String,
    },
    TaskDeleted(TaskId),
    TaskDeleteDeclined,
    TaskSaveFailed(String),   // error
    TaskDeleteFailed(String), // error
    TaskNotFound(TaskId),
    TaskTitleRequired,
    EditingTask {
        id: TaskId,
        title: String,
    },
    ConfirmDeleteTask(String), // title
    SelectTask,
    NoTasksOnBoard,

    // === DRAG MESSAGES ===
    TaskMoved {
        id: TaskId,
        from: String,
        to: String,
    },
    TaskAlreadyInColumn {
        id: TaskId,
        column: String,
    },
    TaskMoveFailed(String), // error
    SelectTargetColumn,

    // === TASK FORM PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskStatus,
    PromptTaskPriority,
    PromptTaskDueDate,
    InvalidDueDate(String), // input

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String), // path
    ConfigModuleBackend,
    ConfigModuleLogging,
    PromptSelectModules,
    PromptBackendUrl,
    PromptBackendTimeout,
    PromptLogLevel,
    PromptLogFormat,

    // === EXPORT MESSAGES ===
    ExportingBoard(String), // format
    ExportCompleted(String), // path
}
