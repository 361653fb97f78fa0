// Re-export async trait for convenience
pub use async_trait::async_trait;

use serde::{Deserialize, Serialize};

/// Structured progress events emitted by a running pipeline
///
/// Events are written as single `__WF_EVENT__:{json}` lines on stderr so a
/// wrapping UI (or log collector) can track phases, tasks, and per-domain
/// lookups without scraping the human-readable output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkflowEvent {
    /// Phase started
    PhaseStarted {
        phase: usize,
        name: String,
        total_phases: usize,
    },
    /// Phase completed
    PhaseCompleted {
        phase: usize,
        name: String,
    },
    /// Phase failed
    PhaseFailed {
        phase: usize,
        name: String,
        error: String,
    },
    /// Task started
    TaskStarted {
        phase: usize,
        task_id: String,
        description: String,
        total_tasks: Option<usize>,
    },
    /// Task progress update
    TaskProgress {
        task_id: String,
        message: String,
    },
    /// Task completed
    TaskCompleted {
        task_id: String,
        result: Option<String>,
    },
    /// Task failed
    TaskFailed {
        task_id: String,
        error: String,
    },
    /// External lookup started (per-domain call within a task)
    LookupStarted {
        task_id: String,
        target: String,
        description: String,
    },
    /// External lookup completed
    LookupCompleted {
        task_id: String,
        target: String,
        result: Option<String>,
    },
    /// External lookup failed (recovered or not)
    LookupFailed {
        task_id: String,
        target: String,
        error: String,
    },
    /// State file created (intermediate outputs)
    StateFileCreated {
        phase: usize,
        file_path: String,
        description: String,
    },
}

impl WorkflowEvent {
    /// Emit this event to stderr for consumer parsing
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            use std::io::Write;
            eprintln!("__WF_EVENT__:{}", json);
            // Force flush stderr in async/concurrent contexts
            let _ = std::io::stderr().flush();
        }
    }
}

/// Helper macros for pipeline logging
#[macro_export]
macro_rules! log_phase_start {
    ($phase:expr, $name:expr, $total:expr) => {
        $crate::WorkflowEvent::PhaseStarted {
            phase: $phase,
            name: $name.to_string(),
            total_phases: $total,
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_phase_complete {
    ($phase:expr, $name:expr) => {
        $crate::WorkflowEvent::PhaseCompleted {
            phase: $phase,
            name: $name.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_phase_failed {
    ($phase:expr, $name:expr, $error:expr) => {
        $crate::WorkflowEvent::PhaseFailed {
            phase: $phase,
            name: $name.to_string(),
            error: $error.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_task_start {
    ($phase:expr, $task_id:expr, $desc:expr) => {
        $crate::WorkflowEvent::TaskStarted {
            phase: $phase,
            task_id: $task_id.to_string(),
            description: $desc.to_string(),
            total_tasks: None,
        }
        .emit();
    };
    ($phase:expr, $task_id:expr, $desc:expr, $total:expr) => {
        $crate::WorkflowEvent::TaskStarted {
            phase: $phase,
            task_id: $task_id.to_string(),
            description: $desc.to_string(),
            total_tasks: Some($total),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_task_progress {
    ($task_id:expr, $msg:expr) => {
        $crate::WorkflowEvent::TaskProgress {
            task_id: $task_id.to_string(),
            message: $msg.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_task_complete {
    ($task_id:expr) => {
        $crate::WorkflowEvent::TaskCompleted {
            task_id: $task_id.to_string(),
            result: None,
        }
        .emit();
    };
    ($task_id:expr, $result:expr) => {
        $crate::WorkflowEvent::TaskCompleted {
            task_id: $task_id.to_string(),
            result: Some($result.to_string()),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_task_failed {
    ($task_id:expr, $error:expr) => {
        $crate::WorkflowEvent::TaskFailed {
            task_id: $task_id.to_string(),
            error: $error.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_lookup_start {
    ($task_id:expr, $target:expr, $desc:expr) => {
        $crate::WorkflowEvent::LookupStarted {
            task_id: $task_id.to_string(),
            target: $target.to_string(),
            description: $desc.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_lookup_complete {
    ($task_id:expr, $target:expr) => {
        $crate::WorkflowEvent::LookupCompleted {
            task_id: $task_id.to_string(),
            target: $target.to_string(),
            result: None,
        }
        .emit();
    };
    ($task_id:expr, $target:expr, $result:expr) => {
        $crate::WorkflowEvent::LookupCompleted {
            task_id: $task_id.to_string(),
            target: $target.to_string(),
            result: Some($result.to_string()),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_lookup_failed {
    ($task_id:expr, $target:expr, $error:expr) => {
        $crate::WorkflowEvent::LookupFailed {
            task_id: $task_id.to_string(),
            target: $target.to_string(),
            error: $error.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_state_file {
    ($phase:expr, $path:expr, $desc:expr) => {
        $crate::WorkflowEvent::StateFileCreated {
            phase: $phase,
            file_path: $path.to_string(),
            description: $desc.to_string(),
        }
        .emit();
    };
}
