//! # Student Tasks
//!
//! Background requests against the student backend. Each spawns one Tokio
//! task and reports back through the event channel.

use std::sync::Arc;

use async_channel::Sender;
use shared::StudentPayload;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::core::service::StudentService;

/// Fetch the student list for request `seq`.
pub(crate) fn fetch_students(
    backend: Arc<dyn StudentService>,
    event_tx: Sender<AppEvent>,
    seq: u64,
    search: String,
) {
    spawn(async move {
        let result = backend.list_students(&search).await;
        match &result {
            Ok(students) => {
                tracing::debug!(seq, count = students.len(), search = %search, "Students fetched")
            }
            Err(e) => tracing::warn!(seq, error = %e, "Students fetch failed"),
        }
        if event_tx.send(AppEvent::StudentsLoaded { seq, result }).await.is_err() {
            tracing::debug!(seq, "Event channel closed, dropping students result");
        }
    });
}

/// Create a student
pub(crate) fn create_student(
    backend: Arc<dyn StudentService>,
    event_tx: Sender<AppEvent>,
    payload: StudentPayload,
) {
    spawn(async move {
        let result = backend.create_student(payload).await;
        let _ = event_tx.send(AppEvent::StudentCreated(result)).await;
    });
}

/// Delete a student
pub(crate) fn delete_student(backend: Arc<dyn StudentService>, event_tx: Sender<AppEvent>, id: i64) {
    spawn(async move {
        let result = backend.delete_student(id).await;
        let _ = event_tx.send(AppEvent::StudentDeleted { id, result }).await;
    });
}
