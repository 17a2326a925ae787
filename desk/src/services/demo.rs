//! # Demo Backend
//!
//! In-memory [`StudentService`] used when no REST server is available.
//! Any non-empty credentials log in and the roster starts with three students.

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{Student, StudentPayload, UserInfo};

use crate::core::config::BackendMode;
use crate::core::error::{ApiError, ApiResult};
use crate::core::service::StudentService;
use crate::services::session::Session;

/// Seeded roster shown on first launch in demo mode
pub fn demo_students() -> Vec<Student> {
    vec![
        Student {
            id: 1,
            name: "John Doe".to_string(),
            email: Some("john@example.com".to_string()),
            course: "Computer Science".to_string(),
            semester: 3,
            phone: None,
            address: None,
        },
        Student {
            id: 2,
            name: "Jane Smith".to_string(),
            email: Some("jane@example.com".to_string()),
            course: "Electronics".to_string(),
            semester: 2,
            phone: None,
            address: None,
        },
        Student {
            id: 3,
            name: "Mike Johnson".to_string(),
            email: Some("mike@example.com".to_string()),
            course: "Computer Science".to_string(),
            semester: 4,
            phone: None,
            address: None,
        },
    ]
}

pub struct DemoBackend {
    students: Mutex<Vec<Student>>,
}

impl DemoBackend {
    pub fn new() -> Self {
        Self::with_students(demo_students())
    }

    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: Mutex::new(students),
        }
    }

    /// Snapshot of the current roster
    pub fn students(&self) -> Vec<Student> {
        self.students.lock().clone()
    }
}

impl Default for DemoBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentService for DemoBackend {
    fn mode(&self) -> BackendMode {
        BackendMode::Demo
    }

    async fn login(&self, username: String, password: String) -> ApiResult<Session> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ApiError::Rejected("Invalid credentials".to_string()));
        }

        let user = UserInfo {
            full_name: Some(username.clone()),
            ..UserInfo::new(username)
        };
        let token = format!("demo-token-{}", chrono::Utc::now().timestamp_millis());
        tracing::info!(username = %user.username, "Demo login");

        Ok(Session::new(user, Some(token)))
    }

    async fn signup(&self, username: String, _email: String, _password: String) -> ApiResult<String> {
        tracing::info!(%username, "Demo signup");
        Ok("Account created successfully".to_string())
    }

    async fn list_students(&self, search: &str) -> ApiResult<Vec<Student>> {
        let students = self.students.lock();
        Ok(students.iter().filter(|s| s.matches(search)).cloned().collect())
    }

    async fn create_student(&self, payload: StudentPayload) -> ApiResult<Option<Student>> {
        let mut students = self.students.lock();
        let id = students.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let student = Student::from_payload(id, payload);
        students.push(student.clone());
        tracing::debug!(id, "Demo student created");
        Ok(Some(student))
    }

    async fn update_student(&self, id: i64, payload: StudentPayload) -> ApiResult<Option<Student>> {
        let mut students = self.students.lock();
        let slot = students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ApiError::Rejected("Student not found".to_string()))?;
        *slot = Student::from_payload(id, payload);
        Ok(Some(slot.clone()))
    }

    async fn delete_student(&self, id: i64) -> ApiResult<()> {
        let mut students = self.students.lock();
        let before = students.len();
        students.retain(|s| s.id != id);
        if students.len() == before {
            return Err(ApiError::Rejected("Student not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_any_non_empty_credentials_log_in() {
        let backend = DemoBackend::new();
        let session = backend.login("maria".into(), "x".into()).await.unwrap();

        assert_eq!(session.user.username, "maria");
        assert_eq!(session.user.display_name(), "maria");
        assert!(session
            .auth_token
            .as_deref()
            .is_some_and(|t| t.starts_with("demo-token-")));
    }

    #[tokio::test]
    async fn test_empty_credentials_rejected() {
        let backend = DemoBackend::new();
        let err = backend.login("".into(), "x".into()).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(backend.login("maria".into(), "".into()).await.is_err());
    }

    #[tokio::test]
    async fn test_search_matches_name_or_course() {
        let backend = DemoBackend::new();
        let jane = backend.list_students("jane").await.unwrap();
        assert_eq!(jane.len(), 1);
        assert_eq!(jane[0].id, 2);

        let cs = backend.list_students("computer").await.unwrap();
        assert_eq!(cs.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let backend = DemoBackend::new();
        let created = backend
            .create_student(StudentPayload::new("Ana", "MBA", 1))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(created.id, 4);
        assert_eq!(backend.students().len(), 4);
    }

    #[tokio::test]
    async fn test_create_on_empty_roster_starts_at_one() {
        let backend = DemoBackend::with_students(Vec::new());
        let created = backend
            .create_student(StudentPayload::new("Ana", "MBA", 1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_delete_keeps_order_of_others() {
        let backend = DemoBackend::new();
        backend.delete_student(2).await.unwrap();

        let ids: Vec<i64> = backend.students().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(backend.delete_student(2).await.is_err());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let backend = DemoBackend::new();
        let updated = backend
            .update_student(3, StudentPayload::new("Mike J", "Physics", 5))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.course, "Physics");
        assert_eq!(backend.students()[2].name, "Mike J");
        assert!(backend.update_student(42, StudentPayload::new("x", "y", 1)).await.is_err());
    }
}
