use serde::{Deserialize, Serialize};

use super::auth::UserInfo;

/// Lowest semester a student can be enrolled in
pub const MIN_SEMESTER: u8 = 1;
/// Highest semester a student can be enrolled in
pub const MAX_SEMESTER: u8 = 8;

/// Student record as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub course: String,
    pub semester: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Student {
    /// Build a stored record from a payload and a server-assigned id.
    pub fn from_payload(id: i64, payload: StudentPayload) -> Self {
        Self {
            id,
            name: payload.name,
            email: payload.email,
            course: payload.course,
            semester: payload.semester,
            phone: payload.phone,
            address: payload.address,
        }
    }

    /// Case-insensitive match of `query` against name or course.
    ///
    /// An empty query matches every student.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.course.to_lowercase().contains(&needle)
    }
}

/// Body of `POST /students` and `PUT /students/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentPayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub course: String,
    pub semester: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl StudentPayload {
    /// Payload with only the required fields set
    pub fn new(name: impl Into<String>, course: impl Into<String>, semester: u8) -> Self {
        Self {
            name: name.into(),
            email: None,
            course: course.into(),
            semester,
            phone: None,
            address: None,
        }
    }
}

/// Envelope returned by auth and mutation endpoints.
///
/// `user`/`token` are only present on login, `student` only on create/update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Student {
        Student {
            id: 1,
            name: "John Doe".to_string(),
            email: None,
            course: "CS".to_string(),
            semester: 3,
            phone: None,
            address: None,
        }
    }

    #[test]
    fn test_student_matches_name_and_course() {
        let student = john();
        assert!(student.matches("john"));
        assert!(student.matches("DOE"));
        assert!(student.matches("cs"));
        assert!(student.matches(""));
        assert!(!student.matches("zz"));
    }

    #[test]
    fn test_student_parses_without_optional_fields() {
        let json = r#"{"id":4,"name":"Ana","course":"MBA","semester":2}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.id, 4);
        assert_eq!(student.email, None);
        assert_eq!(student.phone, None);
    }

    #[test]
    fn test_payload_omits_empty_optionals() {
        let payload = StudentPayload::new("Ana", "MBA", 2);
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"name":"Ana","course":"MBA","semester":2}"#);
    }

    #[test]
    fn test_api_response_with_student() {
        let json = r#"{"success":true,"message":"Student added successfully","student":{"id":9,"name":"Ana","course":"MBA","semester":2}}"#;
        let response: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.student.map(|s| s.id), Some(9));
        assert!(response.user.is_none());
    }
}
