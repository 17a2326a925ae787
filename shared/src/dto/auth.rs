use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// User information returned by a successful login.
///
/// The backend sends `id`, `username`, `email` and `role`; locally fabricated
/// users (demo logins) only carry `username` and `fullName`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserInfo {
    /// User known only by username
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            email: None,
            full_name: None,
            role: None,
        }
    }

    /// Name shown in the header: full name when known, else the username.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_parses_backend_shape() {
        let json = r#"{"id":7,"username":"alice","email":"alice@example.com","role":"USER"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, Some(7));
        assert_eq!(user.email.as_deref(), Some("alice@example.com"));
        assert_eq!(user.full_name, None);
        assert_eq!(user.display_name(), "alice");
    }

    #[test]
    fn test_user_info_full_name_wire_name() {
        let user = UserInfo {
            id: None,
            username: "bob".to_string(),
            email: None,
            full_name: Some("Bob Builder".to_string()),
            role: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"username":"bob","fullName":"Bob Builder"}"#);
        assert_eq!(user.display_name(), "Bob Builder");
    }
}
