//! Validation utilities for user input
//!
//! Checks are presence-only; the server has the final say on anything else.

use shared::{MAX_SEMESTER, MIN_SEMESTER};

use crate::app::StudentForm;

pub const MISSING_CREDENTIALS: &str = "Please enter username and password";
pub const MISSING_FIELDS: &str = "Please fill all fields";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Login needs both fields
pub fn validate_login(username: &str, password: &str) -> ValidationResult {
    if blank(username) || password.is_empty() {
        return ValidationResult::err(MISSING_CREDENTIALS);
    }
    ValidationResult::ok()
}

/// Signup needs all three fields
pub fn validate_signup(username: &str, email: &str, password: &str) -> ValidationResult {
    if blank(username) || blank(email) || password.is_empty() {
        return ValidationResult::err(MISSING_FIELDS);
    }
    ValidationResult::ok()
}

/// Validate a semester entry (whole number in 1..=8)
pub fn validate_semester(semester: &str) -> ValidationResult {
    if blank(semester) {
        return ValidationResult::err(MISSING_FIELDS);
    }

    match semester.trim().parse::<u8>() {
        Ok(value) if (MIN_SEMESTER..=MAX_SEMESTER).contains(&value) => ValidationResult::ok(),
        _ => ValidationResult::err(format!(
            "Semester must be a number from {} to {}",
            MIN_SEMESTER, MAX_SEMESTER
        )),
    }
}

/// Add-student form: name, course and semester are required
pub fn validate_student_form(form: &StudentForm) -> ValidationResult {
    if blank(&form.name) || blank(&form.course) {
        return ValidationResult::err(MISSING_FIELDS);
    }
    validate_semester(&form.semester)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        assert!(validate_login("admin", "pw").is_valid);
        assert_eq!(
            validate_login("  ", "pw").error.as_deref(),
            Some(MISSING_CREDENTIALS)
        );
        assert!(!validate_login("admin", "").is_valid);
    }

    #[test]
    fn test_signup_requires_all_fields() {
        assert!(validate_signup("ana", "ana@x.io", "pw").is_valid);
        assert_eq!(
            validate_signup("ana", "", "pw").error.as_deref(),
            Some(MISSING_FIELDS)
        );
    }

    #[test]
    fn test_semester_bounds() {
        assert!(validate_semester("1").is_valid);
        assert!(validate_semester(" 8 ").is_valid);
        assert!(!validate_semester("0").is_valid);
        assert!(!validate_semester("9").is_valid);
        assert!(!validate_semester("2.5").is_valid);
        assert_eq!(validate_semester("").error.as_deref(), Some(MISSING_FIELDS));
    }

    #[test]
    fn test_student_form_optional_fields_may_be_blank() {
        let form = StudentForm {
            name: "Ana".to_string(),
            course: "MBA".to_string(),
            semester: "3".to_string(),
            ..Default::default()
        };
        assert!(validate_student_form(&form).is_valid);

        let missing_course = StudentForm {
            course: String::new(),
            ..form
        };
        assert_eq!(
            validate_student_form(&missing_course).error.as_deref(),
            Some(MISSING_FIELDS)
        );
    }
}
