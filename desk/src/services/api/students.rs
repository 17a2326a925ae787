//! # Student Endpoints
//!
//! List, create, update, and delete student records.

use reqwest::Response;
use shared::{ApiResponse, Student, StudentPayload};

use super::client::{network_error, read_json, ApiClient};
use crate::core::error::{ApiError, ApiResult};

/// Fetch students, filtered server-side when `search` is non-empty.
#[tracing::instrument(skip(client))]
pub async fn list_students(client: &ApiClient, search: &str) -> ApiResult<Vec<Student>> {
    let start = std::time::Instant::now();

    let mut request = client.client.get(client.url("/students"));
    let query = search.trim();
    if !query.is_empty() {
        request = request.query(&[("search", query)]);
    }

    let response = request.send().await.map_err(network_error("list_students"))?;
    let status = response.status();

    if status.is_success() {
        let students: Vec<Student> = read_json(response, "list_students").await?;
        tracing::debug!(
            count = students.len(),
            duration_ms = start.elapsed().as_millis(),
            "Students loaded"
        );
        Ok(students)
    } else {
        tracing::warn!(status = status.as_u16(), "Student list request failed");
        Err(rejection(response, "Failed to load students").await)
    }
}

/// Create a student. The backend echoes the stored record when it can.
#[tracing::instrument(skip(client, payload), fields(name = %payload.name))]
pub async fn create_student(
    client: &ApiClient,
    payload: StudentPayload,
) -> ApiResult<Option<Student>> {
    let response = client
        .client
        .post(client.url("/students"))
        .json(&payload)
        .send()
        .await
        .map_err(network_error("create_student"))?;

    let envelope: ApiResponse = read_json(response, "create_student").await?;
    if envelope.success {
        tracing::info!(id = envelope.student.as_ref().map(|s| s.id), "Student created");
        Ok(envelope.student)
    } else {
        Err(ApiError::rejected(envelope.message, "Failed to add student"))
    }
}

/// Replace a student's fields.
#[tracing::instrument(skip(client, payload))]
pub async fn update_student(
    client: &ApiClient,
    id: i64,
    payload: StudentPayload,
) -> ApiResult<Option<Student>> {
    let response = client
        .client
        .put(client.url(&format!("/students/{}", id)))
        .json(&payload)
        .send()
        .await
        .map_err(network_error("update_student"))?;

    let envelope: ApiResponse = read_json(response, "update_student").await?;
    if envelope.success {
        tracing::info!("Student updated");
        Ok(envelope.student)
    } else {
        Err(ApiError::rejected(envelope.message, "Failed to update student"))
    }
}

/// Delete a student.
#[tracing::instrument(skip(client))]
pub async fn delete_student(client: &ApiClient, id: i64) -> ApiResult<()> {
    let response = client
        .client
        .delete(client.url(&format!("/students/{}", id)))
        .send()
        .await
        .map_err(network_error("delete_student"))?;

    let envelope: ApiResponse = read_json(response, "delete_student").await?;
    if envelope.success {
        tracing::info!("Student deleted");
        Ok(())
    } else {
        Err(ApiError::rejected(envelope.message, "Failed to delete student"))
    }
}

/// Turn an error response into a rejection if it carries an envelope.
async fn rejection(response: Response, fallback: &str) -> ApiError {
    match response.json::<ApiResponse>().await {
        Ok(envelope) => ApiError::rejected(envelope.message, fallback),
        Err(_) => ApiError::Network,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(format!("{}/api", server.uri()), Duration::from_secs(2))
    }

    fn roster() -> serde_json::Value {
        json!([
            {"id": 1, "name": "John Doe", "email": "john@example.com", "course": "Computer Science", "semester": 3},
            {"id": 2, "name": "Jane Smith", "course": "Electronics", "semester": 2}
        ])
    }

    #[tokio::test]
    async fn test_list_without_search_sends_no_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/students"))
            .and(|req: &Request| req.url.query().is_none())
            .respond_with(ResponseTemplate::new(200).set_body_json(roster()))
            .expect(1)
            .mount(&server)
            .await;

        let students = list_students(&client_for(&server), "").await.unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(students[1].email, None);
    }

    #[tokio::test]
    async fn test_list_with_search_sends_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/students"))
            .and(query_param("search", "jane"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2, "name": "Jane Smith", "course": "Electronics", "semester": 2}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let students = list_students(&client_for(&server), "jane").await.unwrap();

        assert_eq!(students.len(), 1);
        assert_eq!(students[0].name, "Jane Smith");
    }

    #[tokio::test]
    async fn test_list_server_error_without_envelope_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/students"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let err = list_students(&client_for(&server), "").await.unwrap_err();
        assert_eq!(err, ApiError::Network);
    }

    #[tokio::test]
    async fn test_create_sends_payload_and_returns_student() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/students"))
            .and(body_json(json!({"name": "Ana", "course": "MBA", "semester": 2})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Student added successfully",
                "student": {"id": 9, "name": "Ana", "course": "MBA", "semester": 2}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = create_student(&client_for(&server), StudentPayload::new("Ana", "MBA", 2))
            .await
            .unwrap();

        assert_eq!(created.map(|s| s.id), Some(9));
    }

    #[tokio::test]
    async fn test_create_rejection_carries_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/students"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "success": false,
                "message": "Error adding student: duplicate email"
            })))
            .mount(&server)
            .await;

        let err = create_student(&client_for(&server), StudentPayload::new("Ana", "MBA", 2))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Error adding student: duplicate email");
    }

    #[tokio::test]
    async fn test_update_uses_put_on_id() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/students/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Student updated successfully",
                "student": {"id": 4, "name": "Ana B", "course": "MBA", "semester": 3}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let updated = update_student(&client_for(&server), 4, StudentPayload::new("Ana B", "MBA", 3))
            .await
            .unwrap();

        assert_eq!(updated.map(|s| s.semester), Some(3));
    }

    #[tokio::test]
    async fn test_delete_success_and_fallback_message() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/students/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Student deleted successfully"
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/students/2"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"success": false})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(delete_student(&client, 1).await.is_ok());
        assert_eq!(
            delete_student(&client, 2).await.unwrap_err().to_string(),
            "Failed to delete student"
        );
    }
}
