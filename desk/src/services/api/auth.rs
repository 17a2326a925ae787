//! # Authentication Endpoints
//!
//! Handles user authentication (login and signup).

use shared::{ApiResponse, LoginRequest, SignupRequest};

use super::client::{network_error, read_json, ApiClient};
use crate::core::error::{ApiError, ApiResult};
use crate::services::session::Session;

/// Login with username and password.
///
/// The envelope is read for every status code: the backend answers a bad
/// password with `401 {success: false, message}`.
#[tracing::instrument(skip(client, password), fields(username = %username))]
pub async fn login(client: &ApiClient, username: String, password: String) -> ApiResult<Session> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { username, password };

    let response = client
        .client
        .post(client.url("/auth/login"))
        .json(&request)
        .send()
        .await
        .map_err(network_error("login"))?;

    let status = response.status();
    let envelope: ApiResponse = read_json(response, "login").await?;
    let duration = start.elapsed();

    match envelope {
        ApiResponse {
            success: true,
            user: Some(user),
            token,
            ..
        } => {
            tracing::info!(duration_ms = duration.as_millis(), "Login successful");
            Ok(Session::new(user, token))
        }
        ApiResponse { success, message, .. } => {
            tracing::warn!(
                status = status.as_u16(),
                success,
                server_message = message.as_deref().unwrap_or(""),
                duration_ms = duration.as_millis(),
                "Login failed"
            );
            // success without a user is still unusable as a session
            let message = if success { None } else { message };
            Err(ApiError::rejected(message, "Login failed"))
        }
    }
}

/// Sign up a new user. Returns the server's confirmation message.
#[tracing::instrument(skip(client, email, password), fields(username = %username))]
pub async fn signup(
    client: &ApiClient,
    username: String,
    email: String,
    password: String,
) -> ApiResult<String> {
    let request = SignupRequest {
        username,
        email,
        password,
    };

    let response = client
        .client
        .post(client.url("/auth/signup"))
        .json(&request)
        .send()
        .await
        .map_err(network_error("signup"))?;

    let status = response.status();
    let envelope: ApiResponse = read_json(response, "signup").await?;

    if envelope.success {
        tracing::info!("Signup successful");
        Ok(envelope
            .message
            .unwrap_or_else(|| "Account created successfully".to_string()))
    } else {
        tracing::warn!(status = status.as_u16(), "Signup rejected");
        Err(ApiError::rejected(envelope.message, "Signup failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(format!("{}/api", server.uri()), Duration::from_secs(2))
    }

    #[tokio::test]
    async fn test_login_success_builds_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(json!({"username": "admin", "password": "admin123"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Login successful",
                "user": {"id": 1, "username": "admin", "email": "admin@sms.com", "role": "ADMIN"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let session = login(&client, "admin".into(), "admin123".into()).await.unwrap();

        assert_eq!(session.user.username, "admin");
        assert_eq!(session.user.role.as_deref(), Some("ADMIN"));
        assert_eq!(session.auth_token, None);
    }

    #[tokio::test]
    async fn test_login_401_carries_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "message": "Invalid username or password"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = login(&client, "admin".into(), "nope".into()).await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid username or password");
    }

    #[tokio::test]
    async fn test_login_success_without_user_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = login(&client, "a".into(), "b".into()).await.unwrap_err();

        assert_eq!(err, ApiError::Rejected("Login failed".to_string()));
    }

    #[tokio::test]
    async fn test_login_html_body_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = login(&client, "a".into(), "b".into()).await.unwrap_err();

        assert_eq!(err.to_string(), "Network error");
    }

    #[tokio::test]
    async fn test_login_unreachable_server_is_network_error() {
        // Nothing listens on port 9 in the test environment
        let client = ApiClient::new("http://127.0.0.1:9/api", Duration::from_secs(1));
        let err = login(&client, "a".into(), "b".into()).await.unwrap_err();

        assert_eq!(err, ApiError::Network);
    }

    #[tokio::test]
    async fn test_signup_duplicate_username() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/signup"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "success": false,
                "message": "Username already exists"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = signup(&client, "admin".into(), "a@b.c".into(), "pw".into())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Username already exists");
    }

    #[tokio::test]
    async fn test_signup_success_returns_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/signup"))
            .and(body_json(json!({"username": "ana", "email": "ana@x.io", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Account created successfully"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let message = signup(&client, "ana".into(), "ana@x.io".into(), "pw".into())
            .await
            .unwrap();

        assert_eq!(message, "Account created successfully");
    }
}
