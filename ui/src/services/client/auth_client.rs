use reqwest::Client;
use tracing::{error, info, instrument};

use super::errors::{ClientError, ClientResult};
use super::types::{ClientRegisterRequest, ClientRegisterResponse};

/// Client for the authentication backend
#[derive(Clone)]
pub struct AuthClient {
    pub(crate) http_client: Client,
    base_url: String,
}

impl AuthClient {
    /// Create a new auth client against the given backend base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: {
                Client::builder()
                    .user_agent("registration-frontend/1.0")
                    .build()
                    .expect("Failed to create HTTP client")
            },
            base_url: base_url.into(),
        }
    }

    /// Register a new account with the backend
    ///
    /// A rejected registration is returned as an unsuccessful response whose
    /// message carries the backend's human-readable text; `Err` is reserved
    /// for transport and decode failures.
    #[instrument(skip(self, request), err)]
    pub async fn register(
        &self,
        request: &ClientRegisterRequest,
    ) -> ClientResult<ClientRegisterResponse> {
        info!("Registering account for username: {}", request.username);

        let response = self
            .http_client
            .post(self.register_url())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::NetworkError {
                message: format!("Failed to call register: {}", e),
            })?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                message: format!("Failed to read response: {}", e),
            })?;

        if status.is_success() {
            info!("Registration successful for username: {}", request.username);
            Ok(ClientRegisterResponse::success(&parse_success_message(
                &body_text,
            )?))
        } else {
            error!("Registration failed with status {}: {}", status, body_text);
            Ok(ClientRegisterResponse::error(&parse_error_message(
                &body_text,
            )))
        }
    }

    fn register_url(&self) -> String {
        format!("{}/api/auth/register", self.base_url)
    }
}

impl Default for AuthClient {
    /// Client against the page origin, so API calls stay same-origin
    fn default() -> Self {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        Self::new(origin)
    }
}

/// Extract the confirmation message from a success body.
///
/// The backend answers with `{"message": "..."}`; an empty body is accepted,
/// anything else that fails to decode is a `SerializationError`.
fn parse_success_message(body_text: &str) -> ClientResult<String> {
    if body_text.trim().is_empty() {
        return Ok("Account created successfully".to_string());
    }

    let body: serde_json::Value = serde_json::from_str(body_text)?;
    Ok(body["message"]
        .as_str()
        .unwrap_or("Account created successfully")
        .to_string())
}

/// Extract the human-readable message from an error body.
///
/// The backend sends structured errors as `{"message": "..."}`; anything
/// else is surfaced verbatim.
fn parse_error_message(error_text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(error_text)
        .ok()
        .and_then(|body| body["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| error_text.to_string())
}
