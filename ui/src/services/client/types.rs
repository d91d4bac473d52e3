use serde::{Deserialize, Serialize};

/// Request payload for account registration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClientRegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Generic registration response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientRegisterResponse {
    pub success: bool,
    pub message: String,
}

impl ClientRegisterResponse {
    /// Create a successful registration response
    pub fn success(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    /// Create an error registration response
    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// The register call must carry exactly the three field values.
    #[test]
    fn test_register_request_wire_format() {
        let request = ClientRegisterRequest {
            username: "abc".to_string(),
            email: "a@b.com".to_string(),
            password: "Abc123!".to_string(),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "username": "abc",
                "email": "a@b.com",
                "password": "Abc123!",
            })
        );
    }

    #[test]
    fn test_response_constructors() {
        let ok = ClientRegisterResponse::success("Account created successfully");
        assert!(ok.success);
        assert_eq!(ok.message, "Account created successfully");

        let err = ClientRegisterResponse::error("Email taken");
        assert!(!err.success);
        assert_eq!(err.message, "Email taken");
    }
}
