use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Storage key the access token is persisted under after a successful
/// login or registration. The token is write-only from the core's
/// perspective; it is overwritten by the next successful attempt.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Login request body
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct LoginRequest {
    pub email: String,
    #[validate(min_length = 1)]
    pub password: String,
}

/// Registration request body
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct RegisterRequest {
    pub email: String,
    #[validate(min_length = 8)]
    pub password: String,
}

/// Token payload returned on successful authentication
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Error payload returned on failed authentication
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_enforces_min_password_length() {
        let request = RegisterRequest {
            email: "a@b.com".to_string(),
            password: "short".to_string(),
        };
        assert!(request.validate().is_err());

        let request = RegisterRequest {
            email: "a@b.com".to_string(),
            password: "longenough".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn login_request_serializes_to_flat_credentials() {
        let request = LoginRequest {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "a@b.com", "password": "secret1"})
        );
    }

    #[test]
    fn auth_response_tolerates_missing_token_type() {
        let auth: AuthResponse = serde_json::from_str(r#"{"access_token":"tok"}"#).unwrap();
        assert_eq!(auth.access_token, "tok");
        assert_eq!(auth.token_type, "");
    }

    #[test]
    fn error_response_tolerates_missing_detail() {
        let error: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(error.detail, None);
    }
}
