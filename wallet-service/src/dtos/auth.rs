use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2 to 100 characters"))]
    #[schema(example = "Jane Doe")]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,

    #[validate(length(min = 7, max = 20, message = "Phone number must be 7 to 20 characters"))]
    #[schema(example = "+14155550123")]
    pub phone_number: Option<String>,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "password123", min_length = 8)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub user_id: String,
    #[schema(example = "Registration successful")]
    pub message: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "password123")]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: Some("+14155550123".to_string()),
            password: "password123".to_string(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(register_request().validate().is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut req = register_request();
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn short_password_is_rejected() {
        let mut req = register_request();
        req.password = "short".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn missing_phone_number_is_allowed() {
        let mut req = register_request();
        req.phone_number = None;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn login_requires_password() {
        let req = LoginRequest {
            email: "jane@example.com".to_string(),
            password: String::new(),
        };
        assert!(req.validate().is_err());
    }
}
