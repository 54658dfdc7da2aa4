//! Auth Endpoints
//!
//! Bindings for login, registration and password recovery.

use serde::{Deserialize, Serialize};

use super::{ApiClient, HttpTransport};
use crate::error::ApiError;
use crate::models::User;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
pub struct RegisterArgs<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub password: &'a str,
    pub is_admin: bool,
}

#[derive(Serialize)]
struct ForgotPasswordArgs<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ResetPasswordArgs<'a> {
    token: &'a str,
    new_password: &'a str,
}

// ========================
// Responses
// ========================

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

/// Generic `{ "message": ... }` acknowledgment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

// ========================
// Endpoints
// ========================

impl<T: HttpTransport> ApiClient<T> {
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.post_json("/api/login", &LoginArgs { email, password })
            .await
    }

    pub async fn register(&self, args: &RegisterArgs<'_>) -> Result<AuthResponse, ApiError> {
        self.post_json("/api/register", args).await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<Ack, ApiError> {
        self.post_json("/api/forgot-password", &ForgotPasswordArgs { email })
            .await
    }

    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<Ack, ApiError> {
        self.post_json("/api/reset-password", &ResetPasswordArgs { token, new_password })
            .await
    }
}
