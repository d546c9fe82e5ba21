//! Auth HTTP handlers: register, login.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::service;
use crate::db::{user_create, user_find_by_email, UserRow};
use crate::error::{AppError, AppResult};
use crate::handlers::http::AppState;

/// Registration body. Absent fields deserialize to empty strings so a
/// missing field and an empty one fail validation the same way.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: PublicUser,
}

/// Public part of the user returned to the client; never the hash.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for PublicUser {
    fn from(user: UserRow) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    service::validate_registration(&body.name, &body.email, &body.password)?;

    // Fast-path duplicate check; the unique index behind user_create is the
    // authoritative guard against racing registrations.
    if user_find_by_email(state.db(), &body.email).await?.is_some() {
        return Err(AppError::Conflict(
            "User already exists with this email".to_string(),
        ));
    }

    let password_hash = service::hash_password(&body.password)?;
    let user = user_create(state.db(), &body.name, &body.email, &password_hash).await?;
    let token = state.jwt_secret().issue(user.id)?;

    info!(user_id = %user.id, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            token,
            user: PublicUser::from(user),
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    service::validate_login(&body.email, &body.password)?;

    // Unknown email and wrong password must be indistinguishable.
    let user = user_find_by_email(state.db(), &body.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !service::verify_password(&body.password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    let token = state.jwt_secret().issue(user.id)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: PublicUser::from(user),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let req: RegisterRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert!(req.name.is_empty());
        assert_eq!(req.email, "a@x.com");
        assert!(req.password.is_empty());

        let req: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());
    }

    #[test]
    fn auth_response_never_carries_a_hash() {
        let response = AuthResponse {
            message: "User registered successfully".to_string(),
            token: "token".to_string(),
            user: PublicUser {
                id: Uuid::new_v4(),
                name: "A".to_string(),
                email: "a@x.com".to_string(),
            },
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("a@x.com"));
        assert!(!json.contains("password"));
        assert!(!json.contains("hash"));
    }
}
