use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::password::{hash_password, verify_login};
use crate::auth::store::{find_user_by_username, insert_user};
use crate::errors::AppError;
use crate::models::user::PublicUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: PublicUser,
}

/// Trims the username and rejects empty fields. Passwords are taken as-is.
fn validate_credentials(req: &CredentialsRequest) -> Result<(String, String), AppError> {
    let username = req.username.trim();
    if username.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Username and password are required.".to_string(),
        ));
    }
    Ok((username.to_string(), req.password.clone()))
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let (username, password) = validate_credentials(&req)?;

    if find_user_by_username(&state.db, &username).await?.is_some() {
        return Err(AppError::Conflict("Username already exists.".to_string()));
    }

    // Argon2 is CPU-bound: run it on the blocking pool.
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    let user = insert_user(&state.db, &username, &password_hash).await?;
    info!("Registered user {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Registration successful".to_string(),
        }),
    ))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (username, password) = validate_credentials(&req)?;

    let user = find_user_by_username(&state.db, &username).await?;

    // Unknown usernames still pay for a hash verification.
    let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
    let matches =
        tokio::task::spawn_blocking(move || verify_login(&password, stored_hash.as_deref()))
            .await
            .map_err(|e| AppError::Internal(e.into()))??;

    let user = match user {
        Some(user) if matches => user,
        _ => return Err(AppError::InvalidCredentials),
    };

    info!("User {} logged in", user.username);
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: PublicUser::from(&user),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(username: &str, password: &str) -> CredentialsRequest {
        CredentialsRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_credentials_trim_username() {
        let (u, p) = validate_credentials(&creds("  alice ", "secret")).unwrap();
        assert_eq!(u, "alice");
        assert_eq!(p, "secret");
    }

    #[test]
    fn test_empty_username_rejected() {
        let err = validate_credentials(&creds("   ", "secret")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_empty_password_rejected() {
        let err = validate_credentials(&creds("alice", "")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let req: CredentialsRequest = serde_json::from_str(r#"{"username": "bob"}"#).unwrap();
        assert!(req.password.is_empty());
        assert!(validate_credentials(&req).is_err());
    }
}
