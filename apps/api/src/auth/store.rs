use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::{is_unique_violation, AppError};
use crate::models::user::UserRow;

pub async fn find_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<UserRow>, AppError> {
    Ok(
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(pool)
            .await?,
    )
}

pub async fn user_exists(pool: &PgPool, user_id: Uuid) -> Result<bool, AppError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(exists)
}

/// Inserts a new user. A concurrent insert of the same username surfaces as `Conflict`.
pub async fn insert_user(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
) -> Result<UserRow, AppError> {
    sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (id, username, password_hash)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .map_err(insert_user_error)
}

/// Two registrations racing past the existence check end here as a duplicate key.
fn insert_user_error(err: sqlx::Error) -> AppError {
    if is_unique_violation(&err) {
        AppError::Conflict("Username already exists.".to_string())
    } else {
        AppError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::*;
    use crate::errors::testing::{other_db_error, unique_violation};

    #[test]
    fn test_duplicate_username_is_conflict() {
        let err = insert_user_error(unique_violation());
        assert!(matches!(&err, AppError::Conflict(msg) if msg == "Username already exists."));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_other_insert_failures_stay_database_errors() {
        let err = insert_user_error(other_db_error());
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(
            insert_user_error(sqlx::Error::RowNotFound).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
