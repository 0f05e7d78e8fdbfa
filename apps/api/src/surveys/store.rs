use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{is_unique_violation, AppError};
use crate::models::survey::{ResponseRow, SurveyRow, SurveySummaryRow};
use crate::surveys::ids::{new_response_id, new_survey_id};

/// Ids are short random strings, so a primary-key clash gets one fresh id.
const ID_ATTEMPTS: usize = 2;

fn should_retry_insert(err: &sqlx::Error, attempt: usize) -> bool {
    attempt < ID_ATTEMPTS && is_unique_violation(err)
}

/// Parameters for inserting a new survey.
pub struct NewSurvey<'a> {
    pub owner_id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub questions: &'a [String],
}

pub async fn insert_survey(pool: &PgPool, survey: NewSurvey<'_>) -> Result<SurveyRow, AppError> {
    let NewSurvey {
        owner_id,
        title,
        description,
        questions,
    } = survey;

    let mut attempt = 1;
    let row = loop {
        let result = sqlx::query_as::<_, SurveyRow>(
            r#"
            INSERT INTO surveys (id, owner_id, title, description, questions)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(new_survey_id())
        .bind(owner_id)
        .bind(title)
        .bind(description)
        .bind(questions)
        .fetch_one(pool)
        .await;

        match result {
            Err(e) if should_retry_insert(&e, attempt) => {
                warn!("Survey id collision on attempt {attempt}, retrying");
                attempt += 1;
            }
            other => break other?,
        }
    };

    info!(
        "Created survey {} for user {} with {} questions",
        row.id,
        owner_id,
        row.questions.len()
    );
    Ok(row)
}

pub async fn get_survey(pool: &PgPool, survey_id: &str) -> Result<Option<SurveyRow>, AppError> {
    Ok(
        sqlx::query_as::<_, SurveyRow>("SELECT * FROM surveys WHERE id = $1")
            .bind(survey_id)
            .fetch_optional(pool)
            .await?,
    )
}

/// Returns a user's surveys, newest first, with their response counts.
pub async fn list_surveys_for_owner(
    pool: &PgPool,
    owner_id: Uuid,
) -> Result<Vec<SurveySummaryRow>, AppError> {
    Ok(sqlx::query_as::<_, SurveySummaryRow>(
        r#"
        SELECT s.*, COUNT(r.id) AS response_count
        FROM surveys s
        LEFT JOIN survey_responses r ON r.survey_id = s.id
        WHERE s.owner_id = $1
        GROUP BY s.id
        ORDER BY s.created_at DESC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?)
}

/// Deletes a survey; its responses go with it (ON DELETE CASCADE).
pub async fn delete_survey(pool: &PgPool, survey_id: &str) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM surveys WHERE id = $1")
        .bind(survey_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn insert_response(
    pool: &PgPool,
    survey_id: &str,
    answers: &[String],
) -> Result<ResponseRow, AppError> {
    let mut attempt = 1;
    let row = loop {
        let result = sqlx::query_as::<_, ResponseRow>(
            r#"
            INSERT INTO survey_responses (id, survey_id, answers)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(new_response_id())
        .bind(survey_id)
        .bind(answers)
        .fetch_one(pool)
        .await;

        match result {
            Err(e) if should_retry_insert(&e, attempt) => {
                warn!("Response id collision on attempt {attempt}, retrying");
                attempt += 1;
            }
            other => break other?,
        }
    };

    info!("Recorded response {} for survey {}", row.id, survey_id);
    Ok(row)
}

/// Returns a survey's responses in submission order.
pub async fn list_responses(pool: &PgPool, survey_id: &str) -> Result<Vec<ResponseRow>, AppError> {
    Ok(sqlx::query_as::<_, ResponseRow>(
        "SELECT * FROM survey_responses WHERE survey_id = $1 ORDER BY submitted_at ASC, id ASC",
    )
    .bind(survey_id)
    .fetch_all(pool)
    .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::testing::{other_db_error, unique_violation};

    #[test]
    fn test_id_clash_retried_once() {
        assert!(should_retry_insert(&unique_violation(), 1));
        assert!(!should_retry_insert(&unique_violation(), ID_ATTEMPTS));
    }

    #[test]
    fn test_other_errors_not_retried() {
        assert!(!should_retry_insert(&other_db_error(), 1));
        assert!(!should_retry_insert(&sqlx::Error::RowNotFound, 1));
    }
}
