use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::store::user_exists;
use crate::errors::AppError;
use crate::models::survey::{PublicSurvey, ResponseRow, SurveyRow, SurveySummaryRow};
use crate::state::AppState;
use crate::surveys::export::{export_filename, to_xlsx, XLSX_CONTENT_TYPE};
use crate::surveys::store::{
    delete_survey, get_survey, insert_response, insert_survey, list_responses,
    list_surveys_for_owner, NewSurvey,
};
use crate::surveys::validation::{validate_answers, validate_questions, validate_title};

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub title: String,
    pub description: String,
    pub template: Option<String>,
    pub questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSurveyRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Reviewed questions. When absent the suggested questions are used.
    pub questions: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct SurveyDetail {
    pub share_url: String,
    pub survey: SurveyRow,
}

#[derive(Debug, Serialize)]
pub struct SurveyListItem {
    pub share_url: String,
    #[serde(flatten)]
    pub survey: SurveySummaryRow,
}

#[derive(Debug, Deserialize)]
pub struct SubmitResponseRequest {
    #[serde(default)]
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponseResponse {
    pub id: String,
    pub submitted_at: DateTime<Utc>,
}

/// Missing survey is 404; someone else's survey is 403.
fn ensure_owner(
    survey: Option<SurveyRow>,
    survey_id: &str,
    user_id: Uuid,
) -> Result<SurveyRow, AppError> {
    let survey =
        survey.ok_or_else(|| AppError::NotFound(format!("Survey {survey_id} not found")))?;
    if survey.owner_id != user_id {
        return Err(AppError::Forbidden);
    }
    Ok(survey)
}

/// Respondent-facing lookup, no ownership involved.
fn require_survey(survey: Option<SurveyRow>) -> Result<SurveyRow, AppError> {
    survey.ok_or_else(|| AppError::NotFound("Survey not found".to_string()))
}

/// Loads a survey and checks that `user_id` owns it.
async fn load_owned_survey(
    state: &AppState,
    survey_id: &str,
    user_id: Uuid,
) -> Result<SurveyRow, AppError> {
    ensure_owner(get_survey(&state.db, survey_id).await?, survey_id, user_id)
}

/// POST /api/v1/surveys/draft
pub async fn handle_draft(
    State(state): State<AppState>,
    Json(req): Json<DraftRequest>,
) -> Result<Json<DraftResponse>, AppError> {
    let title = validate_title(&req.title)?;
    let description = req.description.trim().to_string();
    let suggestion = state.selector.suggest(&description);

    Ok(Json(DraftResponse {
        title,
        description,
        template: suggestion.template,
        questions: suggestion.questions,
    }))
}

/// POST /api/v1/surveys
pub async fn handle_create_survey(
    State(state): State<AppState>,
    Json(req): Json<CreateSurveyRequest>,
) -> Result<(StatusCode, Json<SurveyDetail>), AppError> {
    let title = validate_title(&req.title)?;
    let description = req.description.trim().to_string();
    let questions = match &req.questions {
        Some(questions) => validate_questions(questions)?,
        None => state.selector.select(&description),
    };

    if !user_exists(&state.db, req.user_id).await? {
        return Err(AppError::NotFound(format!("User {} not found", req.user_id)));
    }

    let survey = insert_survey(
        &state.db,
        NewSurvey {
            owner_id: req.user_id,
            title: &title,
            description: &description,
            questions: &questions,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SurveyDetail {
            share_url: state.config.share_url(&survey.id),
            survey,
        }),
    ))
}

/// GET /api/v1/surveys
pub async fn handle_list_surveys(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<SurveyListItem>>, AppError> {
    let surveys = list_surveys_for_owner(&state.db, params.user_id).await?;
    Ok(Json(
        surveys
            .into_iter()
            .map(|survey| SurveyListItem {
                share_url: state.config.share_url(&survey.id),
                survey,
            })
            .collect(),
    ))
}

/// GET /api/v1/surveys/:id
pub async fn handle_get_survey(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SurveyDetail>, AppError> {
    let survey = load_owned_survey(&state, &id, params.user_id).await?;
    Ok(Json(SurveyDetail {
        share_url: state.config.share_url(&survey.id),
        survey,
    }))
}

/// DELETE /api/v1/surveys/:id
pub async fn handle_delete_survey(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    load_owned_survey(&state, &id, params.user_id).await?;
    if !delete_survey(&state.db, &id).await? {
        return Err(AppError::NotFound(format!("Survey {id} not found")));
    }
    info!("Deleted survey {id}");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/surveys/:id/responses
pub async fn handle_list_responses(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ResponseRow>>, AppError> {
    load_owned_survey(&state, &id, params.user_id).await?;
    Ok(Json(list_responses(&state.db, &id).await?))
}

/// GET /api/v1/surveys/:id/export
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let survey = load_owned_survey(&state, &id, params.user_id).await?;
    let responses = list_responses(&state.db, &id).await?;

    let bytes = to_xlsx(&survey, &responses).map_err(|e| AppError::Export(e.to_string()))?;
    let filename = export_filename(&survey.title, Utc::now().date_naive());
    info!(
        "Exported {} responses for survey {} ({} bytes)",
        responses.len(),
        survey.id,
        bytes.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}

/// GET /api/v1/public/surveys/:id
pub async fn handle_get_public_survey(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PublicSurvey>, AppError> {
    let survey = require_survey(get_survey(&state.db, &id).await?)?;
    Ok(Json(PublicSurvey::from(survey)))
}

/// POST /api/v1/public/surveys/:id/responses
pub async fn handle_submit_response(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SubmitResponseRequest>,
) -> Result<(StatusCode, Json<SubmitResponseResponse>), AppError> {
    let survey = require_survey(get_survey(&state.db, &id).await?)?;
    let answers = validate_answers(&survey.questions, &req.answers)?;

    let response = insert_response(&state.db, &survey.id, &answers).await?;
    Ok((
        StatusCode::CREATED,
        Json(SubmitResponseResponse {
            id: response.id,
            submitted_at: response.submitted_at,
        }),
    ))
}
