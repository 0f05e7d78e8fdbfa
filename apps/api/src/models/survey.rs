use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SurveyRow {
    pub id: String,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub questions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Dashboard listing row: a survey plus how many responses it has collected.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SurveySummaryRow {
    pub id: String,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub questions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub response_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResponseRow {
    pub id: String,
    pub survey_id: String,
    pub answers: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

/// What respondents see: no owner, no responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicSurvey {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<String>,
}

impl From<SurveyRow> for PublicSurvey {
    fn from(row: SurveyRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            questions: row.questions,
        }
    }
}
