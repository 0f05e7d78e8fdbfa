use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use crate::templates::selector::Suggestion;

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub name: String,
    pub keywords: Vec<String>,
    pub question_count: usize,
}

/// POST /api/v1/questions/suggest
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(req): Json<SuggestRequest>,
) -> Json<Suggestion> {
    Json(state.selector.suggest(&req.description))
}

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<Vec<TemplateSummary>> {
    let templates = state
        .selector
        .templates()
        .iter()
        .map(|t| TemplateSummary {
            name: t.name.clone(),
            keywords: t.keywords.clone(),
            question_count: t.questions.len(),
        })
        .collect();
    Json(templates)
}
