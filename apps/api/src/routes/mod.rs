pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::state::AppState;
use crate::surveys::handlers as surveys;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/register", post(auth::handle_register))
        .route("/api/v1/auth/login", post(auth::handle_login))
        // Question templates
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route("/api/v1/questions/suggest", post(templates::handle_suggest))
        // Survey authoring (owner-scoped by user_id)
        .route("/api/v1/surveys/draft", post(surveys::handle_draft))
        .route(
            "/api/v1/surveys",
            get(surveys::handle_list_surveys).post(surveys::handle_create_survey),
        )
        .route(
            "/api/v1/surveys/:id",
            get(surveys::handle_get_survey).delete(surveys::handle_delete_survey),
        )
        .route(
            "/api/v1/surveys/:id/responses",
            get(surveys::handle_list_responses),
        )
        .route("/api/v1/surveys/:id/export", get(surveys::handle_export))
        // Public survey form, no login
        .route(
            "/api/v1/public/surveys/:id",
            get(surveys::handle_get_public_survey),
        )
        .route(
            "/api/v1/public/surveys/:id/responses",
            post(surveys::handle_submit_response),
        )
        .with_state(state)
}
