use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::templates::selector::TemplateSelector;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Question template selector. Immutable, so no lock is needed.
    pub selector: Arc<TemplateSelector>,
}
