use std::sync::Arc;

use crate::scoring::store::ScoreStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable score store. Default: PgScoreStore.
    pub score_store: Arc<dyn ScoreStore>,
}
