pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/scoring/preview", post(handlers::handle_preview))
        .route(
            "/api/v1/assessments/:id/score",
            post(handlers::handle_score_session),
        )
        .route("/api/v1/scores", get(handlers::handle_list_scores))
        .route(
            "/api/v1/modules/:code/dimensions",
            get(handlers::handle_module_dimensions),
        )
        .with_state(state)
}
