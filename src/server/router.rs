//! Axum router construction.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Build the game router.
///
/// - `GET /get-current-event`
/// - `POST /make-choice`
/// - `GET /get-stem-recommendation`
/// - `POST /reset-game`
/// - `POST /create-character`
/// - `GET /health`
///
/// Requests with an unsupported method on a known path get a JSON 405.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/get-current-event", get(handlers::get_current_event))
        .route("/make-choice", post(handlers::make_choice))
        .route("/get-stem-recommendation", get(handlers::get_stem_recommendation))
        .route("/reset-game", post(handlers::reset_game))
        .route("/create-character", post(handlers::create_character))
        .route("/health", get(handlers::health))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
