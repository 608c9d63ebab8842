//! HTTP surface: router construction and the request handlers.

use crate::dispatch::{ContactError, ContactRequest, Dispatcher, Reply};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
}

/// Build the application router. The form is posted from arbitrary origins,
/// so CORS is wide open, matching the deployed frontend setup.
pub fn app(dispatcher: Dispatcher) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/contact", post(contact))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState { dispatcher })
}

async fn contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<Reply>, ContactError> {
    let reply = state.dispatcher.handle(payload).await?;
    Ok(Json(reply))
}

async fn health() -> &'static str {
    "OK"
}
