use amerbrit::{ErrorResponse, TranslateError, TranslateRequest, TranslateResponse, Translator};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/health", get(health))
        .route("/api/translate", post(translate_text))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Validation failures are answered with a `{ "error": ... }` body and a
/// 200 status, the same as a successful translation. A body that is not a
/// readable JSON request counts as missing fields.
async fn translate_text(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, Json<ErrorResponse>> {
    let Json(request) = payload.map_err(|e| {
        warn!(error = %e, "unreadable translation request");
        Json(ErrorResponse::from(TranslateError::MissingField))
    })?;

    let (text, direction) = request.validate().map_err(|e| {
        warn!(error = %e, "rejected translation request");
        Json(ErrorResponse::from(e))
    })?;

    debug!("Translating '{}' ({})", text, direction);
    let result = state
        .translator
        .translate(text, direction)
        .map_err(|e| Json(ErrorResponse::from(e)))?;

    info!(
        %direction,
        changes = result.change_count(),
        "translated text"
    );
    Ok(Json(result.to_response()))
}
