//! REST endpoints for the travel conversation engine.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use crate::catalog::places;
use crate::engine::machine::TurnOutput;
use crate::engine::{ConversationEngine, Session};
use crate::error::{EngineError, Error};

/// Shared state for all routes.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ConversationEngine>,
}

/// Request body for every message-bearing endpoint.
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    /// Client-supplied session id; a fresh one is minted when absent.
    pub session_id: Option<String>,
}

/// Response body for conversation endpoints.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub workflow: &'static str,
    /// External phase label: "yasmine" while choosing, "qa" after.
    pub phase: String,
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partners: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<String>,
}

impl ChatResponse {
    fn from_turn(session_id: String, output: TurnOutput) -> Self {
        Self {
            session_id,
            workflow: "chouchane",
            phase: output.phase.public_label().to_string(),
            reply: output.reply,
            partners: output.partners,
            chosen_place: output.chosen_place,
            quiz: output.quiz_prompt,
        }
    }
}

/// Catalog entry as exposed over the API (scoring fields omitted).
#[derive(Debug, Serialize)]
pub struct PlaceSummary {
    pub name: &'static str,
    pub region: &'static str,
    pub vibe: &'static str,
    pub description: &'static str,
    pub top_activities: &'static [&'static str],
    pub insider_tip: &'static str,
    pub season: &'static str,
}

/// Session snapshot returned by the inspection endpoint.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: String,
    pub phase: String,
    pub turns: usize,
    pub recommended_places: Vec<String>,
    pub chosen_place: Option<String>,
    pub quiz_outcome: Option<String>,
}

impl SessionView {
    fn from_session(session: Session) -> Self {
        Self {
            session_id: session.id,
            phase: session.phase.public_label().to_string(),
            turns: session.transcript.len(),
            recommended_places: session.recommended_places,
            chosen_place: session.chosen_place,
            quiz_outcome: session
                .quiz
                .map(|q| format!("{:?}", q.outcome).to_lowercase()),
        }
    }
}

/// Map engine errors onto HTTP status codes.
fn error_response(error: Error) -> Response {
    let (status, message) = match &error {
        Error::Engine(EngineError::UnknownSession(_)) => {
            (StatusCode::NOT_FOUND, error.to_string())
        }
        Error::Engine(_) => (StatusCode::BAD_REQUEST, error.to_string()),
        Error::Gen(_) => (StatusCode::BAD_GATEWAY, error.to_string()),
        Error::Store(_) | Error::Config(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    };
    tracing::warn!(status = %status, error = %message, "Request failed");
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// GET /health
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /places — the public destination catalog.
async fn list_places() -> impl IntoResponse {
    let summaries: Vec<PlaceSummary> = places::all()
        .iter()
        .map(|p| PlaceSummary {
            name: p.name,
            region: p.region,
            vibe: p.vibe,
            description: p.description,
            top_activities: p.top_activities,
            insider_tip: p.insider_tip,
            season: p.season,
        })
        .collect();
    Json(summaries)
}

/// POST /session/start — create a session and return the welcome banner
/// plus the opening greeting.
async fn start_session(
    State(state): State<AppState>,
    Json(request): Json<SessionRequest>,
) -> Response {
    let id = request
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    match state.engine.start(&id).await {
        Ok(mut output) => {
            output.reply = format!("{}\n\n{}", crate::engine::prompts::WELCOMING, output.reply);
            Json(ChatResponse::from_turn(id, output)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// POST /session/reset — wipe the session and start over.
async fn reset_session(
    State(state): State<AppState>,
    Json(request): Json<SessionRequest>,
) -> Response {
    let Some(id) = request.session_id else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "session_id is required" })),
        )
            .into_response();
    };
    match state.engine.reset(&id).await {
        Ok(mut output) => {
            output.reply = format!("{}\n\n{}", crate::engine::prompts::WELCOMING, output.reply);
            Json(ChatResponse::from_turn(id, output)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// GET /session/{id} — session snapshot.
async fn get_session(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.engine.inspect(&id).await {
        Ok(session) => Json(SessionView::from_session(session)).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /yasmine — one recommendation-phase turn.
async fn yasmine_turn(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> Response {
    match state.engine.advance(&request.session_id, &request.message).await {
        Ok(output) => Json(ChatResponse::from_turn(request.session_id, output)).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /quiz — one quiz turn for a committed session.
async fn quiz_turn(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> Response {
    let session_id = request.session_id.clone();
    match state.engine.quiz_turn(&request.session_id, &request.message).await {
        Ok(reply) => Json(serde_json::json!({
            "session_id": session_id,
            "workflow": "chouchane",
            "reply": reply,
        }))
        .into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /qa — one expert Q&A turn.
async fn qa_turn(State(state): State<AppState>, Json(request): Json<MessageRequest>) -> Response {
    let session_id = request.session_id.clone();
    match state.engine.qa_turn(&request.session_id, &request.message).await {
        Ok(reply) => Json(serde_json::json!({
            "session_id": session_id,
            "workflow": "chouchane",
            "phase": "qa",
            "reply": reply,
        }))
        .into_response(),
        Err(e) => error_response(e),
    }
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/places", get(list_places))
        .route("/session/start", post(start_session))
        .route("/session/reset", post(reset_session))
        .route("/session/{id}", get(get_session))
        .route("/yasmine", post(yasmine_turn))
        .route("/quiz", post(quiz_turn))
        .route("/qa", post(qa_turn))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
