//! Request handlers.
//!
//! Each handler resolves the calling account to its player and delegates
//! to the engine. Request bodies are read as raw bytes and decoded here so
//! that malformed JSON surfaces as a regular `{"error"}` response.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, StemLifeError};
use crate::property::PlayerId;
use crate::simulator::{Ack, ChoiceResult, CurrentEvent, RecommendationView};

use super::error::error_response;
use super::identity::Account;
use super::state::AppState;

/// Body of `POST /make-choice`
#[derive(Debug, Deserialize)]
struct MakeChoiceRequest {
    choice_index: Option<Value>,
}

/// Body of `POST /create-character`
#[derive(Debug, Deserialize)]
struct CreateCharacterRequest {
    name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedCharacter {
    pub success: bool,
    pub player_id: PlayerId,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub events: usize,
}

fn parse_body<T: for<'de> Deserialize<'de>>(body: &Bytes) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| StemLifeError::MalformedInput(format!("invalid JSON body: {e}")))
}

/// `choice_index` must be present and integral; range is checked by the engine
fn choice_index(request: &MakeChoiceRequest) -> Result<i64> {
    let value = request
        .choice_index
        .as_ref()
        .ok_or_else(|| StemLifeError::MalformedInput("choice_index is required".to_string()))?;
    value
        .as_i64()
        .ok_or_else(|| StemLifeError::MalformedInput("choice_index must be an integer".to_string()))
}

/// `GET /get-current-event`
pub async fn get_current_event(
    State(state): State<Arc<AppState>>,
    Account(account): Account,
) -> Result<Json<CurrentEvent>> {
    let id = state.engine.player_for_account(account)?;
    Ok(Json(state.engine.current_event(id)?))
}

/// `POST /make-choice`
pub async fn make_choice(
    State(state): State<Arc<AppState>>,
    Account(account): Account,
    body: Bytes,
) -> Result<Json<ChoiceResult>> {
    let request: MakeChoiceRequest = parse_body(&body)?;
    let index = choice_index(&request)?;
    let id = state.engine.player_for_account(account)?;
    Ok(Json(state.engine.make_choice(id, index)?))
}

/// `GET /get-stem-recommendation`
pub async fn get_stem_recommendation(
    State(state): State<Arc<AppState>>,
    Account(account): Account,
) -> Result<Json<RecommendationView>> {
    let id = state.engine.player_for_account(account)?;
    Ok(Json(state.engine.stem_recommendation(id)?))
}

/// `POST /reset-game`
pub async fn reset_game(
    State(state): State<Arc<AppState>>,
    Account(account): Account,
) -> Result<Json<Ack>> {
    let id = state.engine.player_for_account(account)?;
    state.engine.reset_game(id)?;
    Ok(Json(Ack::OK))
}

/// `POST /create-character`
pub async fn create_character(
    State(state): State<Arc<AppState>>,
    Account(account): Account,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedCharacter>)> {
    let request: CreateCharacterRequest = parse_body(&body)?;
    let name = request
        .name
        .ok_or_else(|| StemLifeError::MalformedInput("name is required".to_string()))?;
    let player_id = state.engine.create_character(account, &name)?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedCharacter {
            success: true,
            player_id,
        }),
    ))
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        events: state.engine.catalog().len(),
    })
}

pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

pub async fn not_found() -> impl IntoResponse {
    error_response(StatusCode::NOT_FOUND, "Not found")
}
