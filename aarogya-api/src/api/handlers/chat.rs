use std::convert::Infallible;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{
        sse::{Event, Sse},
        IntoResponse, Response,
    },
};
use futures::{stream, Stream, StreamExt};
use serde_json::json;
use tracing::{info, instrument, warn};

use aarogya_domain::ai::TokenStream;
use aarogya_domain::services::ChatServiceError;

use crate::api::handlers::map_ai_error;
use crate::api::routes::AppState;
use crate::entities::chat::{ChatRequest, SupportResponse};
use crate::entities::common::PublicErrorResponse;

/// Relay an upstream token stream as SSE frames terminated by [DONE].
/// Each token is framed in the provider's delta shape so existing
/// clients can parse the frames unchanged.
fn sse_relay(upstream: TokenStream) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let frames = upstream
        .map(|chunk| {
            let event = match chunk {
                Ok(token) => Event::default()
                    .data(json!({ "choices": [{ "delta": { "content": token } }] }).to_string()),
                Err(e) => {
                    warn!("Stream relay error: {}", e);
                    Event::default().data(json!({ "error": e.to_string() }).to_string())
                }
            };
            Ok(event)
        })
        .chain(stream::once(async { Ok(Event::default().data("[DONE]")) }));

    Sse::new(frames)
}

fn stream_error_response(err: ChatServiceError) -> Response {
    match err {
        ChatServiceError::Validation(msg) => PublicErrorResponse::bad_request(&msg).into_response(),
        ChatServiceError::Ai(e) => map_ai_error(&e).into_response(),
    }
}

/// Symptom triage chat, streamed as SSE
#[utoipa::path(
    post,
    path = "/api/v1/chat/symptoms",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Token stream relayed as SSE"),
        (status = 400, description = "Message is missing", body = PublicErrorResponse),
        (status = 500, description = "Upstream provider error", body = PublicErrorResponse),
    ),
    tag = "chat"
)]
#[instrument(skip(state, request))]
pub async fn symptom_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    info!("Symptom chat requested");

    let message = request.message.unwrap_or_default();
    match state.chat.symptom_stream(&message).await {
        Ok(upstream) => sse_relay(upstream).into_response(),
        Err(e) => stream_error_response(e),
    }
}

/// Lab-report explainer chat, streamed as SSE
#[utoipa::path(
    post,
    path = "/api/v1/chat/lab-report",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Token stream relayed as SSE"),
        (status = 400, description = "Message is missing", body = PublicErrorResponse),
        (status = 500, description = "Upstream provider error", body = PublicErrorResponse),
    ),
    tag = "chat"
)]
#[instrument(skip(state, request))]
pub async fn lab_report_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    info!("Lab report chat requested");

    let message = request.message.unwrap_or_default();
    match state.chat.lab_report_stream(&message).await {
        Ok(upstream) => sse_relay(upstream).into_response(),
        Err(e) => stream_error_response(e),
    }
}

/// Mental-health support assistant, strict JSON reply
#[utoipa::path(
    post,
    path = "/api/v1/chat/support",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Structured support reply", body = SupportResponse),
        (status = 400, description = "Message is missing", body = PublicErrorResponse),
        (status = 500, description = "Upstream provider or parse error", body = PublicErrorResponse),
    ),
    tag = "chat"
)]
#[instrument(skip(state, request))]
pub async fn support_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    info!("Support chat requested");

    let message = request.message.unwrap_or_default();
    match state.chat.support_reply(&message).await {
        Ok(reply) => (StatusCode::OK, Json(SupportResponse::from(reply))).into_response(),
        Err(e) => stream_error_response(e),
    }
}
