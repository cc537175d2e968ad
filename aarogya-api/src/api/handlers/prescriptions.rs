use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Multipart, Path, Query, State},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Json, Response},
};
use tracing::{error, info, instrument, warn};

use aarogya_domain::auth::{verify_token, AuthConfig};
use aarogya_domain::services::PrescriptionServiceError;

use crate::api::routes::AppState;
use crate::entities::common::PublicErrorResponse;
use crate::entities::prescriptions::{DeletePrescriptionParams, PrescriptionResponse};

/// The authenticated user, extracted from the Authorization header.
/// Rejects with 401 when the bearer token is missing or invalid.
pub struct AuthUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match token {
            Some(token) => {
                let config = AuthConfig::from_env();
                verify_token(&config.secret, token)
                    .map(AuthUser)
                    .map_err(|_| PublicErrorResponse::unauthorized().into_response())
            }
            None => Err(PublicErrorResponse::unauthorized().into_response()),
        }
    }
}

fn prescription_error_response(err: PrescriptionServiceError) -> Response {
    match err {
        PrescriptionServiceError::Validation(msg) => {
            PublicErrorResponse::bad_request(&msg).into_response()
        }
        PrescriptionServiceError::NotFound(msg) => {
            PublicErrorResponse::not_found(&msg).into_response()
        }
        PrescriptionServiceError::InvalidToken => {
            PublicErrorResponse::unauthorized().into_response()
        }
        other => {
            error!("Prescription failure: {}", other);
            PublicErrorResponse::internal_error().into_response()
        }
    }
}

/// Fields pulled out of a prescription upload form
struct UploadForm {
    title: Option<String>,
    date: Option<String>,
    file_name: Option<String>,
    bytes: Option<Vec<u8>>,
}

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, Response> {
    let mut form = UploadForm {
        title: None,
        date: None,
        file_name: None,
        bytes: None,
    };

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed multipart body: {}", e);
                return Err(
                    PublicErrorResponse::bad_request("Malformed multipart body").into_response()
                );
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("title") => form.title = field.text().await.ok(),
            Some("date") => form.date = field.text().await.ok(),
            Some("file") => {
                form.file_name = field.file_name().map(str::to_string);
                form.bytes = field.bytes().await.ok().map(|b| b.to_vec());
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Upload a prescription file with its metadata
#[utoipa::path(
    post,
    path = "/api/v1/prescriptions",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Prescription stored", body = PrescriptionResponse),
        (status = 400, description = "title, date or file is missing", body = PublicErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = PublicErrorResponse),
        (status = 500, description = "Storage failure", body = PublicErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "prescriptions"
)]
#[instrument(skip(state, multipart))]
pub async fn upload_prescription(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    multipart: Multipart,
) -> Response {
    let form = match read_upload_form(multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let (title, date, file_name, bytes) = match (form.title, form.date, form.file_name, form.bytes)
    {
        (Some(title), Some(date), Some(file_name), Some(bytes)) => (title, date, file_name, bytes),
        _ => {
            return PublicErrorResponse::bad_request("title, date and file are required")
                .into_response()
        }
    };

    info!("Uploading prescription");

    match state
        .prescriptions
        .upload(&user_id, &title, &date, &file_name, bytes)
        .await
    {
        Ok(prescription) => (
            StatusCode::CREATED,
            Json(PrescriptionResponse::from(prescription)),
        )
            .into_response(),
        Err(e) => prescription_error_response(e),
    }
}

/// List the authenticated user's prescriptions, newest first
#[utoipa::path(
    get,
    path = "/api/v1/prescriptions",
    responses(
        (status = 200, description = "Prescriptions with signed URLs", body = [PrescriptionResponse]),
        (status = 401, description = "Missing or invalid bearer token", body = PublicErrorResponse),
        (status = 500, description = "Storage failure", body = PublicErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "prescriptions"
)]
#[instrument(skip(state))]
pub async fn list_prescriptions(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Response {
    match state.prescriptions.list(&user_id).await {
        Ok(prescriptions) => {
            let prescriptions: Vec<PrescriptionResponse> =
                prescriptions.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(prescriptions)).into_response()
        }
        Err(e) => prescription_error_response(e),
    }
}

/// Delete a prescription; the stored file is removed before the row
#[utoipa::path(
    delete,
    path = "/api/v1/prescriptions",
    params(DeletePrescriptionParams),
    responses(
        (status = 200, description = "Prescription deleted"),
        (status = 400, description = "id is missing", body = PublicErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = PublicErrorResponse),
        (status = 404, description = "Prescription not found", body = PublicErrorResponse),
        (status = 500, description = "Storage failure", body = PublicErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "prescriptions"
)]
#[instrument(skip(state))]
pub async fn delete_prescription(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(params): Query<DeletePrescriptionParams>,
) -> Response {
    let id = params.id.unwrap_or_default();
    if id.is_empty() {
        return PublicErrorResponse::bad_request("id is required").into_response();
    }

    info!("Deleting prescription {}", id);

    match state.prescriptions.delete(&id, &user_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Prescription deleted" })),
        )
            .into_response(),
        Err(e) => prescription_error_response(e),
    }
}

/// Redeem a signed URL token for the stored prescription file
#[utoipa::path(
    get,
    path = "/api/v1/prescriptions/files/{token}",
    params(("token" = String, Path, description = "Signed file token")),
    responses(
        (status = 200, description = "The stored file"),
        (status = 401, description = "Invalid or expired token", body = PublicErrorResponse),
        (status = 404, description = "File not found", body = PublicErrorResponse),
    ),
    tag = "prescriptions"
)]
#[instrument(skip(state, token))]
pub async fn open_prescription_file(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Response {
    match state.prescriptions.open_file(&token).await {
        Ok(file) => {
            let disposition = format!("inline; filename=\"{}\"", file.file_name);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/octet-stream".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                file.bytes,
            )
                .into_response()
        }
        Err(e) => prescription_error_response(e),
    }
}
