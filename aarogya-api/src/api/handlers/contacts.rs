use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument, warn};
use validator::Validate;

use aarogya_domain::services::ContactServiceError;

use crate::api::routes::AppState;
use crate::entities::common::PublicErrorResponse;
use crate::entities::contacts::{
    ContactQueryParams, ContactResponse, CreateContactRequest, DeleteContactParams,
};

fn contact_error_response(err: ContactServiceError) -> Response {
    match err {
        ContactServiceError::Validation(msg) => {
            PublicErrorResponse::bad_request(&msg).into_response()
        }
        ContactServiceError::NotFound(msg) => PublicErrorResponse::not_found(&msg).into_response(),
        other => {
            error!("Contact storage failure: {}", other);
            PublicErrorResponse::internal_error().into_response()
        }
    }
}

/// Add an emergency contact
#[utoipa::path(
    post,
    path = "/api/v1/emergency-contacts",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Contact stored", body = ContactResponse),
        (status = 400, description = "Required fields are missing", body = PublicErrorResponse),
        (status = 500, description = "Storage failure", body = PublicErrorResponse),
    ),
    tag = "contacts"
)]
#[instrument(skip(state, request))]
pub async fn create_contact(
    State(state): State<AppState>,
    Json(request): Json<CreateContactRequest>,
) -> Response {
    if let Err(errors) = request.validate() {
        warn!("Invalid contact request");
        let details = serde_json::to_value(&errors).unwrap_or(serde_json::Value::Null);
        return PublicErrorResponse::validation_error(
            "user_id, name, phone and relation are required",
            Some(details),
        )
        .into_response();
    }

    let user_id = request.user_id.unwrap_or_default();
    let name = request.name.unwrap_or_default();
    let phone = request.phone.unwrap_or_default();
    let relation = request.relation.unwrap_or_default();

    info!("Adding emergency contact");

    match state
        .contacts
        .add_contact(&user_id, &name, &phone, &relation)
        .await
    {
        Ok(contact) => (StatusCode::CREATED, Json(ContactResponse::from(contact))).into_response(),
        Err(e) => contact_error_response(e),
    }
}

/// List a user's emergency contacts, newest first
#[utoipa::path(
    get,
    path = "/api/v1/emergency-contacts",
    params(ContactQueryParams),
    responses(
        (status = 200, description = "Emergency contacts", body = [ContactResponse]),
        (status = 400, description = "user_id is missing", body = PublicErrorResponse),
        (status = 500, description = "Storage failure", body = PublicErrorResponse),
    ),
    tag = "contacts"
)]
#[instrument(skip(state))]
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(params): Query<ContactQueryParams>,
) -> Response {
    let user_id = params.user_id.unwrap_or_default();

    match state.contacts.list_contacts(&user_id).await {
        Ok(contacts) => {
            let contacts: Vec<ContactResponse> = contacts.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(contacts)).into_response()
        }
        Err(e) => contact_error_response(e),
    }
}

/// Delete an emergency contact; scoped to the owning user
#[utoipa::path(
    delete,
    path = "/api/v1/emergency-contacts",
    params(DeleteContactParams),
    responses(
        (status = 200, description = "Contact deleted"),
        (status = 400, description = "id or user_id is missing", body = PublicErrorResponse),
        (status = 404, description = "Contact not found", body = PublicErrorResponse),
        (status = 500, description = "Storage failure", body = PublicErrorResponse),
    ),
    tag = "contacts"
)]
#[instrument(skip(state))]
pub async fn delete_contact(
    State(state): State<AppState>,
    Query(params): Query<DeleteContactParams>,
) -> Response {
    let id = params.id.unwrap_or_default();
    let user_id = params.user_id.unwrap_or_default();

    if id.is_empty() || user_id.is_empty() {
        return PublicErrorResponse::bad_request("id and user_id are required").into_response();
    }

    info!("Deleting emergency contact {}", id);

    match state.contacts.delete_contact(&id, &user_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Contact deleted" })),
        )
            .into_response(),
        Err(e) => contact_error_response(e),
    }
}
