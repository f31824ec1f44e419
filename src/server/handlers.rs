//! HTTP handlers for the contacts API.
//!
//! Each handler adapts request parts into one service call and the result
//! into a response; no business rules live here.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use super::error::ApiError;
use super::state::AppState;
use crate::domain::{ListParams, ListQuery};
use crate::models::{Contact, ContactPage, ContactPayload};

fn body_or_bad_request(
    body: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<ContactPayload, ApiError> {
    body.map(|Json(payload)| payload)
        .map_err(|rejection| ApiError::BadRequest {
            message: "Invalid request body.",
            error: rejection.body_text(),
        })
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /contacts`
pub async fn list_contacts(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ContactPage>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest {
        message: "Invalid query string.",
        error: rejection.body_text(),
    })?;

    let params = ListParams::parse(&query).map_err(ApiError::Validation)?;

    state
        .contacts()
        .list(params)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, "Failed to fetch contacts."))
}

/// `GET /contacts/{id}`
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError> {
    state
        .contacts()
        .get(&id)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, "Failed to fetch contact by id."))
}

/// `POST /contacts`
pub async fn create_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let payload = body_or_bad_request(body)?;

    let contact = state
        .contacts()
        .create(payload)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to create contact."))?;

    Ok((StatusCode::CREATED, Json(contact)))
}

/// `PUT /contacts/{id}`
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<Json<Contact>, ApiError> {
    let payload = body_or_bad_request(body)?;

    state
        .contacts()
        .update(&id, payload)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, "Failed to update contact."))
}

/// `DELETE /contacts/{id}`
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .contacts()
        .delete(&id)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to delete contact."))?;

    Ok(Json(json!({ "message": "Contact deleted successfully" })))
}
