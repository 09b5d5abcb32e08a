use super::models::Candidat;
use super::store::StoreError;
use crate::common::{ApiError, AppState};
use axum::{
    extract::{Extension, Path},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::debug;

const ENTITY_NAME: &str = "candidat";
const RESOURCE_PATH: &str = "/api/candidats";

// ============================================================================
// Candidat CRUD Handlers
// ============================================================================

/// POST /api/candidats - Create a new candidat
///
/// 201 with the saved candidat and a `Location` header, or 400 with a
/// failure alert when the candidat already has an ID.
pub async fn create_candidat(
    Extension(state): Extension<Arc<AppState>>,
    Json(candidat): Json<Candidat>,
) -> Result<Response, ApiError> {
    debug!(candidat = ?candidat, "REST request to save Candidat");
    create(&state, candidat).await
}

/// PUT /api/candidats - Update an existing candidat
///
/// A candidat without an ID is created instead, with the POST contract.
pub async fn update_candidat(
    Extension(state): Extension<Arc<AppState>>,
    Json(candidat): Json<Candidat>,
) -> Result<Response, ApiError> {
    debug!(candidat = ?candidat, "REST request to update Candidat");

    let Some(id) = candidat.id else {
        return create(&state, candidat).await;
    };

    let result = state.store.save(candidat).await?;
    let headers = state.alerts.entity_update_alert(ENTITY_NAME, &id.to_string());

    Ok((headers, Json(result)).into_response())
}

/// GET /api/candidats - Get all candidats
pub async fn get_all_candidats(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("REST request to get all Candidats");

    let candidats = state.store.find_all().await?;

    Ok(Json(candidats))
}

/// GET /api/candidats/:id - Get candidat by ID, 404 with empty body if absent
pub async fn get_candidat(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    debug!(candidat_id = id, "REST request to get Candidat");

    match state.store.find_one(id).await? {
        Some(candidat) => Ok(Json(candidat).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// DELETE /api/candidats/:id - Delete candidat
///
/// Deleting an unknown ID is not an error.
pub async fn delete_candidat(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(candidat_id = id, "REST request to delete Candidat");

    state.store.delete(id).await?;

    Ok((
        StatusCode::OK,
        state.alerts.entity_deletion_alert(ENTITY_NAME, &id.to_string()),
    ))
}

async fn create(state: &AppState, candidat: Candidat) -> Result<Response, ApiError> {
    if candidat.id.is_some() {
        let message = "A new candidat cannot already have an ID";
        return Err(ApiError::InvalidRequest {
            message: message.to_string(),
            headers: state.alerts.failure_alert(ENTITY_NAME, "idexists", message),
        });
    }

    let result = state.store.save(candidat).await?;
    let id = result.id.ok_or(StoreError::MissingIdentifier)?;

    let location = format!("{}/{}", RESOURCE_PATH, id);
    let headers = state.alerts.entity_creation_alert(ENTITY_NAME, &id.to_string());

    Ok((StatusCode::CREATED, [(LOCATION, location)], headers, Json(result)).into_response())
}
