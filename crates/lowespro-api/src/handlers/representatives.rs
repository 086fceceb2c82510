//! /api/representatives

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lowespro_core::models::{NewRepresentative, Representative, RepresentativePatch};
use serde::Deserialize;

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub id: Option<String>,
    pub search: Option<String>,
    pub vendor_id: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    if let Some(id) = query.id {
        let rep = state.store.get_representative(&id)?;
        return Ok(Json(rep).into_response());
    }
    let reps = state
        .store
        .list_representatives(query.search.as_deref(), query.vendor_id.as_deref())?;
    Ok(Json(reps).into_response())
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewRepresentative>, JsonRejection>,
) -> Result<(StatusCode, Json<Representative>), ApiError> {
    let Json(new) = payload?;
    new.validate()?;
    let rep = state.store.create_representative(new)?;
    Ok((StatusCode::CREATED, Json(rep)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Representative>, ApiError> {
    Ok(Json(state.store.get_representative(&id)?))
}

pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RepresentativePatch>, JsonRejection>,
) -> Result<Json<Representative>, ApiError> {
    let Json(patch) = payload?;
    patch.validate()?;
    Ok(Json(state.store.patch_representative(&id, patch)?))
}

pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewRepresentative>, JsonRejection>,
) -> Result<Json<Representative>, ApiError> {
    let Json(new) = payload?;
    new.validate()?;
    Ok(Json(state.store.replace_representative(&id, new)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Representative>, ApiError> {
    Ok(Json(state.store.delete_representative(&id)?))
}
