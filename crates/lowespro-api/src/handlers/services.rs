//! /api/services

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lowespro_core::models::{NewService, Service, ServicePatch};
use serde::Deserialize;

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub id: Option<String>,
    pub search: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    if let Some(id) = query.id {
        let service = state.store.get_service(&id)?;
        return Ok(Json(service).into_response());
    }
    let services = state.store.list_services(query.search.as_deref())?;
    Ok(Json(services).into_response())
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewService>, JsonRejection>,
) -> Result<(StatusCode, Json<Service>), ApiError> {
    let Json(new) = payload?;
    new.validate()?;
    let service = state.store.create_service(new)?;
    Ok((StatusCode::CREATED, Json(service)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Service>, ApiError> {
    Ok(Json(state.store.get_service(&id)?))
}

pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ServicePatch>, JsonRejection>,
) -> Result<Json<Service>, ApiError> {
    let Json(patch) = payload?;
    patch.validate()?;
    Ok(Json(state.store.patch_service(&id, patch)?))
}

pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewService>, JsonRejection>,
) -> Result<Json<Service>, ApiError> {
    let Json(new) = payload?;
    new.validate()?;
    Ok(Json(state.store.replace_service(&id, new)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Service>, ApiError> {
    Ok(Json(state.store.delete_service(&id)?))
}
