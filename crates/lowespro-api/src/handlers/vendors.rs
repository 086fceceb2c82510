//! /api/vendors

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lowespro_core::models::{NewVendor, Vendor, VendorPatch};
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
        let vendor = state.store.get_vendor(&id)?;
        return Ok(Json(vendor).into_response());
    }
    let vendors = state.store.list_vendors(query.search.as_deref())?;
    Ok(Json(vendors).into_response())
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewVendor>, JsonRejection>,
) -> Result<(StatusCode, Json<Vendor>), ApiError> {
    let Json(new) = payload?;
    new.validate()?;
    let vendor = state.store.create_vendor(new)?;
    Ok((StatusCode::CREATED, Json(vendor)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vendor>, ApiError> {
    Ok(Json(state.store.get_vendor(&id)?))
}

pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<VendorPatch>, JsonRejection>,
) -> Result<Json<Vendor>, ApiError> {
    let Json(patch) = payload?;
    patch.validate()?;
    Ok(Json(state.store.patch_vendor(&id, patch)?))
}

pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewVendor>, JsonRejection>,
) -> Result<Json<Vendor>, ApiError> {
    let Json(new) = payload?;
    new.validate()?;
    Ok(Json(state.store.replace_vendor(&id, new)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vendor>, ApiError> {
    Ok(Json(state.store.delete_vendor(&id)?))
}
