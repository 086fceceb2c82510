//! /api/brands

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lowespro_core::models::{Brand, BrandPatch, NewBrand};
use serde::Deserialize;

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub id: Option<String>,
    pub search: Option<String>,
    pub industry: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    if let Some(id) = query.id {
        let brand = state.store.get_brand(&id)?;
        return Ok(Json(brand).into_response());
    }
    let brands = state
        .store
        .list_brands(query.search.as_deref(), query.industry.as_deref())?;
    Ok(Json(brands).into_response())
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewBrand>, JsonRejection>,
) -> Result<(StatusCode, Json<Brand>), ApiError> {
    let Json(new) = payload?;
    new.validate()?;
    let brand = state.store.create_brand(new)?;
    Ok((StatusCode::CREATED, Json(brand)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Brand>, ApiError> {
    Ok(Json(state.store.get_brand(&id)?))
}

pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BrandPatch>, JsonRejection>,
) -> Result<Json<Brand>, ApiError> {
    let Json(patch) = payload?;
    patch.validate()?;
    Ok(Json(state.store.patch_brand(&id, patch)?))
}

pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewBrand>, JsonRejection>,
) -> Result<Json<Brand>, ApiError> {
    let Json(new) = payload?;
    new.validate()?;
    Ok(Json(state.store.replace_brand(&id, new)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Brand>, ApiError> {
    Ok(Json(state.store.delete_brand(&id)?))
}
