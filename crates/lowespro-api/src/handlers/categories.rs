//! /api/categories

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lowespro_core::models::{Category, CategoryPatch, NewCategory};
use serde::Deserialize;

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub id: Option<String>,
    pub search: Option<String>,
    pub parent_id: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    if let Some(id) = query.id {
        let category = state.store.get_category(&id)?;
        return Ok(Json(category).into_response());
    }
    let categories = state
        .store
        .list_categories(query.search.as_deref(), query.parent_id.as_deref())?;
    Ok(Json(categories).into_response())
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewCategory>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let Json(new) = payload?;
    new.validate()?;
    let category = state.store.create_category(new)?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(state.store.get_category(&id)?))
}

pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CategoryPatch>, JsonRejection>,
) -> Result<Json<Category>, ApiError> {
    let Json(patch) = payload?;
    patch.validate()?;
    Ok(Json(state.store.patch_category(&id, patch)?))
}

pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewCategory>, JsonRejection>,
) -> Result<Json<Category>, ApiError> {
    let Json(new) = payload?;
    new.validate()?;
    Ok(Json(state.store.replace_category(&id, new)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(state.store.delete_category(&id)?))
}
