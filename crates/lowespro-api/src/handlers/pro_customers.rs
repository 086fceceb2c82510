//! /api/pro-customers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lowespro_core::models::{NewProCustomer, ProCustomer, ProCustomerPatch};
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
        let customer = state.store.get_pro_customer(&id)?;
        return Ok(Json(customer).into_response());
    }
    let customers = state.store.list_pro_customers(query.search.as_deref())?;
    Ok(Json(customers).into_response())
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewProCustomer>, JsonRejection>,
) -> Result<(StatusCode, Json<ProCustomer>), ApiError> {
    let Json(new) = payload?;
    new.validate()?;
    let customer = state.store.create_pro_customer(new)?;
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProCustomer>, ApiError> {
    Ok(Json(state.store.get_pro_customer(&id)?))
}

pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProCustomerPatch>, JsonRejection>,
) -> Result<Json<ProCustomer>, ApiError> {
    let Json(patch) = payload?;
    patch.validate()?;
    Ok(Json(state.store.patch_pro_customer(&id, patch)?))
}

pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewProCustomer>, JsonRejection>,
) -> Result<Json<ProCustomer>, ApiError> {
    let Json(new) = payload?;
    new.validate()?;
    Ok(Json(state.store.replace_pro_customer(&id, new)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProCustomer>, ApiError> {
    Ok(Json(state.store.delete_pro_customer(&id)?))
}
