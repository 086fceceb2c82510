//! /api/trades
//!
//! Trades are the simplest resource: no update verbs, just create,
//! list, get, and delete. Names are unique; duplicates answer 409.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lowespro_core::models::{NewTrade, Trade};
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
        let trade = state.store.get_trade(&id)?;
        return Ok(Json(trade).into_response());
    }
    let trades = state.store.list_trades(query.search.as_deref())?;
    Ok(Json(trades).into_response())
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewTrade>, JsonRejection>,
) -> Result<(StatusCode, Json<Trade>), ApiError> {
    let Json(new) = payload?;
    new.validate()?;
    let trade = state.store.create_trade(new)?;
    Ok((StatusCode::CREATED, Json(trade)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Trade>, ApiError> {
    Ok(Json(state.store.get_trade(&id)?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Trade>, ApiError> {
    Ok(Json(state.store.delete_trade(&id)?))
}
