//! Event CRUD handlers.

use super::{parse_id, parse_include};
use crate::error::AppError;
use crate::filters::{IntFilter, StringFilter};
use crate::response::{rows_affected, success_many, success_one};
use crate::service::{CreateEvent, IncludeWithEvent, UpdateEvent, WhereEvent};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;

fn include_from(params: &HashMap<String, String>) -> Result<Option<IncludeWithEvent>, AppError> {
    let names = parse_include(params, &["user"])?;
    if names.is_empty() {
        return Ok(None);
    }
    Ok(Some(IncludeWithEvent {
        user: names.contains(&"user"),
    }))
}

/// Top-level where fragments are comma-joined, so only one field may be constrained per request.
fn filter_from(params: &HashMap<String, String>) -> Result<WhereEvent, AppError> {
    if params.contains_key("ownerUserId") && params.contains_key("labelContains") {
        return Err(AppError::BadRequest("filter by ownerUserId or labelContains, not both".into()));
    }
    let owner_user_id = match params.get("ownerUserId") {
        Some(raw) => Some(IntFilter::equals(
            raw.parse()
                .map_err(|_| AppError::BadRequest(format!("invalid ownerUserId: {}", raw)))?,
        )),
        None => None,
    };
    Ok(WhereEvent {
        owner_user_id,
        label: params.get("labelContains").map(|v| StringFilter::contains(v.as_str())),
    })
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let filter = filter_from(&params)?;
    let include = include_from(&params)?;
    let events = state.services.events.get_many(&filter, include.as_ref()).await?;
    Ok(success_many(events))
}

pub async fn create(State(state): State<AppState>, Json(body): Json<CreateEvent>) -> Result<impl IntoResponse, AppError> {
    let affected = state.services.events.create(&body).await?;
    Ok(rows_affected(StatusCode::CREATED, affected))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let include = include_from(&params)?;
    let event = state.services.events.get_one_by_id(id, include.as_ref()).await?;
    Ok(success_one(event))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateEvent>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let affected = state.services.events.update_one(id, &body).await?;
    Ok(rows_affected(StatusCode::OK, affected))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let affected = state.services.events.delete_one_by_id(id).await?;
    Ok(rows_affected(StatusCode::OK, affected))
}
