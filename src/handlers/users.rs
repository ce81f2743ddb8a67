//! User CRUD handlers.

use super::{parse_id, parse_include};
use crate::error::AppError;
use crate::filters::StringFilter;
use crate::response::{rows_affected, success_many, success_one};
use crate::service::{CreateUser, IncludeWithUser, UpdateUser, WhereUser};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;

fn include_from(params: &HashMap<String, String>) -> Result<Option<IncludeWithUser>, AppError> {
    let names = parse_include(params, &["events"])?;
    if names.is_empty() {
        return Ok(None);
    }
    Ok(Some(IncludeWithUser {
        events: names.contains(&"events"),
    }))
}

fn filter_from(params: &HashMap<String, String>) -> WhereUser {
    let mut email = Vec::new();
    if let Some(v) = params.get("email") {
        email.push(StringFilter::equals(v.as_str()));
    }
    if let Some(v) = params.get("emailContains") {
        email.push(StringFilter::contains(v.as_str()));
    }
    WhereUser {
        email: match email.len() {
            0 => None,
            1 => email.pop(),
            _ => Some(StringFilter::and(email)),
        },
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let include = include_from(&params)?;
    let users = state.services.users.get_many(&filter_from(&params), include.as_ref()).await?;
    Ok(success_many(users))
}

pub async fn create(State(state): State<AppState>, Json(body): Json<CreateUser>) -> Result<impl IntoResponse, AppError> {
    let affected = state.services.users.create(&body).await?;
    Ok(rows_affected(StatusCode::CREATED, affected))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let include = include_from(&params)?;
    let user = state.services.users.get_one_by_id(id, include.as_ref()).await?;
    Ok(success_one(user))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateUser>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let affected = state.services.users.update_one(id, &body).await?;
    Ok(rows_affected(StatusCode::OK, affected))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let affected = state.services.users.delete_one_by_id(id).await?;
    Ok(rows_affected(StatusCode::OK, affected))
}
