//! HTTP handlers for the user and event resources.

pub mod events;
pub mod users;

use crate::error::AppError;
use std::collections::HashMap;

pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

/// Relation names from `?include=a,b`. Names outside `known` are rejected.
pub(crate) fn parse_include<'a>(
    params: &'a HashMap<String, String>,
    known: &[&str],
) -> Result<Vec<&'a str>, AppError> {
    let Some(raw) = params.get("include") else {
        return Ok(Vec::new());
    };
    let mut names = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !known.contains(&name) {
            return Err(AppError::BadRequest(format!("unknown relation: {}", name)));
        }
        names.push(name);
    }
    Ok(names)
}
