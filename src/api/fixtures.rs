//! Mock collection endpoints

use axum::{extract::Path, Json};
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::fixtures,
};

#[derive(Serialize)]
pub struct FixtureIndex {
    pub collections: Vec<&'static str>,
}

/// List the available collections
pub async fn list_collections() -> Json<FixtureIndex> {
    Json(FixtureIndex {
        collections: fixtures::collection_names(),
    })
}

/// Return one static collection
pub async fn get_collection(Path(name): Path<String>) -> AppResult<Json<Value>> {
    let collection = fixtures::collection(&name)
        .ok_or_else(|| AppError::NotFound(format!("No fixture collection named '{}'", name)))?;
    Ok(Json(collection.clone()))
}
