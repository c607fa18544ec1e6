//! Food API endpoints

use axum::{
    Json,
    extract::{Path, Query, State},
};
use engine::{Food, FoodCmd, Page, PageRequest};
use serde::Deserialize;

use crate::{ServerError, server::ServerState};

/// Paging query parameters shared by the listing endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<i64>,
    pub record_per_page: Option<i64>,
    pub start_index: Option<i64>,
}

impl From<PageQuery> for PageRequest {
    fn from(query: PageQuery) -> Self {
        PageRequest::new(query.page, query.record_per_page).start_index(query.start_index)
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<Food>>, ServerError> {
    Ok(Json(state.engine.foods(query.into()).await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(food_id): Path<String>,
) -> Result<Json<Food>, ServerError> {
    Ok(Json(state.engine.food(&food_id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FoodCmd>,
) -> Result<Json<Food>, ServerError> {
    Ok(Json(state.engine.create_food(payload).await?))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(food_id): Path<String>,
    Json(payload): Json<FoodCmd>,
) -> Result<Json<Food>, ServerError> {
    Ok(Json(state.engine.update_food(&food_id, payload).await?))
}
