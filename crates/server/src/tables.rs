//! Dining table API endpoints

use axum::{
    Json,
    extract::{Path, State},
};
use engine::{DiningTable, TableCmd};

use crate::{ServerError, server::ServerState};

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<DiningTable>>, ServerError> {
    Ok(Json(state.engine.tables().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
) -> Result<Json<DiningTable>, ServerError> {
    Ok(Json(state.engine.table(&table_id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TableCmd>,
) -> Result<Json<DiningTable>, ServerError> {
    Ok(Json(state.engine.create_table(payload).await?))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
    Json(payload): Json<TableCmd>,
) -> Result<Json<DiningTable>, ServerError> {
    Ok(Json(state.engine.update_table(&table_id, payload).await?))
}
