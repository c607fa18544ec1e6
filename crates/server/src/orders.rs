//! Order API endpoints

use axum::{
    Json,
    extract::{Path, State},
};
use engine::{Order, OrderCmd};

use crate::{ServerError, server::ServerState};

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Order>>, ServerError> {
    Ok(Json(state.engine.orders().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, ServerError> {
    Ok(Json(state.engine.order(&order_id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCmd>,
) -> Result<Json<Order>, ServerError> {
    Ok(Json(state.engine.create_order(payload).await?))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
    Json(payload): Json<OrderCmd>,
) -> Result<Json<Order>, ServerError> {
    Ok(Json(state.engine.update_order(&order_id, payload).await?))
}
