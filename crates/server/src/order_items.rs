//! Order item API endpoints

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use engine::{BillingView, OrderItem, OrderItemCmd, PlaceOrder};
use serde::Serialize;

use crate::{Identity, ServerError, server::ServerState};

#[derive(Debug, Serialize)]
pub struct OrderPlaced {
    pub order_id: String,
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<OrderItem>>, ServerError> {
    Ok(Json(state.engine.order_items().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(order_item_id): Path<String>,
) -> Result<Json<OrderItem>, ServerError> {
    Ok(Json(state.engine.order_item(&order_item_id).await?))
}

/// Handle requests for placing an order with its line items
pub async fn place(
    Extension(identity): Extension<Identity>,
    State(state): State<ServerState>,
    Json(payload): Json<PlaceOrder>,
) -> Result<Json<OrderPlaced>, ServerError> {
    let order_id = state.engine.place_order(payload).await?;
    tracing::info!("order {order_id} placed by {}", identity.email);
    Ok(Json(OrderPlaced { order_id }))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(order_item_id): Path<String>,
    Json(payload): Json<OrderItemCmd>,
) -> Result<Json<OrderItem>, ServerError> {
    Ok(Json(
        state
            .engine
            .update_order_item(&order_item_id, payload)
            .await?,
    ))
}

/// Billing views for the items of one order
pub async fn by_order(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> Result<Json<Vec<BillingView>>, ServerError> {
    Ok(Json(state.engine.compute_billing(&order_id).await?))
}
