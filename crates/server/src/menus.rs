//! Menu API endpoints

use axum::{
    Json,
    extract::{Path, State},
};
use engine::{Menu, MenuCmd};

use crate::{ServerError, server::ServerState};

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Menu>>, ServerError> {
    Ok(Json(state.engine.menus().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(menu_id): Path<String>,
) -> Result<Json<Menu>, ServerError> {
    Ok(Json(state.engine.menu(&menu_id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuCmd>,
) -> Result<Json<Menu>, ServerError> {
    Ok(Json(state.engine.create_menu(payload).await?))
}

/// Patch a menu. A date window must come with both bounds.
pub async fn update(
    State(state): State<ServerState>,
    Path(menu_id): Path<String>,
    Json(payload): Json<MenuCmd>,
) -> Result<Json<Menu>, ServerError> {
    Ok(Json(state.engine.update_menu(&menu_id, payload).await?))
}
