//! User API endpoints

use axum::{
    Json,
    extract::{Path, Query, State},
};
use engine::{Credentials, Page, SignUp, User};

use crate::{ServerError, foods::PageQuery, server::ServerState};

/// Register a user and open a session for it
pub async fn sign_up(
    State(state): State<ServerState>,
    Json(payload): Json<SignUp>,
) -> Result<Json<User>, ServerError> {
    let user = state.engine.sign_up(payload).await?;
    open_session(&state, &user).await.map(Json)
}

pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<Credentials>,
) -> Result<Json<User>, ServerError> {
    let user = state.engine.login(payload).await?;
    open_session(&state, &user).await.map(Json)
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<User>>, ServerError> {
    Ok(Json(state.engine.users(query.into()).await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ServerError> {
    Ok(Json(state.engine.user(&user_id).await?))
}

async fn open_session(state: &ServerState, user: &User) -> Result<User, ServerError> {
    let tokens = state.tokens.issue(user)?;
    Ok(state
        .engine
        .update_tokens(&user.user_id, &tokens.token, &tokens.refresh_token)
        .await?)
}
