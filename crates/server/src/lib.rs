use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use auth::{
    Claims, DEFAULT_REFRESH_TOKEN_TTL_HOURS, DEFAULT_TOKEN_TTL_HOURS, Identity, TokenError,
    TokenService, Tokens,
};
pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};

mod auth;
mod foods;
mod invoices;
mod menus;
mod order_items;
mod orders;
mod server;
mod tables;
mod users;

pub enum ServerError {
    Engine(EngineError),
    Token(TokenError),
    Unauthorized(String),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) | EngineError::EmptyBilling(_) => StatusCode::CONFLICT,
        EngineError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        EngineError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        EngineError::Pipeline(_) | EngineError::Hashing(_) | EngineError::Database(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        EngineError::Pipeline(reason) => {
            tracing::error!("billing pipeline failed: {reason}");
            "error occurred while listing order items".to_string()
        }
        EngineError::Hashing(reason) => {
            tracing::error!("password hashing failed: {reason}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Token(TokenError::Sign(err)) => {
                tracing::error!("failed to sign token: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ServerError::Token(err) => (StatusCode::UNAUTHORIZED, err.to_string()),
            ServerError::Unauthorized(err) => (StatusCode::UNAUTHORIZED, err),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<TokenError> for ServerError {
    fn from(value: TokenError) -> Self {
        Self::Token(value)
    }
}
