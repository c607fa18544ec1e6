use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Error as AxumError, Header},
};

use std::sync::Arc;

use crate::{
    ServerError, TokenService, foods, invoices, menus, order_items, orders, tables, users,
};
use engine::Engine;

static TOKEN_HEADER: axum::http::HeaderName = axum::http::HeaderName::from_static("token");

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub tokens: Arc<TokenService>,
}

/// `TypedHeader` for the session token
///
/// Authenticated requests must carry the access token in the "token" entry
/// of the header.
#[derive(Debug)]
struct TokenHeader(String);

impl Header for TokenHeader {
    fn name() -> &'static axum::http::HeaderName {
        &TOKEN_HEADER
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, AxumError>
    where
        Self: Sized,
        I: Iterator<Item = &'i axum::http::HeaderValue>,
    {
        let value = values.next().ok_or_else(AxumError::invalid)?;
        let Ok(value) = value.to_str() else {
            return Err(AxumError::invalid());
        };

        Ok(TokenHeader(value.trim().to_string()))
    }

    fn encode<E: Extend<axum::http::HeaderValue>>(&self, values: &mut E) {
        match axum::http::HeaderValue::from_str(&self.0) {
            Ok(value) => values.extend(std::iter::once(value)),
            Err(_) => tracing::error!("failed to encode token header"),
        }
    }
}

async fn auth(
    token_header: Option<TypedHeader<TokenHeader>>,
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let Some(TypedHeader(TokenHeader(token))) = token_header else {
        return Err(ServerError::Unauthorized(
            "no authorization header provided".to_string(),
        ));
    };

    let identity = state.tokens.validate(&token)?;
    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/tables", get(tables::list).post(tables::create))
        .route("/tables/{table_id}", get(tables::get).patch(tables::update))
        .route("/menus", get(menus::list).post(menus::create))
        .route("/menus/{menu_id}", get(menus::get).patch(menus::update))
        .route("/foods", get(foods::list).post(foods::create))
        .route("/foods/{food_id}", get(foods::get).patch(foods::update))
        .route("/orders", get(orders::list).post(orders::create))
        .route("/orders/{order_id}", get(orders::get).patch(orders::update))
        .route("/orderItems", get(order_items::list).post(order_items::place))
        .route(
            "/orderItems/{order_item_id}",
            get(order_items::get).patch(order_items::update),
        )
        .route("/orderItems-order/{order_id}", get(order_items::by_order))
        .route("/invoices", get(invoices::list).post(invoices::create))
        .route(
            "/invoices/{invoice_id}",
            get(invoices::view).patch(invoices::update),
        )
        .route("/users", get(users::list))
        .route("/users/{user_id}", get(users::get))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth))
        .route("/users/signup", post(users::sign_up))
        .route("/users/login", post(users::login))
        .with_state(state)
}

pub async fn run(engine: Engine, tokens: TokenService, bind: &str, port: u16) {
    let listener = match tokio::net::TcpListener::bind((bind, port)).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, tokens, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    tokens: TokenService,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
        tokens: Arc::new(tokens),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    tokens: TokenService,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, tokens, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
