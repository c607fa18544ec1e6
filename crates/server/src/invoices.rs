//! Invoice API endpoints

use axum::{
    Json,
    extract::{Path, State},
};
use engine::{Invoice, InvoiceCmd, InvoiceView};

use crate::{ServerError, server::ServerState};

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Invoice>>, ServerError> {
    Ok(Json(state.engine.invoices().await?))
}

/// The invoice merged with the billing of its order
pub async fn view(
    State(state): State<ServerState>,
    Path(invoice_id): Path<String>,
) -> Result<Json<InvoiceView>, ServerError> {
    Ok(Json(state.engine.invoice_view(&invoice_id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InvoiceCmd>,
) -> Result<Json<Invoice>, ServerError> {
    Ok(Json(state.engine.create_invoice(payload).await?))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(invoice_id): Path<String>,
    Json(payload): Json<InvoiceCmd>,
) -> Result<Json<Invoice>, ServerError> {
    Ok(Json(state.engine.update_invoice(&invoice_id, payload).await?))
}
