use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Form, Router};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::bank::{Bank, TransferError};

pub mod accounts_csv;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Amount cannot be empty")]
    MissingAmount,
    #[error("Amount '{0}' is not a valid decimal number")]
    MalformedAmount(String),
    #[error(transparent)]
    Transfer(#[from] TransferError),
}

/// Form fields of `POST /transferMoney`. Every field is optional so a missing
/// one produces our own message instead of a framework rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferParams {
    source_account_id: Option<String>,
    destination_account_id: Option<String>,
    amount: Option<String>,
}

pub fn router(bank: Arc<Bank>) -> Router {
    Router::new()
        .route("/transferMoney", post(transfer_money))
        .with_state(bank)
}

pub async fn serve(bank: Arc<Bank>, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{addr}");
    axum::serve(listener, router(bank)).await?;
    Ok(())
}

async fn transfer_money(
    State(bank): State<Arc<Bank>>,
    Form(params): Form<TransferParams>,
) -> (StatusCode, String) {
    match execute_transfer(&bank, &params) {
        Ok(()) => (StatusCode::OK, "OK".to_owned()),
        Err(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
    }
}

fn execute_transfer(bank: &Bank, params: &TransferParams) -> Result<(), RequestError> {
    let amount_text = params.amount.as_deref().unwrap_or("");
    if amount_text.is_empty() {
        return Err(RequestError::MissingAmount);
    }
    let amount: Decimal = amount_text
        .parse()
        .map_err(|_| RequestError::MalformedAmount(amount_text.to_owned()))?;

    // A missing account id behaves like an empty one; the bank owns those
    // messages.
    bank.transfer(
        params.source_account_id.as_deref().unwrap_or(""),
        params.destination_account_id.as_deref().unwrap_or(""),
        amount,
    )?;
    Ok(())
}
