use axum::{Json, extract::{State, Path}, http::StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::models::client::CreateClientReq;
use crate::models::voucher::VoucherKind;
use crate::state::AppState;
use crate::utils::errorhandler::AppError;

pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientReq>,
) -> Result<(StatusCode, Json<Value>), AppError> {

    let client = state.clients.create(payload.name).await;
    Ok((StatusCode::CREATED, Json(json!(client))))
}

pub async fn get_clients(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let clients = state.clients.list().await;
    Ok(Json(json!(clients)))
}

pub async fn get_client_by_id(
    State(state): State<AppState>,
    Path(client_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {

    let client = state.clients.get(client_id).await?;
    Ok(Json(json!(client)))
}

/// Voucher eligibility: the one voucher this client's tier carries, if any.
pub async fn get_client_voucher(
    State(state): State<AppState>,
    Path(client_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {

    let client = state.clients.get(client_id).await?;
    let voucher = state.vouchers.get_for_tier(client.tier).await;
    let kind = voucher
        .as_ref()
        .and_then(|v| VoucherKind::parse(&v.voucher_type));

    Ok(Json(json!({"tier": client.tier, "voucher": voucher, "kind": kind})))
}
