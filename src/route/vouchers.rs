use axum::{Json, extract::{State, Path}};
use serde_json::{json, Value};

use crate::models::voucher::{AssignVoucherReq, ClientTier, VoucherKind};
use crate::state::AppState;
use crate::utils::errorhandler::AppError;

fn parse_tier(tier: &str) -> Result<ClientTier, AppError> {
    ClientTier::from_str(tier).ok_or_else(|| AppError::validation("unknown client tier"))
}

pub async fn get_vouchers(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let vouchers = state.vouchers.list().await;
    Ok(Json(json!(vouchers)))
}

pub async fn get_voucher_by_tier(
    State(state): State<AppState>,
    Path(tier): Path<String>,
) -> Result<Json<Value>, AppError> {

    let tier = parse_tier(&tier)?;
    let voucher = state.vouchers.get_for_tier(tier).await;

    Ok(Json(json!({"tier": tier, "voucher": voucher})))
}

/// Admin assignment of the single voucher a tier carries. Replaces any
/// previous voucher for that tier.
pub async fn assign_voucher(
    State(state): State<AppState>,
    Path(tier): Path<String>,
    Json(payload): Json<AssignVoucherReq>,
) -> Result<Json<Value>, AppError> {

    let tier = parse_tier(&tier)?;
    if VoucherKind::parse(&payload.voucher_type).is_none() {
        return Err(AppError::validation("voucher code cannot be parsed"));
    }

    tracing::debug!(tier = tier.as_str(), code = %payload.voucher_type, "assigning tier voucher");
    let voucher = state.vouchers.assign(tier, payload.voucher_type).await;

    Ok(Json(json!(voucher)))
}
