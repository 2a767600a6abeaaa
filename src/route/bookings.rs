use axum::{Json, extract::{State, Path, Query}, http::StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::models::booking::{BookingQueryParams, CancelBookingParams};
use crate::state::AppState;
use crate::utils::errorhandler::AppError;

pub async fn get_bookings(
    State(state): State<AppState>,
    Query(params): Query<BookingQueryParams>,
) -> Result<Json<Value>, AppError> {

    let bookings = state.bookings.list(params.user_id).await;
    Ok(Json(json!(bookings)))
}

pub async fn get_booking_by_id(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {

    let booking = state.bookings.get(booking_id).await?;
    let payment = state.payments.find_for_booking(booking_id).await;

    Ok(Json(json!({"booking": booking, "payment": payment})))
}

pub async fn get_payment_by_id(
    State(state): State<AppState>,
    Path(payment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {

    let payment = state.payments.get(payment_id).await?;
    Ok(Json(json!(payment)))
}

pub async fn approve_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {

    tracing::debug!(booking = %booking_id, "request to approve booking");
    let booking = state.bookings.approve(booking_id).await?;
    Ok(Json(json!(booking)))
}

pub async fn reject_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {

    tracing::debug!(booking = %booking_id, "request to reject booking");
    let booking = state.bookings.reject(booking_id).await?;
    Ok(Json(json!(booking)))
}

pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
    Query(params): Query<CancelBookingParams>,
) -> Result<StatusCode, AppError> {

    state.bookings.cancel(booking_id, params.user_id).await?;
    Ok(StatusCode::OK)
}
