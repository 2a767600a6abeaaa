use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use time::OffsetDateTime;

use crate::models::booking::BookingStatus;
use crate::revenue::{daily_revenue, monthly_revenue, weekly_revenue};
use crate::state::AppState;
use crate::utils::errorhandler::AppError;

/// Paid amounts of approved bookings, keyed by booking date. Bookings whose
/// payment record is missing are skipped.
async fn approved_payment_rows(state: &AppState) -> Vec<(OffsetDateTime, Decimal)> {
    let mut rows = Vec::new();
    for booking in state.bookings.list(None).await {
        if booking.status != BookingStatus::Approved {
            continue;
        }
        match state.payments.find_for_booking(booking.id).await {
            Some(payment) => rows.push((booking.booking_date, payment.amount)),
            None => tracing::warn!(booking = %booking.id, "approved booking has no payment"),
        }
    }
    rows
}

pub async fn get_daily_revenue(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    tracing::debug!("request to get daily revenue");
    let rows = approved_payment_rows(&state).await;
    let points = daily_revenue(&rows, OffsetDateTime::now_utc().date());
    Ok(Json(json!(points)))
}

pub async fn get_weekly_revenue(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    tracing::debug!("request to get weekly revenue");
    let rows = approved_payment_rows(&state).await;
    let points = weekly_revenue(&rows, OffsetDateTime::now_utc().date());
    Ok(Json(json!(points)))
}

pub async fn get_monthly_revenue(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    tracing::debug!("request to get monthly revenue");
    let rows = approved_payment_rows(&state).await;
    let points = monthly_revenue(&rows, OffsetDateTime::now_utc().date());
    Ok(Json(json!(points)))
}
