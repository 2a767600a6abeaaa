use axum::{Json, extract::{State, Path, Query}, http::StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use time::Date;
use uuid::Uuid;

use crate::engine::pricing::split_amount;
use crate::engine::schedule::{slot_bounds, slot_catalog};
use crate::engine::availability::SlotKey;
use crate::engine::session::{BookingSession, SessionError};
use crate::models::payment::PaymentStatus;
use crate::models::voucher::VoucherKind;
use crate::route::courts::AvailabilityParams;
use crate::state::AppState;
use crate::utils::errorhandler::AppError;

#[derive(Deserialize)]
pub struct CreateSessionReq {
    pub court_id: Uuid,
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct ToggleSlotReq {
    pub date: Date,
    pub start: String,
}

#[derive(Deserialize)]
pub struct ApplyVoucherReq {
    pub client_id: Uuid,
}

/// Open a booking session for a court: fetch the reservation snapshot for
/// that court and hand back a session the client drives.
pub async fn create_session(
    State(state): State<AppState>,
    Json(payload): Json<CreateSessionReq>,
) -> Result<(StatusCode, Json<Value>), AppError> {

    let court = state.courts.get(payload.court_id).await?;

    let mut session = BookingSession::new(court.id, payload.user_id, court.sport.as_str().to_string());
    let generation = session.begin_refresh();
    let snapshot = state.bookings.reservations_for_court(court.id).await;
    session.install_snapshot(generation, snapshot);

    let id = session.id;
    let session_state = session.state();
    state.sessions.insert(session).await;
    tracing::debug!(session = %id, court = %court.id, "opened booking session");

    Ok((StatusCode::CREATED, Json(json!({
        "session_id": id,
        "court": court,
        "state": session_state,
        "generation": generation
    }))))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {

    let view = state
        .sessions
        .with_session(session_id, |s| {
            json!({
                "session_id": s.id,
                "court_id": s.court_id,
                "user_id": s.user_id,
                "sport": s.sport,
                "state": s.state(),
                "selection": s.selection(),
                "voucher": s.voucher_code(),
                "generation": s.generation()
            })
        })
        .await?;

    Ok(Json(view))
}

/// Re-fetch the reservation snapshot. The generation taken before the fetch
/// makes a late response from an older refresh lose against a newer one.
pub async fn refresh_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {

    let (court_id, generation) = state
        .sessions
        .with_session(session_id, |s| (s.court_id, s.begin_refresh()))
        .await?;

    let snapshot = state.bookings.reservations_for_court(court_id).await;

    let installed = state
        .sessions
        .with_session(session_id, |s| s.install_snapshot(generation, snapshot))
        .await?;

    Ok(Json(json!({"generation": generation, "installed": installed})))
}

/// Booked/Selected/Available grid for one day of this session's court.
pub async fn get_session_availability(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<Value>, AppError> {

    let grid = state
        .sessions
        .with_session(session_id, |s| {
            let slots: Vec<Value> = slot_catalog()
                .into_iter()
                .map(|slot| {
                    let status = s.classify(&SlotKey::new(params.date, slot.start.clone()));
                    json!({"start": slot.start, "display": slot.display, "status": status})
                })
                .collect();
            json!({"date": params.date, "slots": slots})
        })
        .await?;

    Ok(Json(grid))
}

pub async fn toggle_slot(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<ToggleSlotReq>,
) -> Result<Json<Value>, AppError> {

    if !slot_catalog().iter().any(|s| s.start == payload.start) {
        return Err(AppError::validation("unknown time slot"));
    }

    let outcome = state
        .sessions
        .with_session(session_id, |s| {
            let selected = s.toggle(SlotKey::new(payload.date, payload.start.clone()))?;
            Ok::<Value, SessionError>(json!({
                "selected": selected,
                "state": s.state(),
                "selection": s.selection()
            }))
        })
        .await??;

    Ok(Json(outcome))
}

/// Apply the voucher the client's tier is eligible for. At most one voucher
/// exists per tier and at most one can be applied per session.
pub async fn apply_voucher(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<ApplyVoucherReq>,
) -> Result<Json<Value>, AppError> {

    let client = state.clients.get(payload.client_id).await?;
    let voucher = state
        .vouchers
        .get_for_tier(client.tier)
        .await
        .ok_or_else(|| AppError::not_found("no voucher for this tier"))?;
    let kind = VoucherKind::parse(&voucher.voucher_type)
        .ok_or_else(|| AppError::validation("voucher code cannot be parsed"))?;

    let quote = state
        .sessions
        .with_session(session_id, |s| {
            s.apply_voucher(voucher.voucher_type.clone(), kind)?;
            s.quote()
        })
        .await??;

    Ok(Json(json!(quote)))
}

pub async fn remove_voucher(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {

    let quote = state
        .sessions
        .with_session(session_id, |s| {
            s.remove_voucher()?;
            s.quote()
        })
        .await??;

    Ok(Json(json!(quote)))
}

pub async fn get_quote(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {

    let quote = state
        .sessions
        .with_session(session_id, |s| s.quote())
        .await??;

    Ok(Json(json!(quote)))
}

/// Confirm the booking: one booking plus one mock payment per selected slot.
/// Every slot is attempted and failures are reported per slot instead of one
/// generic alert; there is no cross-slot rollback.
pub async fn confirm_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {

    let (court_id, user_id, quote, keys) = state
        .sessions
        .with_session(session_id, |s| {
            let quote = s.quote()?;
            let keys = s.submit()?;
            Ok::<_, SessionError>((s.court_id, s.user_id, quote, keys))
        })
        .await??;

    let shares = split_amount(quote.total, keys.len() as u32);
    let mut created = Vec::new();
    let mut failed = Vec::new();

    for (key, share) in keys.iter().zip(shares) {
        let Some((start_time, end_time)) = slot_bounds(key.date, &key.start) else {
            failed.push(json!({"slot": key, "error": "invalid slot"}));
            continue;
        };
        match state.bookings.create(court_id, user_id, start_time, end_time).await {
            Ok(booking) => {
                let payment = state
                    .payments
                    .create(booking.id, share, PaymentStatus::Paid)
                    .await;
                created.push(json!({
                    "slot": key,
                    "booking_id": booking.id,
                    "payment_id": payment.id,
                    "amount": payment.amount
                }));
            }
            Err(err) => {
                tracing::warn!(session = %session_id, slot = ?key, %err, "slot submission failed");
                failed.push(json!({"slot": key, "error": err.to_string()}));
            }
        }
    }

    //session is done either way, the report tells the user what stuck
    state.sessions.remove(session_id).await?;

    Ok(Json(json!({
        "quote": quote,
        "bookings": created,
        "failed": failed
    })))
}

/// Cancel the flow: clear everything and drop the session.
pub async fn cancel_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {

    state.sessions.with_session(session_id, |s| s.reset()).await?;
    state.sessions.remove(session_id).await?;

    Ok(StatusCode::OK)
}
