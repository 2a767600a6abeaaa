use axum::{Json, extract::{State, Path, Query}, http::StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::engine::availability::{classify, SelectionSet, SlotKey};
use crate::engine::schedule::{day_window, slot_catalog};
use crate::models::court::{CourtQueryParams, CreateCourtReq};
use crate::models::sport::Sport;
use crate::state::AppState;
use crate::utils::errorhandler::AppError;

pub async fn get_sports() -> Json<Value> {
    let sports: Vec<Value> = Sport::ALL
        .iter()
        .map(|s| json!({"name": s.as_str(), "price_per_hour": s.price_per_hour()}))
        .collect();
    Json(json!(sports))
}

pub async fn create_court(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourtReq>,
) -> Result<(StatusCode, Json<Value>), AppError> {

    let sport = Sport::from_name(&payload.sport)
        .ok_or_else(|| AppError::UnknownSport(payload.sport.clone()))?;

    let court = state.courts.create(payload.name, sport).await;
    tracing::debug!(court = %court.id, "created court");

    Ok((StatusCode::CREATED, Json(json!(court))))
}

pub async fn get_courts(
    State(state): State<AppState>,
    Query(params): Query<CourtQueryParams>,
) -> Result<Json<Value>, AppError> {

    let sport = match params.sport {
        Some(name) => Some(Sport::from_name(&name).ok_or(AppError::UnknownSport(name))?),
        None => None,
    };

    let courts = state.courts.list(sport).await;
    Ok(Json(json!(courts)))
}

pub async fn get_court_by_id(
    State(state): State<AppState>,
    Path(court_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {

    let court = state.courts.get(court_id).await?;
    Ok(Json(json!(court)))
}

/// The booking window a client renders: 7 days from today plus the fixed
/// slot catalog. The window is sampled now and not re-derived afterwards.
pub async fn get_court_schedule(
    State(state): State<AppState>,
    Path(court_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {

    let court = state.courts.get(court_id).await?;
    let today = OffsetDateTime::now_utc().date();

    Ok(Json(json!({
        "court": court,
        "days": day_window(today),
        "slots": slot_catalog()
    })))
}

#[derive(Deserialize)]
pub struct AvailabilityParams {
    pub date: Date,
}

/// Booked/Available grid for one day, without any session selection.
pub async fn get_court_availability(
    State(state): State<AppState>,
    Path(court_id): Path<Uuid>,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<Value>, AppError> {

    state.courts.get(court_id).await?;
    let reservations = state.bookings.reservations_for_court(court_id).await;
    let selection = SelectionSet::new();

    let grid: Vec<Value> = slot_catalog()
        .into_iter()
        .map(|slot| {
            let status = classify(
                &SlotKey::new(params.date, slot.start.clone()),
                &reservations,
                &selection,
            );
            json!({"start": slot.start, "display": slot.display, "status": status})
        })
        .collect();

    Ok(Json(json!({"date": params.date, "slots": grid})))
}
