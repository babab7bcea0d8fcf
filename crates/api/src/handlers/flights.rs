//! Handlers for the `/flights` resource.

use axum::extract::{Path, State};
use axum::Json;

use airtrack_core::types::RecordId;
use airtrack_store::models::flight::{CreateFlight, Flight, UpdateFlight};
use airtrack_store::services::FlightService;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /flights/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Flight>>> {
    Ok(Json(FlightService::list(&state.store).await))
}

/// GET /flights/{flight_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(flight_id): Path<RecordId>,
) -> AppResult<Json<Flight>> {
    let flight = FlightService::get(&state.store, flight_id).await?;
    Ok(Json(flight))
}

/// POST /flights/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFlight>,
) -> AppResult<Json<MessageResponse>> {
    let flight = FlightService::create(&state.store, input).await?;

    tracing::info!(
        flight_id = flight.flight_id,
        flight_number = %flight.flight_number,
        "Flight created",
    );

    Ok(Json(MessageResponse::new("Flight created")))
}

/// PUT /flights/{flight_id}
pub async fn update(
    State(state): State<AppState>,
    Path(flight_id): Path<RecordId>,
    Json(input): Json<UpdateFlight>,
) -> AppResult<Json<MessageResponse>> {
    let flight = FlightService::update(&state.store, flight_id, input).await?;

    tracing::info!(flight_id, status = %flight.status, "Flight updated");

    Ok(Json(MessageResponse::new("Flight updated")))
}

/// DELETE /flights/{flight_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(flight_id): Path<RecordId>,
) -> AppResult<Json<MessageResponse>> {
    FlightService::delete(&state.store, flight_id).await?;

    tracing::info!(flight_id, "Flight deleted");

    Ok(Json(MessageResponse::new("Flight deleted")))
}
