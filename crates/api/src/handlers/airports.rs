//! Handlers for the `/airports` resource.

use axum::extract::{Path, State};
use axum::Json;

use airtrack_store::models::airport::{Airport, CreateAirport, UpdateAirport};
use airtrack_store::services::AirportService;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /airports/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Airport>>> {
    Ok(Json(AirportService::list(&state.store).await))
}

/// GET /airports/{airport_code}
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(airport_code): Path<String>,
) -> AppResult<Json<Airport>> {
    let airport = AirportService::get(&state.store, &airport_code).await?;
    Ok(Json(airport))
}

/// POST /airports/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAirport>,
) -> AppResult<Json<MessageResponse>> {
    let airport = AirportService::create(&state.store, input).await?;

    tracing::info!(airport_code = %airport.airport_code, "Airport created");

    Ok(Json(MessageResponse::new("Airport created")))
}

/// PUT /airports/{airport_code}
pub async fn update(
    State(state): State<AppState>,
    Path(airport_code): Path<String>,
    Json(input): Json<UpdateAirport>,
) -> AppResult<Json<MessageResponse>> {
    AirportService::update(&state.store, &airport_code, input).await?;

    tracing::info!(airport_code = %airport_code, "Airport updated");

    Ok(Json(MessageResponse::new("Airport updated")))
}

/// DELETE /airports/{airport_code}
pub async fn delete(
    State(state): State<AppState>,
    Path(airport_code): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    AirportService::delete(&state.store, &airport_code).await?;

    tracing::info!(airport_code = %airport_code, "Airport deleted");

    Ok(Json(MessageResponse::new("Airport deleted")))
}
