//! CRUD service for flight records.

use validator::Validate;

use airtrack_core::error::CoreError;
use airtrack_core::types::RecordId;
use airtrack_core::validation;

use crate::models::flight::{CreateFlight, Flight, UpdateFlight};
use crate::Store;

/// Orchestrates flight CRUD: validates payloads, owns `flight_id`
/// assignment, and is the single writer of the flight table.
pub struct FlightService;

impl FlightService {
    /// Validate the payload, assign a fresh `flight_id`, and persist.
    /// Returns the created record.
    pub async fn create(store: &Store, input: CreateFlight) -> Result<Flight, CoreError> {
        input.validate().map_err(validation::into_core_error)?;

        let flight = Flight {
            flight_id: store.allocate_flight_id(),
            flight_number: input.flight_number,
            departure_airport: input.departure_airport,
            arrival_airport: input.arrival_airport,
            departure_time: input.departure_time,
            arrival_time: input.arrival_time,
            status: input.status,
        };
        store.put_flight(flight.clone()).await;

        Ok(flight)
    }

    pub async fn get(store: &Store, id: RecordId) -> Result<Flight, CoreError> {
        store.get_flight(id).await.ok_or(CoreError::NotFound {
            entity: "Flight",
            key: id.to_string(),
        })
    }

    /// All flights, in no guaranteed order.
    pub async fn list(store: &Store) -> Vec<Flight> {
        store.list_flights().await
    }

    /// Merge the provided fields onto the existing record. Absent fields
    /// are preserved; `status` accepts any non-empty value with no
    /// transition restrictions.
    pub async fn update(
        store: &Store,
        id: RecordId,
        input: UpdateFlight,
    ) -> Result<Flight, CoreError> {
        input.validate().map_err(validation::into_core_error)?;

        store
            .update_flight(id, |flight| {
                if let Some(flight_number) = input.flight_number {
                    flight.flight_number = flight_number;
                }
                if let Some(departure_airport) = input.departure_airport {
                    flight.departure_airport = departure_airport;
                }
                if let Some(arrival_airport) = input.arrival_airport {
                    flight.arrival_airport = arrival_airport;
                }
                if let Some(departure_time) = input.departure_time {
                    flight.departure_time = departure_time;
                }
                if let Some(arrival_time) = input.arrival_time {
                    flight.arrival_time = arrival_time;
                }
                if let Some(status) = input.status {
                    flight.status = status;
                }
            })
            .await
            .ok_or(CoreError::NotFound {
                entity: "Flight",
                key: id.to_string(),
            })
    }

    pub async fn delete(store: &Store, id: RecordId) -> Result<(), CoreError> {
        if store.delete_flight(id).await {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "Flight",
                key: id.to_string(),
            })
        }
    }
}
