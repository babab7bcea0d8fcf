//! CRUD service for airport records.
//!
//! Structurally the twin of `FlightService`, keyed by the caller-supplied
//! `airport_code` instead of a store-assigned integer id.

use validator::Validate;

use airtrack_core::error::CoreError;
use airtrack_core::validation;

use crate::models::airport::{Airport, CreateAirport, UpdateAirport};
use crate::Store;

pub struct AirportService;

impl AirportService {
    /// Validate the payload and persist. The code is caller-supplied, so
    /// creating over an existing code is a conflict, not an overwrite.
    pub async fn create(store: &Store, input: CreateAirport) -> Result<Airport, CoreError> {
        input.validate().map_err(validation::into_core_error)?;

        let airport = Airport {
            airport_code: input.airport_code,
            airport_name: input.airport_name,
            city: input.city,
            country: input.country,
        };
        if !store.put_airport(airport.clone()).await {
            return Err(CoreError::Conflict(format!(
                "Airport {} already exists",
                airport.airport_code
            )));
        }

        Ok(airport)
    }

    pub async fn get(store: &Store, code: &str) -> Result<Airport, CoreError> {
        store.get_airport(code).await.ok_or(CoreError::NotFound {
            entity: "Airport",
            key: code.to_string(),
        })
    }

    /// All airports, ordered by code.
    pub async fn list(store: &Store) -> Vec<Airport> {
        store.list_airports().await
    }

    /// Merge the provided fields onto the existing record; absent fields
    /// are preserved. The code itself is immutable.
    pub async fn update(
        store: &Store,
        code: &str,
        input: UpdateAirport,
    ) -> Result<Airport, CoreError> {
        input.validate().map_err(validation::into_core_error)?;

        store
            .update_airport(code, |airport| {
                if let Some(airport_name) = input.airport_name {
                    airport.airport_name = airport_name;
                }
                if let Some(city) = input.city {
                    airport.city = city;
                }
                if let Some(country) = input.country {
                    airport.country = country;
                }
            })
            .await
            .ok_or(CoreError::NotFound {
                entity: "Airport",
                key: code.to_string(),
            })
    }

    pub async fn delete(store: &Store, code: &str) -> Result<(), CoreError> {
        if store.delete_airport(code).await {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "Airport",
                key: code.to_string(),
            })
        }
    }
}
