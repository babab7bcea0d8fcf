use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::RwLock;

use airtrack_core::types::RecordId;

use crate::models::airport::Airport;
use crate::models::flight::Flight;

/// Owner of all record tables.
///
/// Constructed once at process start and shared behind `Arc`. Each table
/// sits behind its own `RwLock`; update primitives hold the write guard
/// across the whole read-merge-write, so concurrent updates on the same key
/// never interleave. Guards are never held across I/O.
#[derive(Debug)]
pub struct Store {
    flights: RwLock<HashMap<RecordId, Flight>>,
    airports: RwLock<BTreeMap<String, Airport>>,
    next_flight_id: AtomicI64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            flights: RwLock::new(HashMap::new()),
            airports: RwLock::new(BTreeMap::new()),
            next_flight_id: AtomicI64::new(1),
        }
    }

    /// Next unused flight id. Monotonic; ids are never reused, even after
    /// deletes.
    pub fn allocate_flight_id(&self) -> RecordId {
        self.next_flight_id.fetch_add(1, Ordering::Relaxed)
    }

    // -----------------------------------------------------------------------
    // Flights
    // -----------------------------------------------------------------------

    pub async fn put_flight(&self, flight: Flight) {
        self.flights.write().await.insert(flight.flight_id, flight);
    }

    pub async fn get_flight(&self, id: RecordId) -> Option<Flight> {
        self.flights.read().await.get(&id).cloned()
    }

    /// Every present flight exactly once, in no guaranteed order.
    pub async fn list_flights(&self) -> Vec<Flight> {
        self.flights.read().await.values().cloned().collect()
    }

    /// Apply `merge` to the flight with the given id under the write lock
    /// and return the resulting record, or `None` if the id is absent.
    pub async fn update_flight<F>(&self, id: RecordId, merge: F) -> Option<Flight>
    where
        F: FnOnce(&mut Flight),
    {
        let mut flights = self.flights.write().await;
        let flight = flights.get_mut(&id)?;
        merge(flight);
        Some(flight.clone())
    }

    /// Remove the flight with the given id. Returns `false` if absent.
    pub async fn delete_flight(&self, id: RecordId) -> bool {
        self.flights.write().await.remove(&id).is_some()
    }

    pub async fn flight_count(&self) -> usize {
        self.flights.read().await.len()
    }

    // -----------------------------------------------------------------------
    // Airports
    // -----------------------------------------------------------------------

    /// Insert a new airport. Returns `false` (leaving the table untouched)
    /// if the code is already taken.
    pub async fn put_airport(&self, airport: Airport) -> bool {
        use std::collections::btree_map::Entry;

        let mut airports = self.airports.write().await;
        match airports.entry(airport.airport_code.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(airport);
                true
            }
        }
    }

    pub async fn get_airport(&self, code: &str) -> Option<Airport> {
        self.airports.read().await.get(code).cloned()
    }

    /// Every present airport exactly once, ordered by code.
    pub async fn list_airports(&self) -> Vec<Airport> {
        self.airports.read().await.values().cloned().collect()
    }

    /// Apply `merge` to the airport with the given code under the write
    /// lock and return the resulting record, or `None` if the code is
    /// absent.
    pub async fn update_airport<F>(&self, code: &str, merge: F) -> Option<Airport>
    where
        F: FnOnce(&mut Airport),
    {
        let mut airports = self.airports.write().await;
        let airport = airports.get_mut(code)?;
        merge(airport);
        Some(airport.clone())
    }

    /// Remove the airport with the given code. Returns `false` if absent.
    pub async fn delete_airport(&self, code: &str) -> bool {
        self.airports.write().await.remove(code).is_some()
    }

    pub async fn airport_count(&self) -> usize {
        self.airports.read().await.len()
    }
}
