use serde::Serialize;
use uuid::Uuid;
use wayfare_shared::{City, Flight, Trip};

use crate::steps::StepId;

/// Draft defaults when a trip has nothing committed yet, matching the
/// planner form's initial values.
pub const DEFAULT_TRAVELERS: u32 = 1;
pub const DEFAULT_BUDGET_IDR: i64 = 10_000_000;
pub const DEFAULT_STAY_DAYS: u32 = 2;

/// Sub-state of the active step while an async operation is in flight
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepPhase {
    Idle,
    LoadingFlights,
    Generating,
}

/// Mutable state of one open planner. Holds the current step, the
/// per-step draft values, and the fetched flight snapshot. Never
/// persisted; committed values live on the [`Trip`] record instead.
#[derive(Debug)]
pub struct WizardSession {
    pub trip_id: Uuid,
    pub current: StepId,
    pub phase: StepPhase,
    pub origin_city: String,
    pub travelers: u32,
    pub budget_idr: i64,
    pub needs_flight: bool,
    pub cities: Vec<City>,
    pub last_confirmed_duration: u32,
    pub selected_flight_id: Option<Uuid>,
    pub flights: Vec<Flight>,
    pub flight_search_failed: bool,
}

impl WizardSession {
    /// Open a session for a trip, pre-seeding every draft from the values
    /// committed so far. Re-opening a finished plan therefore presents
    /// the form already filled in.
    pub fn for_trip(trip: &Trip) -> Self {
        Self {
            trip_id: trip.id,
            current: StepId::Parameters,
            phase: StepPhase::Idle,
            origin_city: trip.origin_city.clone().unwrap_or_default(),
            travelers: trip.travelers.unwrap_or(DEFAULT_TRAVELERS),
            budget_idr: trip.budget_idr.unwrap_or(DEFAULT_BUDGET_IDR),
            needs_flight: trip.needs_flight.unwrap_or(true),
            cities: trip.cities.clone().unwrap_or_default(),
            last_confirmed_duration: DEFAULT_STAY_DAYS,
            selected_flight_id: trip.selected_flight_id,
            flights: Vec::new(),
            flight_search_failed: false,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase == StepPhase::Idle
    }

    /// The fetched candidate with the given id, if present in the
    /// current snapshot
    pub fn flight(&self, id: Uuid) -> Option<&Flight> {
        self.flights.iter().find(|flight| flight.id == id)
    }
}
