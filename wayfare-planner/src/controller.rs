use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;
use wayfare_core::identity::SessionProvider;
use wayfare_core::repository::{FlightRepository, TripRepository};
use wayfare_itinerary::ItineraryGenerator;
use wayfare_shared::{City, Trip, TripStatus};

use crate::session::{StepPhase, WizardSession};
use crate::steps::{next_after, ordinal_of, visible_steps, StepId};
use crate::view::WizardView;

/// Artificial latency applied to generation, standing in for a remote
/// planning service
const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(4000);

/// Form payload for one step submission. The payload identifies the step
/// it belongs to, so a submission against the wrong step is rejected as
/// an invalid transition.
#[derive(Debug, Clone)]
pub enum StepSubmission {
    Parameters {
        origin_city: String,
        travelers: u32,
        budget_idr: i64,
        needs_flight: bool,
    },
    /// Confirms the flight recorded by `select_flight`
    Flight,
    /// Confirms the city draft list
    Cities,
}

impl StepSubmission {
    pub fn step_id(&self) -> StepId {
        match self {
            StepSubmission::Parameters { .. } => StepId::Parameters,
            StepSubmission::Flight => StepId::Flight,
            StepSubmission::Cities => StepId::Cities,
        }
    }
}

/// Where the wizard went after a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved to the next visible step, ready for input
    Advanced(StepId),
    /// Entered the flight step; the candidate search has not resolved yet
    AwaitingFlights,
    /// Entered the itinerary step; generation has not resolved yet
    Generating,
}

/// Owns one planning session: the authoritative current step, the draft
/// state, and the commit path to the trip record. All transition rules
/// live here.
pub struct WizardController {
    trips: Arc<dyn TripRepository>,
    flights: Arc<dyn FlightRepository>,
    generator: ItineraryGenerator,
    generation_delay: Duration,
    trip: Trip,
    session: WizardSession,
}

impl WizardController {
    /// Load the trip and open a planning session for it. Requires a
    /// signed-in user; drafts are pre-seeded from committed trip fields.
    pub async fn open(
        trip_id: Uuid,
        identity: &dyn SessionProvider,
        trips: Arc<dyn TripRepository>,
        flights: Arc<dyn FlightRepository>,
    ) -> Result<Self, WizardError> {
        let user = identity.current_user().ok_or(WizardError::NotSignedIn)?;

        let trip = trips
            .load_trip(trip_id)
            .await
            .map_err(|err| WizardError::TripSource(err.to_string()))?
            .ok_or(WizardError::TripNotFound(trip_id))?;

        tracing::info!("Opened planner for trip {} (user {})", trip.id, user.id);

        let session = WizardSession::for_trip(&trip);
        Ok(Self {
            trips,
            flights,
            generator: ItineraryGenerator::new(),
            generation_delay: DEFAULT_GENERATION_DELAY,
            trip,
            session,
        })
    }

    /// Override the simulated generation latency (tests use zero)
    pub fn with_generation_delay(mut self, delay: Duration) -> Self {
        self.generation_delay = delay;
        self
    }

    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    /// Presentation snapshot of the whole session
    pub fn view(&self) -> WizardView {
        WizardView::from_state(&self.trip, &self.session)
    }

    /// The ordered steps applicable to this trip, given the current
    /// flight-need draft
    pub fn visible_steps(&self) -> Vec<StepId> {
        visible_steps(self.trip.destination_kind, self.session.needs_flight)
    }

    /// A step can be revisited only if it comes strictly before the
    /// current one. Jumping ahead is never allowed.
    pub fn can_return_to_step(&self, step: StepId) -> bool {
        let steps = self.visible_steps();
        match (
            ordinal_of(&steps, step),
            ordinal_of(&steps, self.session.current),
        ) {
            (Some(target), Some(current)) => target < current,
            _ => false,
        }
    }

    /// Re-enter an earlier step. Drafts keep their committed values, so
    /// the form re-opens pre-filled; a previously generated itinerary
    /// stays on the trip until the city step is resubmitted.
    pub fn return_to_step(&mut self, step: StepId) -> Result<(), WizardError> {
        if !self.session.is_idle() {
            return Err(WizardError::Pending(self.session.phase));
        }
        if !self.can_return_to_step(step) {
            return Err(WizardError::InvalidTransition {
                from: self.session.current,
                to: step,
            });
        }

        tracing::info!("Returning to step {:?} for trip {}", step, self.trip.id);
        self.session.current = step;
        Ok(())
    }

    /// Record a flight choice in the draft. The candidate must be in the
    /// current snapshot; availability is enforced at submit time.
    pub fn select_flight(&mut self, flight_id: Uuid) -> Result<(), WizardError> {
        if !self.session.is_idle() {
            return Err(WizardError::Pending(self.session.phase));
        }
        if self.session.current != StepId::Flight {
            return Err(WizardError::InvalidTransition {
                from: self.session.current,
                to: StepId::Flight,
            });
        }
        if self.session.flight(flight_id).is_none() {
            return Err(WizardError::UnknownFlight(flight_id));
        }

        self.session.selected_flight_id = Some(flight_id);
        Ok(())
    }

    /// Append a city to the draft list. A missing duration falls back to
    /// the last confirmed one.
    pub fn add_city(
        &mut self,
        name: &str,
        duration_days: Option<u32>,
    ) -> Result<City, WizardError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::BlankCityName.into());
        }
        if duration_days == Some(0) {
            return Err(ValidationError::InvalidStayDuration.into());
        }

        let duration = duration_days.unwrap_or(self.session.last_confirmed_duration);
        let city = City::new(name.to_string(), duration);
        self.session.last_confirmed_duration = duration;
        self.session.cities.push(city.clone());
        Ok(city)
    }

    /// Remove a draft city. No-op when the id is not in the draft.
    pub fn remove_city(&mut self, city_id: Uuid) {
        self.session.cities.retain(|city| city.id != city_id);
    }

    /// Validate and commit the submitted step, then move to the next
    /// visible step per the branch rules. Validation failures never touch
    /// committed trip state.
    pub async fn submit_step(
        &mut self,
        submission: StepSubmission,
    ) -> Result<StepOutcome, WizardError> {
        if !self.session.is_idle() {
            return Err(WizardError::Pending(self.session.phase));
        }
        if submission.step_id() != self.session.current {
            return Err(WizardError::InvalidTransition {
                from: self.session.current,
                to: submission.step_id(),
            });
        }

        match submission {
            StepSubmission::Parameters {
                origin_city,
                travelers,
                budget_idr,
                needs_flight,
            } => {
                self.submit_parameters(origin_city, travelers, budget_idr, needs_flight)
                    .await
            }
            StepSubmission::Flight => self.submit_flight().await,
            StepSubmission::Cities => self.submit_cities().await,
        }
    }

    async fn submit_parameters(
        &mut self,
        origin_city: String,
        travelers: u32,
        budget_idr: i64,
        needs_flight: bool,
    ) -> Result<StepOutcome, WizardError> {
        if travelers < 1 {
            return Err(ValidationError::InvalidTravelers.into());
        }
        if budget_idr < 0 {
            return Err(ValidationError::InvalidBudget.into());
        }

        let mut updated = self.trip.clone();
        updated.origin_city = Some(origin_city.clone());
        updated.travelers = Some(travelers);
        updated.budget_idr = Some(budget_idr);
        updated.needs_flight = Some(needs_flight);
        if updated.status == TripStatus::Draft {
            updated.update_status(TripStatus::Planning);
        }
        self.commit(updated).await?;

        self.session.origin_city = origin_city;
        self.session.travelers = travelers;
        self.session.budget_idr = budget_idr;
        self.session.needs_flight = needs_flight;

        let steps = self.visible_steps();
        let next = next_after(&steps, StepId::Parameters).unwrap_or(StepId::Itinerary);
        self.session.current = next;

        if next == StepId::Flight {
            // Candidate search resolves via load_flights
            self.session.phase = StepPhase::LoadingFlights;
            return Ok(StepOutcome::AwaitingFlights);
        }
        Ok(StepOutcome::Advanced(next))
    }

    async fn submit_flight(&mut self) -> Result<StepOutcome, WizardError> {
        let selected = self
            .session
            .selected_flight_id
            .and_then(|id| self.session.flight(id))
            .filter(|flight| flight.available)
            .cloned()
            .ok_or(ValidationError::NoFlightSelected)?;

        let mut updated = self.trip.clone();
        updated.selected_flight_id = Some(selected.id);
        self.commit(updated).await?;

        tracing::info!(
            "Committed flight {} {} for trip {}",
            selected.airline,
            selected.flight_number,
            self.trip.id
        );

        let steps = self.visible_steps();
        let next = next_after(&steps, StepId::Flight).unwrap_or(StepId::Itinerary);
        self.session.current = next;
        Ok(StepOutcome::Advanced(next))
    }

    async fn submit_cities(&mut self) -> Result<StepOutcome, WizardError> {
        if self.session.cities.is_empty() {
            return Err(ValidationError::EmptyCityList.into());
        }

        let mut updated = self.trip.clone();
        updated.cities = Some(self.session.cities.clone());
        self.commit(updated).await?;

        self.session.current = StepId::Itinerary;
        self.session.phase = StepPhase::Generating;
        Ok(StepOutcome::Generating)
    }

    /// Resolve the pending flight search started by the parameters step.
    /// Best-effort and retry-free: on failure the snapshot stays empty
    /// and the flight step stays blocked for the rest of the session.
    pub async fn load_flights(&mut self) -> Result<usize, WizardError> {
        if self.session.phase != StepPhase::LoadingFlights {
            return Err(WizardError::NothingPending);
        }

        let origin = self.trip.origin_city.clone().unwrap_or_default();
        let result = self
            .flights
            .search_flights(&origin, &self.trip.destination)
            .await;
        self.session.phase = StepPhase::Idle;

        match result {
            Ok(candidates) => {
                // A stale selection from a previous snapshot is dropped
                if let Some(selected) = self.session.selected_flight_id {
                    if !candidates.iter().any(|flight| flight.id == selected) {
                        self.session.selected_flight_id = None;
                    }
                }
                let count = candidates.len();
                self.session.flights = candidates;
                self.session.flight_search_failed = false;
                tracing::info!("Flight search returned {} candidates", count);
                Ok(count)
            }
            Err(err) => {
                self.session.flights.clear();
                self.session.selected_flight_id = None;
                self.session.flight_search_failed = true;
                tracing::warn!("Flight search failed: {}", err);
                Err(WizardError::FlightSearch(err.to_string()))
            }
        }
    }

    /// Resolve the pending itinerary generation started by the city
    /// step. Stores the schedule on the trip and completes it.
    pub async fn finish_generation(&mut self) -> Result<usize, WizardError> {
        if self.session.phase != StepPhase::Generating {
            return Err(WizardError::NothingPending);
        }

        let cities = self.trip.cities.clone().unwrap_or_default();
        let days = self
            .generator
            .generate_after_delay(&cities, self.generation_delay)
            .await;
        self.session.phase = StepPhase::Idle;

        // An empty schedule is "no itinerary", never a completed trip
        if days.is_empty() {
            return Ok(0);
        }

        let count = days.len();
        let mut updated = self.trip.clone();
        updated.itinerary = Some(days);
        updated.update_status(TripStatus::Completed);
        self.commit(updated).await?;

        tracing::info!(
            "Generated {}-day itinerary for trip {}",
            count,
            self.trip.id
        );
        Ok(count)
    }

    /// Commit-then-swap so a failed save never leaves half-updated state
    async fn commit(&mut self, updated: Trip) -> Result<(), WizardError> {
        self.trips
            .commit_trip(&updated)
            .await
            .map_err(|err| WizardError::TripSource(err.to_string()))?;
        self.trip = updated;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Trip not found: {0}")]
    TripNotFound(Uuid),

    #[error("Sign-in required to open the planner")]
    NotSignedIn,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid step transition from {from:?} to {to:?}")]
    InvalidTransition { from: StepId, to: StepId },

    #[error("An operation is still pending in phase {0:?}")]
    Pending(StepPhase),

    #[error("No pending operation to resolve")]
    NothingPending,

    #[error("Unknown flight candidate: {0}")]
    UnknownFlight(Uuid),

    #[error("Flight search failed: {0}")]
    FlightSearch(String),

    #[error("Trip source error: {0}")]
    TripSource(String),
}

/// User-correctable input failures. These block the current transition
/// and are surfaced for display; nothing is retried automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Traveler count must be at least 1")]
    InvalidTravelers,

    #[error("Budget must not be negative")]
    InvalidBudget,

    #[error("Please select an available flight")]
    NoFlightSelected,

    #[error("Please add at least one city")]
    EmptyCityList,

    #[error("Please enter a city name")]
    BlankCityName,

    #[error("Stay duration must be at least one day")]
    InvalidStayDuration,
}
