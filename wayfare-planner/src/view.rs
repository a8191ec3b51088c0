use serde::Serialize;
use uuid::Uuid;
use wayfare_itinerary::{total_cost_idr, total_days};
use wayfare_shared::{City, Flight, ItineraryDay, Trip, TripStatus};

use crate::session::{StepPhase, WizardSession};
use crate::steps::{ordinal_of, visible_steps, StepId};

/// One entry of the step timeline
#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub id: StepId,
    pub ordinal: usize,
    pub title: &'static str,
    pub is_active: bool,
    pub is_completed: bool,
}

/// Read-only snapshot of a planning session for rendering. This is the
/// whole presentation boundary; nothing here can mutate the session.
#[derive(Debug, Clone, Serialize)]
pub struct WizardView {
    pub trip_id: Uuid,
    pub trip_title: String,
    pub destination: String,
    pub status: TripStatus,
    pub current_step: StepId,
    pub current_ordinal: usize,
    pub phase: StepPhase,
    pub steps: Vec<StepView>,
    pub origin_city: String,
    pub travelers: u32,
    pub budget_idr: i64,
    pub needs_flight: bool,
    pub flights: Vec<Flight>,
    pub flight_search_failed: bool,
    pub selected_flight_id: Option<Uuid>,
    pub cities: Vec<City>,
    pub total_days: u32,
    pub itinerary: Option<Vec<ItineraryDay>>,
    pub estimated_cost_idr: Option<i64>,
}

impl WizardView {
    pub fn from_state(trip: &Trip, session: &WizardSession) -> Self {
        let sequence = visible_steps(trip.destination_kind, session.needs_flight);
        let current_ordinal = ordinal_of(&sequence, session.current).unwrap_or(1);

        let steps = sequence
            .iter()
            .enumerate()
            .map(|(index, &id)| StepView {
                id,
                ordinal: index + 1,
                title: id.title(),
                is_active: id == session.current,
                is_completed: index + 1 < current_ordinal,
            })
            .collect();

        Self {
            trip_id: trip.id,
            trip_title: trip.title.clone(),
            destination: trip.destination.clone(),
            status: trip.status,
            current_step: session.current,
            current_ordinal,
            phase: session.phase,
            steps,
            origin_city: session.origin_city.clone(),
            travelers: session.travelers,
            budget_idr: session.budget_idr,
            needs_flight: session.needs_flight,
            flights: session.flights.clone(),
            flight_search_failed: session.flight_search_failed,
            selected_flight_id: session.selected_flight_id,
            cities: session.cities.clone(),
            total_days: total_days(&session.cities),
            itinerary: trip.itinerary.clone(),
            estimated_cost_idr: trip.itinerary.as_deref().map(total_cost_idr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wayfare_shared::DestinationKind;

    fn trip(kind: DestinationKind) -> Trip {
        Trip::new(
            "Bali Getaway".to_string(),
            "Indonesia".to_string(),
            kind,
            NaiveDate::from_ymd_opt(2023, 12, 10).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 20).unwrap(),
        )
    }

    #[test]
    fn test_ordinals_follow_the_visible_sequence() {
        let trip = trip(DestinationKind::Country);
        let mut session = WizardSession::for_trip(&trip);
        session.needs_flight = false;
        session.current = StepId::Cities;

        let view = WizardView::from_state(&trip, &session);

        assert_eq!(view.current_ordinal, 2);
        let cities_entry = view
            .steps
            .iter()
            .find(|step| step.id == StepId::Cities)
            .unwrap();
        assert_eq!(cities_entry.ordinal, 2);
        assert!(cities_entry.is_active);
        assert!(view.steps[0].is_completed);
    }

    #[test]
    fn test_city_draft_totals() {
        let trip = trip(DestinationKind::Country);
        let mut session = WizardSession::for_trip(&trip);
        session.cities = vec![
            City::new("Ubud".to_string(), 2),
            City::new("Seminyak".to_string(), 1),
        ];

        let view = WizardView::from_state(&trip, &session);
        assert_eq!(view.total_days, 3);
        assert!(view.estimated_cost_idr.is_none());
    }

    #[test]
    fn test_view_serializes() {
        let trip = trip(DestinationKind::City);
        let session = WizardSession::for_trip(&trip);

        let json = serde_json::to_value(WizardView::from_state(&trip, &session)).unwrap();
        assert_eq!(json["current_step"], "parameters");
        assert_eq!(json["phase"], "idle");
        assert_eq!(json["steps"].as_array().unwrap().len(), 3);
    }
}
