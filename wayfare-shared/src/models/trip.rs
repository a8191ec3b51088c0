use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a trip record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    Draft,
    Planning,
    Completed,
}

/// Whether a destination is a whole country (multi-city planning) or a
/// single city. Drives which planning steps apply to the trip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DestinationKind {
    Country,
    City,
}

/// A trip record. Planning fields are optional and filled in step by step
/// as the planner commits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub title: String,
    pub destination: String,
    pub destination_kind: DestinationKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TripStatus,
    pub cover_image: Option<String>,
    pub notes: Option<String>,
    pub origin_city: Option<String>,
    pub travelers: Option<u32>,
    pub budget_idr: Option<i64>,
    pub needs_flight: Option<bool>,
    pub selected_flight_id: Option<Uuid>,
    pub cities: Option<Vec<City>>,
    pub itinerary: Option<Vec<ItineraryDay>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    /// Create a new draft trip with no planning fields committed yet
    pub fn new(
        title: String,
        destination: String,
        destination_kind: DestinationKind,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            destination,
            destination_kind,
            start_date,
            end_date,
            status: TripStatus::Draft,
            cover_image: None,
            notes: None,
            origin_city: None,
            travelers: None,
            budget_idr: None,
            needs_flight: None,
            selected_flight_id: None,
            cities: None,
            itinerary: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_status(&mut self, status: TripStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn is_completed(&self) -> bool {
        self.status == TripStatus::Completed
    }

    /// Country destinations plan city-by-city; single-city trips do not
    pub fn is_multi_city(&self) -> bool {
        self.destination_kind == DestinationKind::Country
    }
}

/// A city stop within a trip, with the number of nights the traveler
/// stays there
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct City {
    pub id: Uuid,
    pub name: String,
    pub duration_days: u32,
}

impl City {
    pub fn new(name: String, duration_days: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            duration_days,
        }
    }
}

/// One scheduled day of a generated itinerary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItineraryDay {
    pub date_label: String,
    pub city_name: String,
    pub activities: Vec<Activity>,
}

/// A single scheduled activity within an itinerary day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub time: String,
    pub title: String,
    pub description: String,
    pub cost_idr: i64,
    pub duration_label: String,
}

/// Request payload for creating a new trip record
#[derive(Debug, Clone, Deserialize)]
pub struct NewTripRequest {
    pub title: String,
    pub destination: String,
    pub destination_kind: DestinationKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: Option<String>,
}
