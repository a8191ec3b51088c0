use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A candidate flight returned by the flight search. Departure and
/// arrival are local times of day as supplied by the carrier feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flight {
    pub id: Uuid,
    pub airline: String,
    pub flight_number: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub price_idr: i64,
    pub available: bool,
}

impl Flight {
    pub fn new(
        airline: String,
        flight_number: String,
        departure_time: String,
        arrival_time: String,
        price_idr: i64,
        available: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            airline,
            flight_number,
            departure_time,
            arrival_time,
            price_idr,
            available,
        }
    }
}
