use async_trait::async_trait;
use uuid::Uuid;
use wayfare_shared::{Flight, NewTripRequest, Trip};

/// Repository trait for trip data access
#[async_trait]
pub trait TripRepository: Send + Sync {
    async fn load_trip(
        &self,
        id: Uuid,
    ) -> Result<Option<Trip>, Box<dyn std::error::Error + Send + Sync>>;

    /// Persist the trip. Committed fields must be visible to subsequent
    /// loads before the call returns.
    async fn commit_trip(
        &self,
        trip: &Trip,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn list_trips(
        &self,
    ) -> Result<Vec<Trip>, Box<dyn std::error::Error + Send + Sync>>;

    async fn create_trip(
        &self,
        request: NewTripRequest,
    ) -> Result<Trip, Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for flight candidate search
#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn search_flights(
        &self,
        origin_city: &str,
        destination: &str,
    ) -> Result<Vec<Flight>, Box<dyn std::error::Error + Send + Sync>>;
}
