use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;
use wayfare_core::repository::TripRepository;
use wayfare_core::validate::validate_new_trip;
use wayfare_core::CoreError;
use wayfare_shared::{DestinationKind, NewTripRequest, Trip, TripStatus};

/// In-memory trip table behind the repository seam. Commits are visible
/// to subsequent loads as soon as the call returns, which is all the
/// planner requires of a trip source.
pub struct InMemoryTripRepository {
    trips: RwLock<HashMap<Uuid, Trip>>,
}

impl InMemoryTripRepository {
    pub fn new() -> Self {
        Self {
            trips: RwLock::new(HashMap::new()),
        }
    }

    /// Seeded with the two demo trips
    pub fn with_demo_data() -> Self {
        let mut trips = HashMap::new();

        let mut tokyo = Trip::new(
            "Tokyo Adventure".to_string(),
            "Japan".to_string(),
            DestinationKind::Country,
            NaiveDate::from_ymd_opt(2023, 10, 15).unwrap_or_default(),
            NaiveDate::from_ymd_opt(2023, 10, 25).unwrap_or_default(),
        );
        tokyo.status = TripStatus::Completed;
        tokyo.cover_image = Some(
            "https://images.unsplash.com/photo-1536098561742-ca998e48cbcc?auto=format&fit=crop&q=80&w=1400"
                .to_string(),
        );
        trips.insert(tokyo.id, tokyo);

        let mut bali = Trip::new(
            "Bali Getaway".to_string(),
            "Indonesia".to_string(),
            DestinationKind::Country,
            NaiveDate::from_ymd_opt(2023, 12, 10).unwrap_or_default(),
            NaiveDate::from_ymd_opt(2023, 12, 20).unwrap_or_default(),
        );
        bali.status = TripStatus::Planning;
        bali.cover_image = Some(
            "https://images.unsplash.com/photo-1537996194471-e657df975ab4?auto=format&fit=crop&q=80&w=1400"
                .to_string(),
        );
        trips.insert(bali.id, bali);

        Self {
            trips: RwLock::new(trips),
        }
    }

    pub async fn insert(&self, trip: Trip) {
        self.trips.write().await.insert(trip.id, trip);
    }
}

impl Default for InMemoryTripRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TripRepository for InMemoryTripRepository {
    async fn load_trip(
        &self,
        id: Uuid,
    ) -> Result<Option<Trip>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.trips.read().await.get(&id).cloned())
    }

    async fn commit_trip(
        &self,
        trip: &Trip,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut trips = self.trips.write().await;
        if !trips.contains_key(&trip.id) {
            return Err(CoreError::NotFound(trip.id.to_string()).into());
        }

        trips.insert(trip.id, trip.clone());
        tracing::debug!("Committed trip {} ({:?})", trip.id, trip.status);
        Ok(())
    }

    async fn list_trips(
        &self,
    ) -> Result<Vec<Trip>, Box<dyn std::error::Error + Send + Sync>> {
        let mut list: Vec<Trip> = self.trips.read().await.values().cloned().collect();
        list.sort_by_key(|trip| trip.start_date);
        Ok(list)
    }

    async fn create_trip(
        &self,
        request: NewTripRequest,
    ) -> Result<Trip, Box<dyn std::error::Error + Send + Sync>> {
        validate_new_trip(&request)?;

        let mut trip = Trip::new(
            request.title.trim().to_string(),
            request.destination.trim().to_string(),
            request.destination_kind,
            request.start_date,
            request.end_date,
        );
        trip.notes = request.notes;

        tracing::info!("Created trip {} \"{}\"", trip.id, trip.title);
        self.trips.write().await.insert(trip.id, trip.clone());
        Ok(trip)
    }
}
