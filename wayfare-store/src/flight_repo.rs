use std::time::Duration;

use async_trait::async_trait;
use wayfare_core::repository::FlightRepository;
use wayfare_shared::Flight;

use crate::app_config::Config;

/// Canned flight source standing in for a carrier feed. Serves a fixed
/// candidate list after a configurable latency, and can be built in a
/// permanently failing mode to exercise fetch-failure paths.
pub struct MockFlightRepository {
    delay: Duration,
    fail: bool,
}

impl MockFlightRepository {
    pub fn new() -> Self {
        Self {
            delay: Duration::ZERO,
            fail: false,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Every search fails, as if the feed were unreachable
    pub fn failing() -> Self {
        Self {
            delay: Duration::ZERO,
            fail: true,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_delay(Duration::from_millis(config.search.flight_search_delay_ms))
    }

    fn candidates() -> Vec<Flight> {
        vec![
            Flight::new(
                "Garuda Indonesia".to_string(),
                "GA-412".to_string(),
                "08:40".to_string(),
                "11:20".to_string(),
                4_200_000,
                true,
            ),
            Flight::new(
                "Lion Air".to_string(),
                "JT-507".to_string(),
                "10:15".to_string(),
                "13:05".to_string(),
                2_350_000,
                true,
            ),
            Flight::new(
                "Batik Air".to_string(),
                "ID-726".to_string(),
                "14:30".to_string(),
                "17:10".to_string(),
                3_100_000,
                false,
            ),
        ]
    }
}

impl Default for MockFlightRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FlightRepository for MockFlightRepository {
    async fn search_flights(
        &self,
        origin_city: &str,
        destination: &str,
    ) -> Result<Vec<Flight>, Box<dyn std::error::Error + Send + Sync>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.fail {
            return Err("Flight search backend unavailable".into());
        }

        tracing::debug!("Searching flights {} -> {}", origin_city, destination);
        Ok(Self::candidates())
    }
}
