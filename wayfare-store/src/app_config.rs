use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub generation: GenerationConfig,
    pub defaults: PlannerDefaults,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Simulated carrier-feed latency
    pub flight_search_delay_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            flight_search_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GenerationConfig {
    /// Simulated itinerary generation latency
    pub itinerary_delay_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            itinerary_delay_ms: 4000,
        }
    }
}

/// Initial planner form values
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PlannerDefaults {
    pub travelers: u32,
    pub budget_idr: i64,
    pub stay_days: u32,
    pub needs_flight: bool,
}

impl Default for PlannerDefaults {
    fn default() -> Self {
        Self {
            travelers: 1,
            budget_idr: 10_000_000,
            stay_days: 2,
            needs_flight: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Base configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Environment-specific overrides, development by default
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `WAYFARE__SEARCH__FLIGHT_SEARCH_DELAY_MS=0`
            .add_source(config::Environment::with_prefix("WAYFARE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
