use std::time::Duration;

use wayfare_shared::{Activity, City, ItineraryDay};

use crate::templates::{day_plan, ActivitySlot};

/// Generates a day-by-day schedule from an ordered city list.
///
/// Generation is a pure function of its input: the same city list always
/// produces the same schedule, including activity ids. Day numbering is
/// global across the whole trip, so city boundaries never restart it.
pub struct ItineraryGenerator {
    plan: [ActivitySlot; 4],
}

impl ItineraryGenerator {
    pub fn new() -> Self {
        Self { plan: day_plan() }
    }

    /// Emit one `ItineraryDay` per stay day per city, in city order
    pub fn generate(&self, cities: &[City]) -> Vec<ItineraryDay> {
        let mut days = Vec::new();
        let mut day_number: u32 = 0;

        for city in cities {
            for _ in 0..city.duration_days {
                day_number += 1;
                days.push(self.build_day(day_number, &city.name));
            }
        }

        days
    }

    /// Same computation behind an artificial delay, standing in for a
    /// remote generation service. Resolves exactly once with the full
    /// schedule.
    pub async fn generate_after_delay(
        &self,
        cities: &[City],
        delay: Duration,
    ) -> Vec<ItineraryDay> {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.generate(cities)
    }

    fn build_day(&self, day_number: u32, city_name: &str) -> ItineraryDay {
        let activities = self
            .plan
            .iter()
            .enumerate()
            .map(|(slot_index, slot)| Activity {
                // Derived id keeps generation deterministic
                id: format!("act-{}-{}", day_number, slot_index + 1),
                time: slot.time.to_string(),
                title: slot.render_title(city_name),
                description: slot.render_description(city_name),
                cost_idr: slot.cost_idr,
                duration_label: slot.duration_label.to_string(),
            })
            .collect();

        ItineraryDay {
            date_label: format!("Day {}", day_number),
            city_name: city_name.to_string(),
            activities,
        }
    }
}

impl Default for ItineraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Total stay length over a city list, in days
pub fn total_days(cities: &[City]) -> u32 {
    cities.iter().map(|city| city.duration_days).sum()
}

/// Summed activity cost over a generated schedule
pub fn total_cost_idr(days: &[ItineraryDay]) -> i64 {
    days.iter()
        .flat_map(|day| day.activities.iter())
        .map(|activity| activity.cost_idr)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities(stops: &[(&str, u32)]) -> Vec<City> {
        stops
            .iter()
            .map(|(name, duration)| City::new(name.to_string(), *duration))
            .collect()
    }

    #[test]
    fn test_ubud_seminyak_schedule() {
        let generator = ItineraryGenerator::new();
        let days = generator.generate(&cities(&[("Ubud", 2), ("Seminyak", 1)]));

        assert_eq!(days.len(), 3);

        let city_sequence: Vec<&str> = days.iter().map(|d| d.city_name.as_str()).collect();
        assert_eq!(city_sequence, vec!["Ubud", "Ubud", "Seminyak"]);

        let labels: Vec<&str> = days.iter().map(|d| d.date_label.as_str()).collect();
        assert_eq!(labels, vec!["Day 1", "Day 2", "Day 3"]);

        for day in &days {
            assert_eq!(day.activities.len(), 4);
            let costs: Vec<i64> = day.activities.iter().map(|a| a.cost_idr).collect();
            assert_eq!(costs, vec![75_000, 250_000, 0, 350_000]);
        }
    }

    #[test]
    fn test_day_numbering_does_not_reset_at_city_boundaries() {
        let generator = ItineraryGenerator::new();
        let days = generator.generate(&cities(&[("Kyoto", 3), ("Osaka", 2), ("Nara", 1)]));

        for (index, day) in days.iter().enumerate() {
            assert_eq!(day.date_label, format!("Day {}", index + 1));
        }
    }

    #[test]
    fn test_generation_is_idempotent() {
        let generator = ItineraryGenerator::new();
        let input = cities(&[("Ubud", 2), ("Seminyak", 1)]);

        let first = generator.generate(&input);
        let second = generator.generate(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_city_list_yields_empty_schedule() {
        let generator = ItineraryGenerator::new();
        assert!(generator.generate(&[]).is_empty());
    }

    #[test]
    fn test_sightseeing_slot_carries_city_name() {
        let generator = ItineraryGenerator::new();
        let days = generator.generate(&cities(&[("Ubud", 1)]));

        let sightseeing = &days[0].activities[1];
        assert_eq!(sightseeing.title, "Visit Ubud attractions");
        assert_eq!(sightseeing.description, "Explore popular tourist spots in Ubud");
    }

    #[test]
    fn test_activity_ids_unique_across_trip() {
        let generator = ItineraryGenerator::new();
        let days = generator.generate(&cities(&[("Ubud", 2), ("Seminyak", 2)]));

        let mut ids: Vec<&str> = days
            .iter()
            .flat_map(|d| d.activities.iter().map(|a| a.id.as_str()))
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_totals() {
        let input = cities(&[("Ubud", 2), ("Seminyak", 1)]);
        assert_eq!(total_days(&input), 3);

        let days = ItineraryGenerator::new().generate(&input);
        // 675_000 per day across three days
        assert_eq!(total_cost_idr(&days), 2_025_000);
    }

    #[tokio::test]
    async fn test_delayed_generation_matches_direct_generation() {
        let generator = ItineraryGenerator::new();
        let input = cities(&[("Ubud", 1)]);

        let delayed = generator
            .generate_after_delay(&input, Duration::from_millis(5))
            .await;
        assert_eq!(delayed, generator.generate(&input));
    }
}
