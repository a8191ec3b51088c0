use serde::Serialize;

/// Marker replaced with the city name when a slot is rendered
pub const CITY_PLACEHOLDER: &str = "{city}";

/// One activity slot of the fixed daily plan. Title and description may
/// contain [`CITY_PLACEHOLDER`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActivitySlot {
    pub time: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub cost_idr: i64,
    pub duration_label: &'static str,
}

impl ActivitySlot {
    pub fn render_title(&self, city_name: &str) -> String {
        self.title.replace(CITY_PLACEHOLDER, city_name)
    }

    pub fn render_description(&self, city_name: &str) -> String {
        self.description.replace(CITY_PLACEHOLDER, city_name)
    }
}

/// The four-slot schedule applied to every planned day: breakfast,
/// sightseeing (templated on the city), relaxation, dinner. Costs are
/// fixed placeholder amounts in IDR.
pub fn day_plan() -> [ActivitySlot; 4] {
    [
        ActivitySlot {
            time: "08:00",
            title: "Breakfast at local cafe",
            description: "Enjoy a traditional local breakfast",
            cost_idr: 75_000,
            duration_label: "1 hour",
        },
        ActivitySlot {
            time: "10:00",
            title: "Visit {city} attractions",
            description: "Explore popular tourist spots in {city}",
            cost_idr: 250_000,
            duration_label: "4 hours",
        },
        ActivitySlot {
            time: "15:00",
            title: "Beach relaxation",
            description: "Spend time at the famous beaches",
            cost_idr: 0,
            duration_label: "3 hours",
        },
        ActivitySlot {
            time: "19:00",
            title: "Dinner at seafood restaurant",
            description: "Taste fresh local seafood",
            cost_idr: 350_000,
            duration_label: "2 hours",
        },
    ]
}
