pub mod generator;
pub mod templates;

pub use generator::{total_cost_idr, total_days, ItineraryGenerator};
pub use templates::{day_plan, ActivitySlot};
